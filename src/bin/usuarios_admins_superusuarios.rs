use chrono::Utc;
use env_logger::Env;
use log::info;

use folio::types::{
    mm,
    Advance,
    Cell,
    Column,
    Dataset,
    Document,
    DocumentInfo,
    Error,
    PageSetup,
    TableLayout,
    TableSpec,
    TextAlignment,
    TextStyle,
};

const DATA: &str = "data/usuarios_admins_superusuarios.json";
const OUTPUT: &str = "usuarios_admins_superusuarios.pdf";
const TITLE: &str = "Listado de Superusuarios y Administradores";

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("folio=info")).init();

    let dataset = Dataset::from_file(DATA)?;

    let info = DocumentInfo::new()
        .with_title(TITLE)
        .and_creator(env!("CARGO_PKG_NAME"))
        .and_created(Utc::now());
    let mut doc = Document::open(PageSetup::a4()).with_info(info);

    doc.set_header(|doc: &mut Document, _page| {
        let cell = Cell::full_width(TITLE, mm(10.0))
            .and_alignment(TextAlignment::Center)
            .and_advance(Advance::NextLine);
        doc.draw_cell(&cell, &TextStyle::new().with_size(15.0).bold())?;
        doc.feed(mm(2.0))
    })?;
    doc.add_page()?;

    let layout = TableLayout::new();

    for table in &dataset.tables {
        info!("{}: {} row(s)", table.title, table.rows.len());

        let spec = TableSpec::new(table.title.as_str(), vec![
                Column::new("Usuario", mm(60.0)),
                Column::new("Contraseña", mm(60.0)).and_alignment(TextAlignment::Center),
            ])
            .numbered(Column::new("N°", mm(10.0)).and_alignment(TextAlignment::Center))
            .with_rows(table.rows.clone())?;

        layout.render(&mut doc, &spec)?;
    }

    doc.save(OUTPUT)?;

    println!("PDF generado: {OUTPUT}");
    Ok(())
}
