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

const DATA: &str = "data/usuarios_registradores.json";
const OUTPUT: &str = "usuarios_registradores.pdf";
const TITLE: &str = "Listado de Usuarios Registradores";

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("folio=info")).init();

    let dataset = Dataset::from_file(DATA)?;
    let table = dataset.require("Registradores")?;
    info!("{} registrar(s) loaded from {DATA}", table.rows.len());

    // the page header carries the title, the table itself stays untitled
    let spec = TableSpec::new("", vec![
            Column::new("Nombre de Usuario", mm(80.0)),
            Column::new("Contraseña", mm(50.0)).and_alignment(TextAlignment::Center),
        ])
        .numbered(Column::new("N°", mm(10.0)).and_alignment(TextAlignment::Center))
        .with_rows(table.rows.clone())?;

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

    TableLayout::new().render(&mut doc, &spec)?;
    doc.save(OUTPUT)?;

    println!("PDF generado: {OUTPUT}");
    Ok(())
}
