mod common;

use common::{ GeneratedPdf, TestResult };
use folio::types::{
    mm,
    Advance,
    Cell,
    Column,
    Dataset,
    Document,
    PageSetup,
    TableLayout,
    TableSpec,
    TextAlignment,
    TextStyle,
};

fn admin_spec(title: &str) -> TableSpec {
    TableSpec::new(title, vec![
            Column::new("Usuario", mm(60.0)),
            Column::new("Contraseña", mm(60.0)).and_alignment(TextAlignment::Center),
        ])
        .numbered(Column::new("N°", mm(10.0)).and_alignment(TextAlignment::Center))
}

fn rows(prefix: &str, count: usize) -> Vec<Vec<String>> {
    (1..=count)
        .map(|n| vec![format!("{prefix}_{n:02}"), format!("clave_{n:02}")])
        .collect()
}

fn listing(title: &'static str) -> Document {
    let mut doc = Document::open(PageSetup::a4());
    doc.set_header(move |doc: &mut Document, _page| {
        let cell = Cell::full_width(title, mm(10.0))
            .and_alignment(TextAlignment::Center)
            .and_advance(Advance::NextLine);
        doc.draw_cell(&cell, &TextStyle::new().with_size(15.0).bold())?;
        doc.feed(mm(2.0))
    })
    .unwrap();
    doc
}

#[test]
fn two_admins_render_title_header_and_numbered_rows() -> TestResult {
    let mut doc = Document::open(PageSetup::a4());
    doc.add_page()?;
    let spec = admin_spec("Administradores").with_rows(rows("admin", 2))?;

    TableLayout::new().render(&mut doc, &spec)?;

    let pdf = GeneratedPdf::from_bytes(doc.finalize()?.to_vec())?;
    assert_eq!(pdf.page_count(), 1);

    let texts = &pdf.page_texts()?[0];
    assert_eq!(texts, &vec![
        "Administradores",
        "N°", "Usuario", "Contraseña",
        "1", "admin_01", "clave_01",
        "2", "admin_02", "clave_02",
    ]);
    Ok(())
}

#[test]
fn two_tables_share_a_page_in_input_order() -> TestResult {
    let dataset = Dataset::parse(r#"{
        "tables": [
            { "title": "Superusuarios", "rows": [["superadmin_01", "a"], ["superadmin_02", "b"]] },
            { "title": "Administradores", "rows": [["admin_01", "c"]] }
        ]
    }"#)?;
    let mut doc = listing("Listado de Superusuarios y Administradores");
    doc.add_page()?;
    let layout = TableLayout::new();

    for table in &dataset.tables {
        let spec = admin_spec(&table.title).with_rows(table.rows.clone())?;
        layout.render(&mut doc, &spec)?;
    }

    let pdf = GeneratedPdf::from_bytes(doc.finalize()?.to_vec())?;
    let texts = &pdf.page_texts()?[0];
    let position = |needle: &str| texts.iter().position(|text| text == needle);

    assert_eq!(texts[0], "Listado de Superusuarios y Administradores");
    assert!(position("Superusuarios") < position("superadmin_02"));
    assert!(position("superadmin_02") < position("Administradores"));
    assert!(position("Administradores") < position("admin_01"));
    // numbering restarts with every table
    assert_eq!(texts.iter().filter(|text| *text == "1").count(), 2);
    Ok(())
}

#[test]
fn long_listing_repeats_page_and_table_headers() -> TestResult {
    let mut doc = listing("Listado de Usuarios Registradores");
    doc.add_page()?;
    let spec = TableSpec::new("", vec![
            Column::new("Nombre de Usuario", mm(80.0)),
            Column::new("Contraseña", mm(50.0)).and_alignment(TextAlignment::Center),
        ])
        .numbered(Column::new("N°", mm(10.0)).and_alignment(TextAlignment::Center))
        .with_rows(rows("registrador", 100))?;

    TableLayout::new().render(&mut doc, &spec)?;

    let pdf = GeneratedPdf::from_bytes(doc.finalize()?.to_vec())?;
    assert!(pdf.page_count() >= 3);

    let pages = pdf.page_texts()?;
    let mut numbers = Vec::new();

    for texts in &pages {
        assert_eq!(texts[0], "Listado de Usuarios Registradores");
        assert_eq!(&texts[1..4], &["N°", "Nombre de Usuario", "Contraseña"]);

        // body cells come in (number, user, password) triples after the header row
        numbers.extend(texts[4..].chunks(3).map(|row| row[0].parse::<usize>().unwrap()));
    }

    assert_eq!(numbers, (1..=100).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn empty_table_keeps_title_and_header() -> TestResult {
    let mut doc = Document::open(PageSetup::a4());
    let spec = admin_spec("Superusuarios");

    TableLayout::new().render(&mut doc, &spec)?;

    let pdf = GeneratedPdf::from_bytes(doc.finalize()?.to_vec())?;
    assert_eq!(pdf.page_texts()?, vec![vec!["Superusuarios", "N°", "Usuario", "Contraseña"]]);
    Ok(())
}

#[test]
fn shipped_datasets_hold_the_expected_tables() -> TestResult {
    let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");

    let registrars = Dataset::from_file(data.join("usuarios_registradores.json"))?;
    assert!(!registrars.require("Registradores")?.rows.is_empty());

    let admins = Dataset::from_file(data.join("usuarios_admins_superusuarios.json"))?;
    let titles: Vec<&str> = admins.tables.iter().map(|table| table.title.as_str()).collect();
    assert_eq!(titles, vec!["Superusuarios", "Administradores"]);

    for table in &admins.tables {
        admin_spec(&table.title).with_rows(table.rows.clone())?;
    }
    Ok(())
}
