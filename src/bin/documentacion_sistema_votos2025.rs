use chrono::Utc;
use env_logger::Env;
use log::info;

use folio::types::{
    mm,
    CoverSpec,
    Document,
    DocumentInfo,
    Error,
    PageSetup,
    SectionDocument,
    SectionSpec,
};

const OUTPUT: &str = "documentacion_sistema_votos2025.pdf";
const LOGO: &str = "logo.jpg";

const SECTIONS: [(&str, &str); 10] = [
    ("README", "readme.md"),
    ("Correcciones Implementadas", "correcciones_implementadas.md"),
    ("Mejoras de Sincronización", "mejoras_sincronizacion.md"),
    ("Configuración del Servidor", "configuracion_servidor.md"),
    ("Sistema de Cache y Sincronización", "sistema_cache_sincronizacion.md"),
    ("Campos Sexo y Edad", "campos_sexo_edad.md"),
    ("Configuración de Firebase", "configuracion_firebase.md"),
    ("Optimizaciones", "optimizaciones.md"),
    ("Optimizaciones Implementadas", "optimizaciones_implementadas.md"),
    ("Manejo de Acentos y Ñ", "manejo_acentos_ñ.md"),
];

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("folio=info")).init();

    // every section file must exist before anything is drawn
    let sections = SECTIONS
        .iter()
        .map(|(title, file)| SectionSpec::from_file(*title, file))
        .collect::<Result<Vec<_>, _>>()?;
    info!("{} section(s) loaded", sections.len());

    let cover = CoverSpec::new(
            "Sistema de Registro de Votos 2025",
            "Documentación Técnica y Funcional",
            "Incluye: instalación, configuración, optimizaciones, sincronización, validaciones, \
             mejoras y soporte.\n\nVersión: 2025\nAutor: Equipo de Desarrollo",
        )
        .with_logo(LOGO);

    let info = DocumentInfo::new()
        .with_title("Sistema de Registro de Votos 2025")
        .and_subject("Documentación Técnica y Funcional")
        .and_author("Equipo de Desarrollo")
        .and_creator(env!("CARGO_PKG_NAME"))
        .and_created(Utc::now());

    let setup = PageSetup::a4().and_page_break(true, mm(18.0));
    let mut doc = Document::open(setup).with_info(info);

    SectionDocument::new()
        .with_running_header("Sistema de Votos 2025 - Documentación")
        .render(&mut doc, &cover, &sections)?;

    doc.save(OUTPUT)?;

    println!("PDF generado: {OUTPUT}");
    Ok(())
}
