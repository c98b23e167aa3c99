//! # Introduction
//!
//! Folio renders small, fixed datasets into paginated PDF reports: bordered tables of rows with a
//! header repeated on every page, and booklets made of a cover page plus one titled section per
//! page. Built on top of pdf_writer (Typst), it draws with the PDF standard fonts only, so nothing
//! is embedded and the output stays small.
//!
//! Feature Road Map:
//! - [X] Helvetica and Courier families (normal, bold)
//! - [X] Text cells with borders and alignment (left, center, right)
//! - [X] Greedy word wrap with automatic page breaks
//! - [X] Page header callback
//! - [X] Tables with numbering column and repeated header row
//! - [X] Cover page with logo (JPEG, PNG)
//! - [X] Text color
//! - [ ] Italic styles
//! - [ ] Embedded TrueType fonts (full Unicode coverage)
//! - [ ] Page footers and page numbers
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! ## Text encoding
//! Standard fonts use WinAnsiEncoding, which covers Latin-1 (Spanish included) and a few
//! typographic symbols. Anything else is replaced with `?`, or rejected when the document's
//! `GlyphPolicy` is `Fail`.
//!
//! # Basic Usage
//! The main entry point is the `Document` struct. Open it with a `PageSetup`, add pages and
//! content (directly, or through `TableLayout` and `SectionDocument`), then `.save()` it.
//!
//! ### Table report
//! ```
//! use folio::types::{ mm, Column, Document, PageSetup, TableLayout, TableSpec, TextAlignment };
//!
//! let spec = TableSpec::new("Administradores", vec![
//!         Column::new("Usuario", mm(60.0)),
//!         Column::new("Contraseña", mm(60.0)).and_alignment(TextAlignment::Center),
//!     ])
//!     .numbered(Column::new("N°", mm(10.0)).and_alignment(TextAlignment::Center))
//!     .with_rows(vec![vec!["admin_01".into(), "x".into()]])?;
//!
//! let mut doc = Document::open(PageSetup::a4());
//! doc.add_page()?;
//! TableLayout::new().render(&mut doc, &spec)?;
//!
//! let pdf = doc.finalize()?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok::<(), folio::types::Error>(())
//! ```
pub mod traits;
pub mod types;
