mod content;
mod dataset;
mod doc;
mod error;
mod font;
mod font_family;
mod font_reference;
mod image_resource;
mod info;
mod page;
mod sections;
mod setup;
mod style;
mod table;
mod text;
mod text_alignment;
mod writer;

pub mod encoding;

pub use content::{ Advance, Border, Cell, DrawCommand, ImagePlacement, TextCell };
pub use dataset::{ Dataset, TableData };
pub use doc::{ Document, DocumentState, PageHeader };
pub use error::{ Error, Result };
pub use font::{ Courier, Helvetica };
pub use font_family::FontFamily;
pub use font_reference::FontReference;
pub use image_resource::ImageResource;
pub use info::DocumentInfo;
pub use page::{ Cursor, Page };
pub use sections::{ CoverSpec, SectionDocument, SectionSpec, SectionStyle };
pub use setup::{ mm, GlyphPolicy, PageSetup };
pub use style::{ Color, TextStyle, Weight };
pub use table::{ Column, TableLayout, TableSpec, TableStyle };
pub use text::{ Line, TextBlock, Word };
pub use text_alignment::TextAlignment;
pub use writer::Writer;
