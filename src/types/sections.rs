use std::path::{ Path, PathBuf };
use log::warn;
use serde::Deserialize;

use crate::types::{
    mm,
    Advance,
    Cell,
    Color,
    Document,
    Error,
    Result,
    TextAlignment,
    TextStyle,
};

// cover geometry, millimetres from the top-left page corner
const LOGO_X: f32 = 80.0;
const LOGO_TOP: f32 = 30.0;
const LOGO_WIDTH: f32 = 50.0;
const COVER_TOP: f32 = 90.0;

/// A titled block of free-form body text
#[derive(Debug,Clone,Deserialize,PartialEq)]
pub struct SectionSpec {
    pub title: String,
    pub body: String,
}

impl SectionSpec {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        SectionSpec {
            title: title.into(),
            body: body.into(),
        }
    }

    /// reads the body from a UTF-8 file; a missing file is `Error::ResourceNotFound`
    pub fn from_file<P: AsRef<Path>>(title: impl Into<String>, path: P) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|err| Error::reading(path, err))?;

        Ok(SectionSpec::new(title, body))
    }
}

/// Content of the cover page
#[derive(Debug,Clone,Default,PartialEq)]
pub struct CoverSpec {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// JPEG or PNG; skipped with a warning when the file is missing
    pub logo: Option<PathBuf>,
}

impl CoverSpec {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, description: impl Into<String>) -> Self {
        CoverSpec {
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<PathBuf>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SectionStyle {
    pub cover_title: TextStyle,
    pub cover_subtitle: TextStyle,
    pub cover_description: TextStyle,
    pub running_header: TextStyle,
    pub section_title: TextStyle,
    pub body: TextStyle,
}

impl Default for SectionStyle {
    fn default() -> Self {
        let accent = Color::rgb(102, 126, 234);

        SectionStyle {
            cover_title: TextStyle::new().with_size(22.0).bold().and_color(accent),
            cover_subtitle: TextStyle::new().with_size(16.0).and_color(Color::rgb(118, 75, 162)),
            cover_description: TextStyle::new().with_size(12.0).and_color(Color::rgb(60, 60, 60)),
            running_header: TextStyle::new().with_size(12.0).bold().and_color(accent),
            section_title: TextStyle::new().with_size(16.0).bold().and_color(accent),
            body: TextStyle::new().with_size(11.0).and_color(Color::rgb(30, 30, 30)),
        }
    }
}

/// Renders a cover page followed by one section per page
/// ```text
/// Example
/// SectionDocument::new()
///     .with_running_header("Sistema de Votos 2025 - Documentación")
///     .render(&mut doc, &cover, &sections)?;
/// ```
#[derive(Debug,Clone,Default)]
pub struct SectionDocument {
    /// line drawn at the top of every page after the cover
    pub running_header: Option<String>,
    pub style: SectionStyle,
}

impl SectionDocument {
    pub fn new() -> Self {
        SectionDocument::default()
    }

    pub fn with_running_header(mut self, text: impl Into<String>) -> Self {
        self.running_header = Some(text.into());
        self
    }

    pub fn and_style(mut self, style: SectionStyle) -> Self {
        self.style = style;
        self
    }

    /// Cover first, without any page header, then every section on a fresh page in input order.
    /// Replaces the document's page header with the running header, if any.
    pub fn render(&self, doc: &mut Document, cover: &CoverSpec, sections: &[SectionSpec]) -> Result<()> {
        doc.clear_header()?;
        self.render_cover(doc, cover)?;

        if let Some(text) = &self.running_header {
            let text = text.clone();
            let style = self.style.running_header;

            doc.set_header(move |doc: &mut Document, _page| {
                let cell = Cell::full_width(&text, mm(10.0))
                    .and_alignment(TextAlignment::Center)
                    .and_advance(Advance::NextLine);
                doc.draw_cell(&cell, &style)?;
                doc.feed(mm(2.0))
            })?;
        }

        for section in sections {
            self.render_section(doc, section)?;
        }

        Ok(())
    }

    fn render_cover(&self, doc: &mut Document, cover: &CoverSpec) -> Result<()> {
        doc.add_page()?;

        let top = doc.setup().height;

        if let Some(logo) = &cover.logo {
            match doc.draw_image(logo, mm(LOGO_X), top - mm(LOGO_TOP), mm(LOGO_WIDTH)) {
                Ok(()) => {}
                Err(Error::ResourceNotFound(path)) => {
                    warn!("cover logo {} not found, continuing without it", path.display());
                }
                Err(err) => return Err(err),
            }
        }

        doc.set_y(top - mm(COVER_TOP))?;

        doc.draw_cell(&centered(&cover.title, mm(20.0)), &self.style.cover_title)?;
        doc.draw_cell(&centered(&cover.subtitle, mm(12.0)), &self.style.cover_subtitle)?;
        doc.feed(mm(10.0))?;
        doc.draw_paragraph(&cover.description, None, mm(10.0), TextAlignment::Center, &self.style.cover_description)?;
        doc.feed(mm(10.0))
    }

    fn render_section(&self, doc: &mut Document, section: &SectionSpec) -> Result<()> {
        doc.add_page()?;

        let title = Cell::full_width(&section.title, mm(12.0)).and_advance(Advance::NextLine);
        doc.draw_cell(&title, &self.style.section_title)?;
        doc.feed(mm(2.0))?;
        doc.draw_paragraph(&section.body, None, mm(7.0), TextAlignment::Left, &self.style.body)?;
        doc.feed(mm(4.0))
    }
}

fn centered(text: &str, height: f32) -> Cell<'_> {
    Cell::full_width(text, height)
        .and_alignment(TextAlignment::Center)
        .and_advance(Advance::NextLine)
}
