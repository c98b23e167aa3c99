use std::{ fs::{ self, File }, io::Write, path::Path };
use log::{ debug, info, warn };

use crate::types::{
    encoding,
    Advance,
    Cell,
    Cursor,
    DocumentInfo,
    DrawCommand,
    Error,
    ImagePlacement,
    ImageResource,
    Page,
    PageSetup,
    Result,
    TextAlignment,
    TextBlock,
    TextCell,
    TextStyle,
    Writer,
};

/// Callback run by `Document::add_page()` on every new page, receives the 1-based page number
pub type PageHeader = Box<dyn Fn(&mut Document, usize) -> Result<()>>;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum DocumentState {
    /// pages and draw commands may be added
    Open,
    /// serialized, read-only
    Finalized,
}

/// # Main entry point of the library
/// Collects pages of draw commands and serializes them to PDF exactly once.
///
/// ```text
/// Example
/// let mut doc = Document::open(PageSetup::a4());
/// doc.add_page()?;
/// doc.draw_cell(&Cell::full_width("Listado", mm(10.0)), &TextStyle::new().bold())?;
/// doc.draw_paragraph(body, None, mm(7.0), TextAlignment::Left, &TextStyle::new())?;
/// doc.save("listado.pdf")?;
/// ```
pub struct Document {
    setup: PageSetup,
    info: DocumentInfo,
    pages: Vec<Page>,
    images: Vec<ImageResource>,
    header: Option<PageHeader>,
    in_header: bool,
    state: DocumentState,
    output: Option<Vec<u8>>,
}

impl Document {
    /// an open document with no pages
    pub fn open(setup: PageSetup) -> Self {
        Document {
            setup,
            info: DocumentInfo::default(),
            pages: Vec::new(),
            images: Vec::new(),
            header: None,
            in_header: false,
            state: DocumentState::Open,
            output: None,
        }
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// position of the write head on the current page
    pub fn cursor(&self) -> Option<Cursor> {
        self.pages.last().map(|page| page.cursor)
    }

    /// Installs the callback invoked by every following `add_page()`, replacing any previous one.
    /// While it runs, automatic page breaks are suspended.
    pub fn set_header<F>(&mut self, header: F) -> Result<()>
    where
        F: Fn(&mut Document, usize) -> Result<()> + 'static,
    {
        self.ensure_open()?;
        self.header = Some(Box::new(header));
        Ok(())
    }

    pub fn clear_header(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.header = None;
        Ok(())
    }

    /// appends a page, resets the cursor to the top margin and runs the header callback
    pub fn add_page(&mut self) -> Result<usize> {
        self.ensure_open()?;

        let number = self.pages.len() + 1;
        self.pages.push(Page::new(number, self.setup.origin()));
        debug!("started page {number}");

        if let Some(header) = self.header.take() {
            self.in_header = true;
            let outcome = header(self, number);
            self.in_header = false;

            // the callback may have installed a replacement
            if self.header.is_none() {
                self.header = Some(header);
            }

            outcome?;
        }

        Ok(number)
    }

    /// moves the write head on the current page
    pub fn go_to(&mut self, x: f32, y: f32) -> Result<()> {
        let page = self.current_page_mut()?;
        page.cursor = Cursor { x, y };
        Ok(())
    }

    /// moves the write head to `y` and back to the left margin
    pub fn set_y(&mut self, y: f32) -> Result<()> {
        let x = self.setup.margin_left;
        self.go_to(x, y)
    }

    /// line break: back to the left margin, `height` further down
    pub fn feed(&mut self, height: f32) -> Result<()> {
        let left = self.setup.margin_left;
        let page = self.current_page_mut()?;
        page.cursor.x = left;
        page.cursor.y -= height;
        Ok(())
    }

    /// vertical room left above the page break trigger
    pub fn remaining_height(&self) -> f32 {
        self.cursor()
            .map(|cursor| cursor.y - self.setup.margin_bottom)
            .unwrap_or(0.0)
    }

    /// whether `height` fits on the current page without a page break
    pub fn fits(&self, height: f32) -> bool {
        self.pages.last().is_some() && height <= self.remaining_height()
    }

    pub fn printable_width(&self) -> f32 {
        self.setup.printable_width()
    }

    /// rendered width of `text` in points
    pub fn text_width(&self, text: &str, style: &TextStyle) -> f32 {
        style.text_width(text)
    }

    /// Draws a cell at the cursor. A cell that would cross the bottom margin first triggers an
    /// automatic page break, keeping the horizontal position.
    pub fn draw_cell(&mut self, cell: &Cell, style: &TextStyle) -> Result<()> {
        self.ensure_open()?;

        let text = encoding::sanitize(cell.text, self.setup.glyph_policy)?;
        let mut cursor = self.current_page()?.cursor;

        if self.should_break(cursor.y, cell.height) {
            debug!("page break before {:?}", cell.text);
            self.add_page()?;

            let page = self.current_page_mut()?;
            page.cursor.x = cursor.x;
            cursor = page.cursor;
        }

        let width = cell.width.unwrap_or(self.setup.right_edge() - cursor.x);
        let left = self.setup.margin_left;
        let page = self.current_page_mut()?;

        page.commands.push(DrawCommand::TextCell(TextCell {
            text: text.into_owned(),
            x: cursor.x,
            y: cursor.y,
            width,
            height: cell.height,
            border: cell.border,
            align: cell.align,
            style: *style,
        }));

        match cell.advance {
            Advance::Right => page.cursor.x += width,
            Advance::NextLine => {
                page.cursor.x = left;
                page.cursor.y -= cell.height;
            }
            Advance::Below => page.cursor.y -= cell.height,
        }

        Ok(())
    }

    /// Wraps `text` to `width` (`None`: up to the right margin) and draws one borderless cell per
    /// line, each subject to automatic page breaks. Returns the number of lines drawn.
    pub fn draw_paragraph(
        &mut self,
        text: &str,
        width: Option<f32>,
        line_height: f32,
        align: TextAlignment,
        style: &TextStyle,
    ) -> Result<usize> {
        self.ensure_open()?;

        let start = self.current_page()?.cursor;
        let width = width.unwrap_or(self.setup.right_edge() - start.x);
        let max_width = width - 2.0 * self.setup.cell_padding;

        // sanitize before wrapping so substitutions are measured, line breaks kept for the wrapper
        let mut clean = String::with_capacity(text.len());
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                clean.push('\n');
            }
            clean.push_str(&encoding::sanitize(line, self.setup.glyph_policy)?);
        }

        let block = TextBlock::wrap(&clean, max_width, |word| style.text_width(word));

        for line in block.lines.iter() {
            let line_text = line.text();
            let cell = Cell::new(&line_text, width, line_height)
                .and_alignment(align)
                .and_advance(Advance::Below);

            self.draw_cell(&cell, style)?;
        }

        let left = self.setup.margin_left;
        self.current_page_mut()?.cursor.x = left;

        Ok(block.lines.len())
    }

    /// Places an image with its top-left corner at `(x, y)`, height from the aspect ratio. The
    /// cursor does not move. A missing file is `Error::ResourceNotFound`; callers decide whether
    /// to skip it.
    pub fn draw_image<P: AsRef<Path>>(&mut self, path: P, x: f32, y: f32, width: f32) -> Result<()> {
        self.ensure_open()?;
        self.current_page()?;

        let path = path.as_ref();
        let resource = match self.images.iter().position(|image| image.path == path) {
            Some(index) => index,
            None => {
                self.images.push(ImageResource::load(path)?);
                self.images.len() - 1
            }
        };

        let height = self.images[resource].height_for(width);
        let page = self.current_page_mut()?;

        page.commands.push(DrawCommand::Image(ImagePlacement {
            path: path.to_path_buf(),
            resource,
            x,
            y,
            width,
            height,
        }));

        Ok(())
    }

    /// Serializes all pages. Later calls return the same bytes; no drawing is possible afterwards.
    pub fn finalize(&mut self) -> Result<&[u8]> {
        if self.output.is_none() {
            if self.pages.is_empty() {
                return Err(Error::InvalidState("cannot finalize a document without pages"));
            }

            let bytes = Writer::new(&self.setup, &self.info).write(&self.pages, &self.images);
            debug!("finalized {} page(s) into {} bytes", self.pages.len(), bytes.len());

            self.output = Some(bytes);
            self.state = DocumentState::Finalized;
        }

        match &self.output {
            Some(bytes) => Ok(bytes.as_slice()),
            None => Err(Error::InvalidState("document output missing after finalize")),
        }
    }

    /// Finalizes and writes the PDF to `path`. A partially written file is removed.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.finalize()?;
        let file = File::create(path)?;

        write_or_remove(file, bytes, path)?;

        info!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    fn should_break(&self, y: f32, height: f32) -> bool {
        self.setup.auto_page_break && !self.in_header && y - height < self.setup.margin_bottom
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            DocumentState::Open => Ok(()),
            DocumentState::Finalized => Err(Error::InvalidState("document already finalized")),
        }
    }

    fn current_page(&self) -> Result<&Page> {
        self.pages
            .last()
            .ok_or(Error::InvalidState("no page has been added"))
    }

    fn current_page_mut(&mut self) -> Result<&mut Page> {
        if self.state == DocumentState::Finalized {
            return Err(Error::InvalidState("document already finalized"));
        }

        self.pages
            .last_mut()
            .ok_or(Error::InvalidState("no page has been added"))
    }
}

/// writes `bytes` through `writer`, which targets `path`; on failure `path` is deleted
fn write_or_remove<W: Write>(mut writer: W, bytes: &[u8], path: &Path) -> Result<()> {
    let outcome = writer.write_all(bytes).and_then(|()| writer.flush());
    drop(writer);

    if let Err(err) = outcome {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!("could not remove partial output {}: {cleanup}", path.display());
        }
        return Err(err.into());
    }

    Ok(())
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("setup", &self.setup)
            .field("info", &self.info)
            .field("pages", &self.pages.len())
            .field("images", &self.images.len())
            .field("header", &self.header.is_some())
            .field("state", &self.state)
            .finish()
    }
}
