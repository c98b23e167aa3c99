use chrono::{ Datelike, Timelike };
use log::debug;
use pdf_writer::{ Content, Date, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr };

use crate::types::{
    encoding,
    Border,
    DocumentInfo,
    DrawCommand,
    FontReference,
    ImagePlacement,
    ImageResource,
    Page,
    PageSetup,
    TextCell,
};

/// the serializer
/// contains
/// - ref allocator
/// - font references for every (family, weight) drawn
/// - page geometry and document metadata
pub struct Writer<'a> {
    alloc: Ref,
    font_refs: Vec<FontReference>,
    setup: &'a PageSetup,
    info: &'a DocumentInfo,
}

impl<'a> Writer<'a> {
    pub fn new(setup: &'a PageSetup, info: &'a DocumentInfo) -> Self {
        Writer {
            alloc: Ref::new(1),
            font_refs: Vec::with_capacity(4),
            setup,
            info,
        }
    }

    /// get a new reference for indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// Writes catalog, page tree, fonts, images, pages and info dictionary; returns the file bytes
    pub fn write(mut self, pages: &[Page], images: &[ImageResource]) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let catalog_id = self.bump();
        let page_tree_id = self.bump();

        self.register_fonts(&mut pdf, pages);
        let image_refs = self.register_images(&mut pdf, images);

        let mut page_ids = Vec::with_capacity(pages.len());

        for page in pages {
            let page_id = self.bump();
            let content_id = self.bump();
            let content = self.render_page(page, &image_refs);

            pdf.stream(content_id, &content);

            let mut pdf_page = pdf.page(page_id);
            pdf_page
                .media_box(Rect::new(0.0, 0.0, self.setup.width, self.setup.height))
                .parent(page_tree_id)
                .contents(content_id);

            let mut resources = pdf_page.resources();
            {
                let mut fonts = resources.fonts();
                for font in self.font_refs.iter() {
                    fonts.pair(font.name(), font.id);
                }
            }
            if !image_refs.is_empty() {
                let mut x_objects = resources.x_objects();
                for (name, id) in image_refs.iter() {
                    x_objects.pair(Name(name.as_bytes()), *id);
                }
            }
            resources.finish();

            page_ids.push(page_id);
        }

        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        pdf.catalog(catalog_id).pages(page_tree_id);

        self.write_info(&mut pdf);

        let bytes = pdf.finish();
        debug!("serialized {} page(s), {} font(s), {} image(s) into {} bytes", pages.len(), self.font_refs.len(), images.len(), bytes.len());
        bytes
    }

    /// one Type 1 font object per (family, weight) pair in order of first use
    fn register_fonts(&mut self, pdf: &mut Pdf, pages: &[Page]) {
        for page in pages {
            for cell in page.text_cells() {
                if self.font_refs.iter().any(|font| font.matches(&cell.style)) {
                    continue;
                }

                let font = FontReference {
                    id: self.bump(),
                    label: format!("F{}", self.font_refs.len() + 1),
                    family: cell.style.family,
                    weight: cell.style.weight,
                };

                pdf.type1_font(font.id)
                    .base_font(Name(font.family.metrics().base_font(font.weight)))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));

                self.font_refs.push(font);
            }
        }
    }

    fn register_images(&mut self, pdf: &mut Pdf, images: &[ImageResource]) -> Vec<(String, Ref)> {
        let mut refs = Vec::with_capacity(images.len());

        for (index, resource) in images.iter().enumerate() {
            let id = self.bump();
            let mut image = pdf.image_xobject(id, &resource.data);
            image.filter(Filter::FlateDecode);
            image.width(resource.pixel_width as i32);
            image.height(resource.pixel_height as i32);
            image.color_space().device_rgb();
            image.bits_per_component(8);
            image.finish();

            refs.push((format!("Im{}", index + 1), id));
        }

        refs
    }

    fn render_page(&self, page: &Page, image_refs: &[(String, Ref)]) -> Vec<u8> {
        let mut content = Content::new();

        for command in page.commands.iter() {
            match command {
                DrawCommand::TextCell(cell) => self.render_cell(&mut content, cell),
                DrawCommand::Image(placement) => Writer::render_image(&mut content, placement, image_refs),
            }
        }

        content.finish().to_vec()
    }

    fn render_cell(&self, content: &mut Content, cell: &TextCell) {
        if cell.border == Border::Full {
            content.set_line_width(self.setup.line_width);
            content.rect(cell.x, cell.y - cell.height, cell.width, cell.height);
            content.stroke();
        }

        if cell.text.is_empty() {
            return;
        }

        // fonts are registered from the same pages, a miss means an empty page set
        let Some(font) = self.font_refs.iter().find(|font| font.matches(&cell.style)) else {
            return;
        };

        let style = &cell.style;
        let text_width = style.text_width(&cell.text);
        let x = cell.x + cell.align.offset(text_width, cell.width, self.setup.cell_padding);
        // vertically centred: half the cell height plus 30% of the font size below the top edge
        let baseline = cell.y - 0.5 * cell.height - 0.3 * style.size;
        let (r, g, b) = style.color.components();

        content.begin_text();
        content.set_fill_rgb(r, g, b);
        content.set_font(font.name(), style.size);
        content.next_line(x, baseline);
        content.show(Str(&encoding::encode(&cell.text)));
        content.end_text();
    }

    fn render_image(content: &mut Content, placement: &ImagePlacement, image_refs: &[(String, Ref)]) {
        if let Some((name, _)) = image_refs.get(placement.resource) {
            content.save_state();
            content.transform([
                placement.width,
                0.0,
                0.0,
                placement.height,
                placement.x,
                placement.y - placement.height,
            ]);
            content.x_object(Name(name.as_bytes()));
            content.restore_state();
        }
    }

    fn write_info(&mut self, pdf: &mut Pdf) {
        let id = self.bump();
        let mut info = pdf.document_info(id);

        if let Some(title) = &self.info.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.info.author {
            info.author(TextStr(author));
        }
        if let Some(subject) = &self.info.subject {
            info.subject(TextStr(subject));
        }
        if let Some(creator) = &self.info.creator {
            info.creator(TextStr(creator));
        }
        if let Some(created) = &self.info.created {
            let date = Date::new(created.year().clamp(0, 9999) as u16)
                .month(created.month() as u8)
                .day(created.day() as u8)
                .hour(created.hour() as u8)
                .minute(created.minute() as u8)
                .second(created.second() as u8)
                .utc_offset_hour(0);
            info.creation_date(date);
        }

        info.producer(TextStr(concat!("folio ", env!("CARGO_PKG_VERSION"))));
        info.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ Cursor, TextAlignment, TextStyle };

    fn page_with(texts: &[(&str, TextStyle)]) -> Page {
        let mut page = Page::new(1, Cursor { x: 28.0, y: 800.0 });
        for (text, style) in texts {
            page.commands.push(DrawCommand::TextCell(TextCell {
                text: text.to_string(),
                x: 28.0,
                y: 800.0,
                width: 100.0,
                height: 20.0,
                border: Border::Full,
                align: TextAlignment::Left,
                style: *style,
            }));
        }
        page
    }

    #[test]
    fn writes_a_pdf_header_and_trailer() {
        let setup = PageSetup::a4();
        let info = DocumentInfo::new();
        let pages = vec![page_with(&[("hola", TextStyle::new())])];

        let bytes = Writer::new(&setup, &info).write(&pages, &[]);

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(5).any(|window| window == b"%%EOF"));
    }

    #[test]
    fn registers_each_font_once() {
        let setup = PageSetup::a4();
        let info = DocumentInfo::new();
        let regular = TextStyle::new();
        let bold = TextStyle::new().bold();
        let pages = vec![page_with(&[("a", regular), ("b", bold), ("c", regular)])];
        let mut pdf = Pdf::new();
        let mut writer = Writer::new(&setup, &info);

        writer.register_fonts(&mut pdf, &pages);

        assert_eq!(writer.font_refs.len(), 2);
        assert_eq!(writer.font_refs[0].label, "F1");
        assert_eq!(writer.font_refs[1].label, "F2");
    }

    #[test]
    fn output_is_deterministic_without_a_date() {
        let setup = PageSetup::a4();
        let info = DocumentInfo::new().with_title("Listado");
        let pages = vec![page_with(&[("x", TextStyle::new())])];

        let first = Writer::new(&setup, &info).write(&pages, &[]);
        let second = Writer::new(&setup, &info).write(&pages, &[]);

        assert_eq!(first, second);
    }
}
