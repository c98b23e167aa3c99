#![allow(dead_code)]

use lopdf::content::Content;
use lopdf::{ Document as LopdfDocument, Object };

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// operands of every `Tj` on each page, decoded from WinAnsi (Latin-1 for the tested text)
    pub fn page_texts(&self) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
        let mut pages = Vec::new();

        for (_, page_id) in self.doc.get_pages() {
            let content = Content::decode(&self.doc.get_page_content(page_id)?)?;
            let texts: Vec<String> = content
                .operations
                .iter()
                .filter(|operation| operation.operator == "Tj")
                .flat_map(|operation| operation.operands.iter())
                .filter_map(|operand| match operand {
                    Object::String(bytes, _) => Some(bytes.iter().map(|byte| *byte as char).collect::<String>()),
                    _ => None,
                })
                .collect();

            pages.push(texts);
        }

        Ok(pages)
    }

    /// number of image XObjects in the file
    pub fn image_count(&self) -> usize {
        self.doc
            .objects
            .values()
            .filter(|object| match object {
                Object::Stream(stream) => stream
                    .dict
                    .get(b"Subtype")
                    .and_then(Object::as_name)
                    .map_or(false, |name| name == b"Image"),
                _ => false,
            })
            .count()
    }
}
