use pdf_writer::{ Name, Ref };
use crate::types::{ FontFamily, TextStyle, Weight };

/// A Type 1 font object and the resource name content streams use for it
#[derive(Debug)]
pub struct FontReference {
    pub id: Ref,
    pub label: String,
    pub family: FontFamily,
    pub weight: Weight,
}

impl FontReference {
    pub fn name(&self) -> Name<'_> {
        Name(self.label.as_bytes())
    }

    pub fn matches(&self, style: &TextStyle) -> bool {
        self.family == style.family && self.weight == style.weight
    }
}
