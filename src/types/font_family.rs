use serde::Deserialize;
use crate::{
    traits::FontType,
    types::{ Courier, Helvetica }
};

/// PDF standard fonts available without embedding
#[derive(Debug,Clone,Copy,Default,Deserialize,PartialEq,Eq,Hash)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
   #[default]
    Helvetica,
    Courier,
}

impl FontFamily {
    pub fn metrics(&self) -> &'static dyn FontType {
        match self {
            FontFamily::Helvetica => &Helvetica,
            FontFamily::Courier => &Courier,
        }
    }
}
