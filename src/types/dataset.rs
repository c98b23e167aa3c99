//! # Table data loaded from JSON
//! Rows live outside the binaries, user lists and credentials are never compiled in.
//! ```json
//! { "tables": [ { "title": "Administradores", "rows": [["admin_01", "clave"]] } ] }
//! ```
use std::path::Path;
use serde::Deserialize;
use crate::types::{ Error, Result };

#[derive(Debug,Clone,Deserialize,PartialEq)]
pub struct Dataset {
    pub tables: Vec<TableData>,
}

#[derive(Debug,Clone,Deserialize,PartialEq)]
pub struct TableData {
    pub title: String,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// a missing file is `Error::ResourceNotFound`, malformed JSON is `Error::Json`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| Error::reading(path, err))?;

        Dataset::parse(&json)
    }

    pub fn table(&self, title: &str) -> Option<&TableData> {
        self.tables.iter().find(|table| table.title == title)
    }

    /// like `table`, a missing title is `Error::MissingTable`
    pub fn require(&self, title: &str) -> Result<&TableData> {
        self.table(title)
            .ok_or_else(|| Error::MissingTable(title.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tables_in_order() {
        let dataset = Dataset::parse(r#"{
            "tables": [
                { "title": "Superusuarios", "rows": [["superadmin_01", "a"]] },
                { "title": "Administradores", "rows": [["admin_01", "b"], ["admin_02", "c"]] }
            ]
        }"#).unwrap();

        assert_eq!(dataset.tables.len(), 2);
        assert_eq!(dataset.tables[0].title, "Superusuarios");
        assert_eq!(dataset.table("Administradores").map(|table| table.rows.len()), Some(2));
        assert!(dataset.table("Registradores").is_none());
    }

    #[test]
    fn required_table_must_exist() {
        let dataset = Dataset::parse(r#"{ "tables": [] }"#).unwrap();

        assert!(matches!(dataset.require("Registradores"), Err(Error::MissingTable(title)) if title == "Registradores"));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(Dataset::parse(r#"{ "tables": [ { "title": 1 } ] }"#), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            Dataset::from_file(dir.path().join("usuarios.json")),
            Err(Error::ResourceNotFound(_))
        ));
    }
}
