use chrono::{DateTime, Utc};

/// Metadata written to the PDF information dictionary
#[derive(Debug,Clone,Default,PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    /// left empty the document carries no creation date, keeping output reproducible
    pub created: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        DocumentInfo::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn and_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn and_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn and_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn and_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}
