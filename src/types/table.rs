use serde::Deserialize;
use crate::types::{
    mm,
    Advance,
    Border,
    Cell,
    Document,
    Error,
    Result,
    TextAlignment,
    TextStyle,
};

/// A fixed-width table column
#[derive(Debug,Clone,Deserialize,PartialEq)]
pub struct Column {
    pub header: String,
    pub width: f32,
   #[serde(default)]
    pub align: TextAlignment,
}

impl Column {
    pub fn new(header: impl Into<String>, width: f32) -> Self {
        Column {
            header: header.into(),
            width,
            align: TextAlignment::Left,
        }
    }

    /// builder function setting the alignment of body cells, header cells are always centered
    pub fn and_alignment(mut self, align: TextAlignment) -> Self {
        self.align = align;
        self
    }
}

/// Rows of string cells under a titled header
/// ```text
/// Example
/// let spec = TableSpec::new("Administradores", vec![
///         Column::new("Usuario", mm(60.0)),
///         Column::new("Contraseña", mm(60.0)).and_alignment(TextAlignment::Center),
///     ])
///     .numbered(Column::new("N°", mm(10.0)).and_alignment(TextAlignment::Center))
///     .with_rows(rows)?;
/// ```
#[derive(Debug,Clone,PartialEq)]
pub struct TableSpec {
    pub title: String,
    pub columns: Vec<Column>,
    /// leading column holding the 1-based input position of each row
    pub numbering: Option<Column>,
    pub rows: Vec<Vec<String>>,
    pub row_height: f32,
    pub repeat_header_on_page_break: bool,
}

impl TableSpec {
    /// default settings:
    /// - Row height: 8mm
    /// - Header repeated after page breaks
    /// - No numbering column
    pub fn new(title: impl Into<String>, columns: Vec<Column>) -> Self {
        TableSpec {
            title: title.into(),
            columns,
            numbering: None,
            rows: Vec::new(),
            row_height: mm(8.0),
            repeat_header_on_page_break: true,
        }
    }

    pub fn numbered(mut self, column: Column) -> Self {
        self.numbering = Some(column);
        self
    }

    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn and_header_repeat(mut self, repeat: bool) -> Self {
        self.repeat_header_on_page_break = repeat;
        self
    }

    /// builder function setting the rows, fails on the first row of the wrong length
    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Result<Self> {
        self.rows = rows;
        self.validate()?;
        Ok(self)
    }

    /// every row must have one cell per column, the numbering column excluded
    pub fn validate(&self) -> Result<()> {
        let expected = self.columns.len();

        match self.rows.iter().position(|row| row.len() != expected) {
            Some(index) => Err(Error::RowShape {
                row: index + 1,
                expected,
                found: self.rows[index].len(),
            }),
            None => Ok(()),
        }
    }

    /// numbering column first, then the data columns
    pub fn header_columns(&self) -> impl Iterator<Item = &Column> {
        self.numbering.iter().chain(self.columns.iter())
    }

    pub fn total_width(&self) -> f32 {
        self.header_columns().map(|column| column.width).sum()
    }
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct TableStyle {
    pub title: TextStyle,
    pub title_height: f32,
    pub header: TextStyle,
    pub body: TextStyle,
    /// vertical gap left after the last row
    pub gap_after: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            title: TextStyle::new().with_size(12.0).bold(),
            title_height: mm(8.0),
            header: TextStyle::new().bold(),
            body: TextStyle::new(),
            gap_after: mm(5.0),
        }
    }
}

/// Draws `TableSpec`s into a `Document`: title, header row, then bordered rows that are never
/// split across pages
#[derive(Debug,Clone,Default)]
pub struct TableLayout {
    style: TableStyle,
}

impl TableLayout {
    pub fn new() -> Self {
        TableLayout::default()
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Fails with `Error::RowHeight` before drawing anything when a row can not fit on any page,
    /// or after a page break when the page header leaves too little room for the next row.
    pub fn render(&self, doc: &mut Document, spec: &TableSpec) -> Result<()> {
        spec.validate()?;

        let available = doc.setup().printable_height();
        if spec.row_height > available {
            return Err(Error::RowHeight { height: spec.row_height, available });
        }

        // an empty title draws no title line
        let title_height = if spec.title.is_empty() { 0.0 } else { self.style.title_height };

        // keep title and header together with the first row
        let lead = if spec.rows.is_empty() { 1.0 } else { 2.0 };
        if !doc.fits(title_height + spec.row_height * lead) {
            doc.add_page()?;
        }

        if !spec.title.is_empty() {
            let title = Cell::full_width(&spec.title, title_height)
                .and_advance(Advance::NextLine);
            doc.draw_cell(&title, &self.style.title)?;
        }

        self.draw_header(doc, spec)?;

        for (index, row) in spec.rows.iter().enumerate() {
            if !doc.fits(spec.row_height) {
                doc.add_page()?;

                if spec.repeat_header_on_page_break {
                    self.draw_header(doc, spec)?;
                }

                // a fresh page that still can not take the row would split it
                if !doc.fits(spec.row_height) {
                    return Err(Error::RowHeight { height: spec.row_height, available: doc.remaining_height() });
                }
            }

            let number = (index + 1).to_string();
            let cells = spec
                .numbering
                .iter()
                .map(|column| (number.as_str(), column, column.align))
                .chain(
                    row.iter()
                        .zip(spec.columns.iter())
                        .map(|(text, column)| (text.as_str(), column, column.align)),
                );

            TableLayout::draw_row(doc, cells, spec.row_height, &self.style.body)?;
        }

        doc.feed(self.style.gap_after)
    }

    fn draw_header(&self, doc: &mut Document, spec: &TableSpec) -> Result<()> {
        let cells = spec
            .header_columns()
            .map(|column| (column.header.as_str(), column, TextAlignment::Center));

        TableLayout::draw_row(doc, cells, spec.row_height, &self.style.header)
    }

    /// bordered cells left to right, the last one moves the cursor to the next line
    fn draw_row<'c, I>(doc: &mut Document, cells: I, height: f32, style: &TextStyle) -> Result<()>
    where
        I: Iterator<Item = (&'c str, &'c Column, TextAlignment)>,
    {
        let mut cells = cells.peekable();

        while let Some((text, column, align)) = cells.next() {
            let advance = match cells.peek() {
                Some(_) => Advance::Right,
                None => Advance::NextLine,
            };

            let cell = Cell::new(text, column.width, height)
                .with_border(Border::Full)
                .and_alignment(align)
                .and_advance(advance);

            doc.draw_cell(&cell, style)?;
        }

        Ok(())
    }
}
