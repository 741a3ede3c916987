//! One row of a results table, as raw cells.

/// A single cell from a results sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    /// The cell had content but it could not be decoded as text.
    Undecodable,
}

impl Cell {
    /// Trimmed text, or None for empty and undecodable cells.
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            Cell::Empty | Cell::Undecodable => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<Option<&str>> for Cell {
    fn from(s: Option<&str>) -> Self {
        s.map(Cell::from).unwrap_or(Cell::Empty)
    }
}

/// Columns of a group table.
pub mod columns {
    pub const POINTS: usize = 0;
    pub const RACES: usize = 1;
    pub const NAME: usize = 2;
    pub const CLUB: usize = 4;
    pub const AVERAGE: usize = 5;
}

/// A row of cells. Cells past the end of the row read as empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawRow {
    pub cells: Vec<Cell>,
}

static EMPTY: Cell = Cell::Empty;

impl RawRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Build a row from text cells (blank strings become empty cells).
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(texts.into_iter().map(Cell::from).collect())
    }

    pub fn cell(&self, column: usize) -> &Cell {
        self.cells.get(column).unwrap_or(&EMPTY)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}
