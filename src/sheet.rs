//! Results sheet adapter: read exported worksheets (CSV), cut them into group blocks and feed
//! the blocks to the league.
//!
//! A sheet is a run of tables stacked vertically. Each table starts with a header row whose
//! column 4 reads `Club`; column 2 of that header says what the table is ("Group C",
//! "Male V40", "Lady Ranks", ...).

use crate::error::LoadError;
use crate::logic::{ingest_age_group, ingest_letter_group, BlockError, IngestReport};
use crate::models::{Cell, League, RawRow};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Header text marking the start of a table.
pub const CLUB_HEADER: &str = "Club";
/// Column holding [`CLUB_HEADER`] in a header row.
pub const CLUB_HEADER_COLUMN: usize = 4;
/// Column holding the table's label in a header row.
pub const MARKER_COLUMN: usize = 2;

/// What a table holds, from its header label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BlockKind {
    /// General competition ("Group C").
    LetterGroup,
    /// Age bracket ("Male V40", "Lady Senior").
    AgeGroup,
    /// Club ranking tables ("Male Ranks", "Lady Ranks"); not ingested.
    Ranks,
    /// Anything else; not ingested.
    Unknown,
}

impl BlockKind {
    pub fn classify(marker: &str) -> Self {
        if marker.starts_with("Group") {
            BlockKind::LetterGroup
        } else if marker.starts_with("Male Ranks") || marker.starts_with("Lady Ranks") {
            BlockKind::Ranks
        } else if marker.starts_with("Male") || marker.starts_with("Lady") {
            BlockKind::AgeGroup
        } else {
            BlockKind::Unknown
        }
    }
}

/// One table: its header row and its data rows in finishing order.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub header: RawRow,
    pub kind: BlockKind,
    pub rows: Vec<RawRow>,
}

impl Block {
    pub fn new(header: RawRow, rows: Vec<RawRow>) -> Self {
        let kind = BlockKind::classify(header.cell(MARKER_COLUMN).text().unwrap_or(""));
        Self { header, kind, rows }
    }

    /// Header label, e.g. "Group C".
    pub fn label(&self) -> &str {
        self.header.cell(MARKER_COLUMN).text().unwrap_or("")
    }
}

/// Everything that happened while ingesting a workbook.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkbookReport {
    pub groups: Vec<IngestReport>,
    /// Blocks that could not be ingested at all, with their label.
    pub failed_blocks: Vec<(String, BlockError)>,
    /// Ranking and unrecognised tables passed over.
    pub ignored_blocks: usize,
}

impl WorkbookReport {
    pub fn skipped_rows(&self) -> usize {
        self.groups.iter().map(|g| g.skipped().count()).sum()
    }
}

fn is_header(row: &RawRow) -> bool {
    row.cell(CLUB_HEADER_COLUMN).text() == Some(CLUB_HEADER)
}

/// Read every row of a headerless CSV sheet. Rows may have any number of cells.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.byte_records() {
        let record = result?;
        let cells = record
            .iter()
            .map(|bytes| match std::str::from_utf8(bytes) {
                Ok(text) => Cell::from(text),
                Err(_) => Cell::Undecodable,
            })
            .collect();
        rows.push(RawRow::new(cells));
    }
    Ok(rows)
}

/// Cut rows into blocks at each header row.
///
/// Rows before the first header and fully blank rows are dropped.
pub fn split_blocks(rows: Vec<RawRow>) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<(RawRow, Vec<RawRow>)> = None;
    for row in rows {
        if is_header(&row) {
            if let Some((header, body)) = current.take() {
                blocks.push(Block::new(header, body));
            }
            current = Some((row, Vec::new()));
        } else if row.is_blank() {
            continue;
        } else if let Some((_, body)) = current.as_mut() {
            body.push(row);
        }
    }
    if let Some((header, body)) = current {
        blocks.push(Block::new(header, body));
    }
    blocks
}

/// Read one exported worksheet into blocks.
pub fn load_sheet(path: impl AsRef<Path>) -> Result<Vec<Block>, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_rows(file).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let blocks = split_blocks(rows);
    log::info!("Read {} block(s) from {}", blocks.len(), path.display());
    Ok(blocks)
}

/// Read several worksheets, keeping sheet order.
pub fn load_workbook(paths: &[PathBuf]) -> Result<Vec<Block>, LoadError> {
    let mut blocks = Vec::new();
    for path in paths {
        blocks.extend(load_sheet(path)?);
    }
    Ok(blocks)
}

/// Ingest blocks in order. A block that fails is logged and recorded; the rest still run.
pub fn ingest_blocks(league: &mut League, blocks: &[Block]) -> WorkbookReport {
    let mut report = WorkbookReport::default();
    for block in blocks {
        let label = block.label();
        let result = match block.kind {
            BlockKind::LetterGroup => ingest_letter_group(league, label, &block.rows),
            BlockKind::AgeGroup => ingest_age_group(league, label, &block.rows),
            BlockKind::Ranks | BlockKind::Unknown => {
                log::debug!("Ignoring block {:?}", label);
                report.ignored_blocks += 1;
                continue;
            }
        };
        match result {
            Ok(group) => report.groups.push(group),
            Err(e) => {
                log::warn!("Skipping block {:?}: {}", label, e);
                report.failed_blocks.push((label.to_string(), e));
            }
        }
    }
    log::info!(
        "Ingested {} group(s), {} member(s), {} club(s); {} row(s) skipped",
        report.groups.len(),
        league.members.len(),
        league.clubs.len(),
        report.skipped_rows()
    );
    report
}
