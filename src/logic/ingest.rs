//! Group ingestion: turn result rows into members, club rosters and group positions.
//!
//! A bad row never stops a block. It is logged and recorded as [`RowOutcome::Skipped`] in the
//! returned [`IngestReport`], and the next row is processed.

use crate::models::{
    columns, Cell, GroupKind, League, Member, MemberId, RawRow, UNKNOWN_CLUB, UNKNOWN_CLUB_EX,
};

/// Why a result row was skipped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RowError {
    /// The name cell is empty or unreadable.
    MissingName,
    /// A numeric column holds something that is not a valid number.
    InvalidNumber { column: &'static str, value: String },
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowError::MissingName => write!(f, "Row has no runner name"),
            RowError::InvalidNumber { column, value } => {
                write!(f, "Invalid {} value {:?}", column, value)
            }
        }
    }
}

impl std::error::Error for RowError {}

/// Why a whole block could not be ingested.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BlockError {
    /// The header does not name a group (e.g. "Group" with no letter).
    MissingGroupName { header: String },
}

impl std::fmt::Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockError::MissingGroupName { header } => {
                write!(f, "No group name in header {:?}", header)
            }
        }
    }
}

impl std::error::Error for BlockError {}

/// A row that was not ingested.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedRow {
    pub position: u32,
    /// Runner name, when the row had one.
    pub name: Option<String>,
    /// Display name of the group, e.g. "Group C".
    pub group: String,
    pub error: RowError,
}

/// Result of ingesting one row.
#[derive(Clone, Debug, PartialEq)]
pub enum RowOutcome {
    Added { position: u32, member: MemberId },
    Skipped(SkippedRow),
}

/// Per-row results for one block.
#[derive(Clone, Debug, PartialEq)]
pub struct IngestReport {
    pub kind: GroupKind,
    /// Group key: the letter, or the age-bracket label.
    pub group: String,
    pub outcomes: Vec<RowOutcome>,
}

impl IngestReport {
    pub fn added_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Added { .. }))
            .count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedRow> {
        self.outcomes.iter().filter_map(|o| match o {
            RowOutcome::Skipped(row) => Some(row),
            RowOutcome::Added { .. } => None,
        })
    }
}

/// Fields of a row that parsed cleanly.
#[derive(Clone, Debug, PartialEq)]
struct ParsedRow {
    name: String,
    points: u32,
    races: u32,
    avg: f64,
    club: String,
}

/// Letter from a letter-group header: "Group C" -> "C".
pub fn letter_group_name(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}

/// Club name for a club cell, substituting a placeholder club when there is none.
pub fn resolve_club(cell: &Cell) -> &str {
    match cell {
        Cell::Text(club) => club,
        Cell::Empty => UNKNOWN_CLUB,
        Cell::Undecodable => UNKNOWN_CLUB_EX,
    }
}

/// Ingest a general-competition block. `header` names the group, e.g. "Group C".
///
/// Rows are in finishing order; row `i` (0-based) is position `i + 1`. New members take the
/// group's division as their sex.
pub fn ingest_letter_group(
    league: &mut League,
    header: &str,
    rows: &[RawRow],
) -> Result<IngestReport, BlockError> {
    let letter = letter_group_name(header).ok_or_else(|| BlockError::MissingGroupName {
        header: header.to_string(),
    })?;
    Ok(ingest_group(league, GroupKind::Letter, letter, rows))
}

/// Ingest an age-bracket block. `label` is the bracket, e.g. "Male V40".
///
/// Members already known from a letter group keep their fields; only their age group is set.
pub fn ingest_age_group(
    league: &mut League,
    label: &str,
    rows: &[RawRow],
) -> Result<IngestReport, BlockError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(BlockError::MissingGroupName {
            header: label.to_string(),
        });
    }
    Ok(ingest_group(league, GroupKind::Age, label, rows))
}

fn ingest_group(league: &mut League, kind: GroupKind, name: &str, rows: &[RawRow]) -> IngestReport {
    let groups = match kind {
        GroupKind::Letter => &mut league.letter_groups,
        GroupKind::Age => &mut league.age_groups,
    };
    let group = groups.get_or_create(name);
    let title = group.to_string();
    let sex = group.sex();
    log::info!("{} processing....", title);

    let mut outcomes = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let position = (index + 1) as u32;
        let parsed = match parse_row(row) {
            Ok(parsed) => parsed,
            Err(error) => {
                let name = row.cell(columns::NAME).text().map(str::to_string);
                log::warn!(
                    "Can't add {} to {}: {}",
                    name.as_deref().unwrap_or("<unnamed>"),
                    title,
                    error
                );
                outcomes.push(RowOutcome::Skipped(SkippedRow {
                    position,
                    name,
                    group: title.clone(),
                    error,
                }));
                continue;
            }
        };
        log::debug!("NAME {} processing....", parsed.name);

        let club = league.clubs.get_or_create(&parsed.club);
        let id = league.members.upsert(Member {
            name: parsed.name.clone(),
            sex,
            points: parsed.points,
            races: parsed.races,
            avg: parsed.avg,
            group: name.to_string(),
            age_group: String::new(),
            club: club.name.clone(),
        });
        if kind == GroupKind::Age {
            league.members[id].age_group = name.to_string();
        }
        club.add_member(&parsed.name, id);
        group.add_positioned_member(position, id);
        outcomes.push(RowOutcome::Added {
            position,
            member: id,
        });
    }

    log::info!("{} done.", title);
    IngestReport {
        kind,
        group: name.to_string(),
        outcomes,
    }
}

fn parse_row(row: &RawRow) -> Result<ParsedRow, RowError> {
    let name = row
        .cell(columns::NAME)
        .text()
        .ok_or(RowError::MissingName)?
        .to_string();
    let points = parse_count(row.cell(columns::POINTS), "points")?;
    let races = parse_count(row.cell(columns::RACES), "races")?;
    let avg = parse_average(row.cell(columns::AVERAGE))?;
    let club = resolve_club(row.cell(columns::CLUB)).to_string();
    Ok(ParsedRow {
        name,
        points,
        races,
        avg,
        club,
    })
}

/// Whole non-negative number. Spreadsheet exports may write these as "12.0".
fn parse_count(cell: &Cell, column: &'static str) -> Result<u32, RowError> {
    let invalid = || RowError::InvalidNumber {
        column,
        value: describe(cell),
    };
    let text = cell.text().ok_or_else(invalid)?;
    if let Ok(n) = text.parse::<u32>() {
        return Ok(n);
    }
    match text.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) => Ok(v as u32),
        _ => Err(invalid()),
    }
}

/// An empty average cell reads as 0.
fn parse_average(cell: &Cell) -> Result<f64, RowError> {
    match cell {
        Cell::Empty => Ok(0.0),
        Cell::Text(text) => text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RowError::InvalidNumber {
                column: "average",
                value: text.clone(),
            }),
        Cell::Undecodable => Err(RowError::InvalidNumber {
            column: "average",
            value: describe(cell),
        }),
    }
}

fn describe(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Empty => String::new(),
        Cell::Undecodable => "<undecodable>".to_string(),
    }
}
