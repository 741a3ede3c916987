//! Road-running league standings: library with the league model, ingestion and reports.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod sheet;

pub use config::{ReportKind, SecondClaims, Settings};
pub use error::LoadError;
pub use logic::{
    club_points_tables, club_table_summary, club_text_summary, generate_league_stats,
    group_summaries, ingest_age_group, ingest_letter_group, ranked_teams, BlockError,
    IngestReport, RowError, RowOutcome, SkippedRow, TeamOrder,
};
pub use models::{
    format_ordinal, Cell, Club, ClubTeam, Group, GroupKind, League, Member, MemberId,
    MemberRegistry, RawRow, Sex,
};
pub use sheet::{ingest_blocks, load_workbook, Block, BlockKind, WorkbookReport};
