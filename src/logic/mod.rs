//! League business logic: group ingestion, team stats, reports.

mod ingest;
mod report;
mod stats;

pub use ingest::{
    ingest_age_group, ingest_letter_group, letter_group_name, resolve_club, BlockError,
    IngestReport, RowError, RowOutcome, SkippedRow,
};
pub use report::{
    club_points_tables, club_table_summary, club_text_summary, group_summaries, render_team_table,
};
pub use stats::{generate_league_stats, ranked_teams, TeamOrder};
