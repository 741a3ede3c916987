//! Command-line report generator: reads exported result sheets and prints standings.
//! Run with: cargo run --bin standings -- results.csv
//! Logs go to stderr; set RUST_LOG (e.g. debug) to change verbosity.

use clap::Parser;
use league_standings::config::{DEFAULT_CLUB, DEFAULT_LEAGUE_NAME};
use league_standings::{
    club_points_tables, club_table_summary, club_text_summary, group_summaries, ingest_blocks,
    load_workbook, League, LoadError, ReportKind, Settings,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Group, age-group and club team standings from league result sheets", long_about = None)]
struct Cli {
    /// Result sheets exported as CSV, in workbook order
    #[arg(value_name = "SHEET", required = true)]
    sheets: Vec<PathBuf>,

    /// Club to report on
    #[arg(short, long, env = "LEAGUE_CLUB", default_value = DEFAULT_CLUB)]
    club: String,

    /// League name shown in report banners
    #[arg(long, env = "LEAGUE_NAME", default_value = DEFAULT_LEAGUE_NAME)]
    league_name: String,

    /// JSON file mapping runner name to second-claim club
    #[arg(short, long, env = "LEAGUE_SECOND_CLAIMS")]
    second_claims: Option<PathBuf>,

    /// Report to print (repeatable); defaults to table and teams
    #[arg(short, long = "report", value_enum)]
    reports: Vec<ReportKind>,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            sheets: cli.sheets,
            club: cli.club,
            league_name: cli.league_name,
            second_claims: cli.second_claims,
            reports: cli.reports,
        }
    }
}

fn run(settings: &Settings) -> Result<(), LoadError> {
    let claims = settings.load_second_claims()?;
    let blocks = load_workbook(&settings.sheets)?;

    let mut league = League::with_second_claims(settings.league_name.clone(), claims);
    let report = ingest_blocks(&mut league, &blocks);
    if report.skipped_rows() > 0 || !report.failed_blocks.is_empty() {
        log::warn!(
            "{} row(s) and {} block(s) could not be read; results are partial",
            report.skipped_rows(),
            report.failed_blocks.len()
        );
    }

    for kind in settings.reports() {
        let text = match kind {
            ReportKind::Text => club_text_summary(&league, &settings.club),
            ReportKind::Table => club_table_summary(&league, &settings.club),
            ReportKind::Teams => club_points_tables(&mut league),
            ReportKind::Groups => group_summaries(&league),
        };
        print!("{}", text);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from(Cli::parse());
    log::info!(
        "Reporting on {} from {} sheet(s)",
        settings.club,
        settings.sheets.len()
    );
    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
