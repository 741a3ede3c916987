//! Text reports: per-club group listings, full group standings and club team tables.
//!
//! Every renderer returns the report as a `String`; printing is left to the caller.

use crate::logic::stats::{generate_league_stats, ranked_teams, TeamOrder};
use crate::models::{format_average, ClubTeam, Group, Groups, League, Sex};

const BANNER_RULE: &str = "#############################################";
const SECTION_RULE: &str = "------------------";

/// One line per group in which `club` has runners: letter groups first, then age groups.
pub fn club_text_summary(league: &League, club: &str) -> String {
    render_club_report(league, club, |group| {
        group.club_summary(&league.members, &league.second_claims, club)
    })
}

/// Like [`club_text_summary`] but with one indented line per runner.
pub fn club_table_summary(league: &League, club: &str) -> String {
    render_club_report(league, club, |group| {
        group.club_summary_table(&league.members, &league.second_claims, club)
    })
}

/// Full standings line of every group.
pub fn group_summaries(league: &League) -> String {
    let mut out = String::new();
    push_section(&mut out, &format!("{} Groups:", league.name));
    push_summaries(&mut out, league, &league.letter_groups);
    push_section(&mut out, "Age Groups:");
    push_summaries(&mut out, league, &league.age_groups);
    out
}

/// Male and female team tables, each ranked by points and by average.
///
/// Regenerates team stats first. Only teams with enough races are listed.
pub fn club_points_tables(league: &mut League) -> String {
    generate_league_stats(league);
    let mut out = String::new();
    for (sex, title) in [(Sex::Male, "Male Teams"), (Sex::Female, "Female Teams")] {
        out.push_str(&format!("\n======{}======\n", title));
        out.push_str("#### By Points\n");
        out.push_str(&render_team_table(&ranked_teams(league, sex, TeamOrder::Points)));
        out.push_str("#### By Avg\n");
        out.push_str(&render_team_table(&ranked_teams(league, sex, TeamOrder::Average)));
    }
    out
}

/// Aligned table of teams in the order given.
pub fn render_team_table(teams: &[&ClubTeam]) -> String {
    let width = teams
        .iter()
        .map(|team| team.club.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    let mut out = format!(
        "{:>3}  {:<width$}  {:>6}  {:>5}  {:>6}\n",
        "#", "Name", "Points", "Races", "Avg"
    );
    for (rank, team) in teams.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:>6}  {:>5}  {:>6}\n",
            rank + 1,
            team.club,
            team.points,
            team.races,
            format_average(team.average())
        ));
    }
    out
}

fn render_club_report<F>(league: &League, club: &str, render: F) -> String
where
    F: Fn(&Group) -> (usize, String),
{
    let mut out = String::new();
    out.push_str(BANNER_RULE);
    out.push('\n');
    out.push_str(&format!("Latest {} Member Stats for {}\n", league.name, club));
    out.push_str(BANNER_RULE);
    out.push('\n');

    push_section(&mut out, &format!("{} Groups:", league.name));
    push_hits(&mut out, &league.letter_groups, &render);
    push_section(&mut out, "Age Groups:");
    push_hits(&mut out, &league.age_groups, &render);
    out
}

fn push_section(out: &mut String, title: &str) {
    out.push_str(SECTION_RULE);
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(SECTION_RULE);
    out.push('\n');
}

fn push_hits<F>(out: &mut String, groups: &Groups, render: &F)
where
    F: Fn(&Group) -> (usize, String),
{
    for group in groups.iter() {
        let (hits, text) = render(group);
        if hits >= 1 {
            out.push_str(&text);
            out.push('\n');
        }
    }
}

fn push_summaries(out: &mut String, league: &League, groups: &Groups) {
    for group in groups.iter() {
        out.push_str(&group.summary_line(&league.members));
        out.push('\n');
    }
}
