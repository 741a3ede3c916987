//! League-wide team statistics and rankings.

use crate::models::{ClubTeam, League, Sex};

/// How team tables are ordered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TeamOrder {
    /// Total points, highest first.
    Points,
    /// Points per race, highest first.
    Average,
}

/// Rebuild every club's male and female team from current member state.
///
/// Totals are recomputed from scratch, so calling this again gives the same result.
pub fn generate_league_stats(league: &mut League) {
    let members = &league.members;
    for club in league.clubs.iter_mut() {
        club.compute_teams(members);
    }
    log::debug!("Generated team stats for {} club(s)", league.clubs.len());
}

/// Eligible teams of `sex`, best first.
///
/// Teams are taken as last computed by [`generate_league_stats`]; clubs without computed teams
/// are left out. Ties keep club order.
pub fn ranked_teams(league: &League, sex: Sex, order: TeamOrder) -> Vec<&ClubTeam> {
    let mut teams: Vec<&ClubTeam> = league
        .clubs
        .iter()
        .filter_map(|club| club.team(sex))
        .filter(|team| team.is_eligible())
        .collect();
    teams.sort_by(|a, b| b.points.cmp(&a.points));
    if order == TeamOrder::Average {
        teams.sort_by(|a, b| b.average().total_cmp(&a.average()));
    }
    teams
}
