//! Club rosters and the scoring teams derived from them.

use crate::models::member::{MemberId, MemberRegistry, Sex};
use std::collections::HashMap;

/// Scorers counted in a men's team.
pub const MALE_TEAM_SIZE: usize = 6;
/// Scorers counted in a women's team.
pub const FEMALE_TEAM_SIZE: usize = 4;

/// Club name used when a row has no club.
pub const UNKNOWN_CLUB: &str = "UNKNOWN";
/// Club name used when a row's club cell could not be read.
pub const UNKNOWN_CLUB_EX: &str = "UNKNOWN_EX";

/// A club's top scorers of one sex, with their summed points and races.
///
/// A snapshot: rebuilt from current member state by [`Club::compute_teams`].
#[derive(Clone, Debug, PartialEq)]
pub struct ClubTeam {
    pub club: String,
    pub sex: Sex,
    /// How many scorers count.
    pub size: usize,
    pub members: Vec<MemberId>,
    pub points: u64,
    pub races: u64,
}

impl ClubTeam {
    pub fn new(club: impl Into<String>, sex: Sex, size: usize) -> Self {
        Self {
            club: club.into(),
            sex,
            size,
            members: Vec::new(),
            points: 0,
            races: 0,
        }
    }

    /// Points per race, or 0 when there are no points or no races.
    pub fn average(&self) -> f64 {
        if self.points > 0 && self.races > 0 {
            self.points as f64 / self.races as f64
        } else {
            0.0
        }
    }

    /// Whether the team has run enough races (1.5 per scorer) to appear in league tables.
    pub fn is_eligible(&self) -> bool {
        self.races > 0 && self.races as f64 >= self.size as f64 * 1.5
    }

    /// Recompute totals from the selected members.
    pub fn generate_stats(&mut self, registry: &MemberRegistry) {
        self.points = 0;
        self.races = 0;
        for &id in &self.members {
            let member = &registry[id];
            log::debug!(
                "TEAM:{} adding {} for {} from {} races",
                self.club,
                member.points,
                member.name,
                member.races
            );
            self.points += u64::from(member.points);
            self.races += u64::from(member.races);
        }
    }
}

/// A club and every league member who has run for it.
#[derive(Clone, Debug)]
pub struct Club {
    pub name: String,
    /// Insertion order; drives tie-breaks in team selection.
    members: Vec<MemberId>,
    slots: HashMap<String, usize>,
    male_team: Option<ClubTeam>,
    female_team: Option<ClubTeam>,
}

impl Club {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            slots: HashMap::new(),
            male_team: None,
            female_team: None,
        }
    }

    /// Add a member under `name`. Re-adding a name replaces its handle in place.
    pub fn add_member(&mut self, name: &str, id: MemberId) {
        match self.slots.get(name) {
            Some(&slot) => self.members[slot] = id,
            None => {
                self.slots.insert(name.to_string(), self.members.len());
                self.members.push(id);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Up to `size` members of `sex`, highest points first. Equal points keep roster order.
    pub fn select_top_scorers(&self, registry: &MemberRegistry, size: usize, sex: Sex) -> Vec<MemberId> {
        let mut scorers: Vec<MemberId> = self
            .members
            .iter()
            .copied()
            .filter(|&id| registry[id].sex == Some(sex))
            .collect();
        // sort_by is stable
        scorers.sort_by(|&a, &b| registry[b].points.cmp(&registry[a].points));
        scorers.truncate(size);
        scorers
    }

    /// Rebuild both teams from scratch.
    pub fn compute_teams(&mut self, registry: &MemberRegistry) {
        self.male_team = Some(self.build_team(registry, Sex::Male, MALE_TEAM_SIZE));
        self.female_team = Some(self.build_team(registry, Sex::Female, FEMALE_TEAM_SIZE));
    }

    fn build_team(&self, registry: &MemberRegistry, sex: Sex, size: usize) -> ClubTeam {
        let mut team = ClubTeam::new(self.name.clone(), sex, size);
        team.members = self.select_top_scorers(registry, size, sex);
        team.generate_stats(registry);
        team
    }

    /// None until [`Club::compute_teams`] has run.
    pub fn male_team(&self) -> Option<&ClubTeam> {
        self.male_team.as_ref()
    }

    pub fn female_team(&self) -> Option<&ClubTeam> {
        self.female_team.as_ref()
    }

    pub fn team(&self, sex: Sex) -> Option<&ClubTeam> {
        match sex {
            Sex::Male => self.male_team(),
            Sex::Female => self.female_team(),
        }
    }
}

/// All clubs, in the order they were first seen.
#[derive(Clone, Debug, Default)]
pub struct Clubs {
    clubs: Vec<Club>,
    by_name: HashMap<String, usize>,
}

impl Clubs {
    pub fn new() -> Self {
        Self::default()
    }

    /// The club called `name`, created empty if not yet known.
    pub fn get_or_create(&mut self, name: &str) -> &mut Club {
        let idx = match self.by_name.get(name) {
            Some(&idx) => idx,
            None => {
                log::debug!("New club {}", name);
                self.by_name.insert(name.to_string(), self.clubs.len());
                self.clubs.push(Club::new(name));
                self.clubs.len() - 1
            }
        };
        &mut self.clubs[idx]
    }

    pub fn get(&self, name: &str) -> Option<&Club> {
        self.by_name.get(name).map(|&idx| &self.clubs[idx])
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Club> {
        self.clubs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Club> {
        self.clubs.iter_mut()
    }
}
