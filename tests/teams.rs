//! Integration tests for club rosters: member registry, top-scorer selection and team totals.

use league_standings::models::{FEMALE_TEAM_SIZE, MALE_TEAM_SIZE};
use league_standings::{Club, ClubTeam, Member, MemberId, MemberRegistry, Sex};

fn runner(name: &str, sex: Sex, points: u32, races: u32) -> Member {
    Member {
        name: name.to_string(),
        sex: Some(sex),
        points,
        races,
        club: "Acme RC".to_string(),
        ..Member::default()
    }
}

fn club_with(registry: &mut MemberRegistry, members: Vec<Member>) -> Club {
    let mut club = Club::new("Acme RC");
    for m in members {
        let name = m.name.clone();
        let id = registry.upsert(m);
        club.add_member(&name, id);
    }
    club
}

fn names(registry: &MemberRegistry, ids: &[MemberId]) -> Vec<String> {
    ids.iter().map(|&id| registry[id].name.clone()).collect()
}

#[test]
fn upsert_returns_existing_record_unchanged() {
    let mut registry = MemberRegistry::new();
    let first = registry.upsert(runner("Ann", Sex::Female, 10, 2));
    let again = registry.upsert(runner("Ann", Sex::Female, 99, 9));
    assert_eq!(first, again);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry[first].points, 10);
    // names are case-sensitive
    let other = registry.upsert(runner("ann", Sex::Female, 1, 1));
    assert_ne!(first, other);
}

#[test]
fn edit_through_registry_is_seen_by_club() {
    let mut registry = MemberRegistry::new();
    let mut club = club_with(&mut registry, vec![runner("Bob", Sex::Male, 10, 2)]);
    let id = registry.find("Bob").unwrap();
    registry.get_mut(id).unwrap().points = 50;

    club.compute_teams(&registry);
    assert_eq!(club.male_team().unwrap().points, 50);
}

#[test]
fn top_scorers_sorted_filtered_and_truncated() {
    let mut registry = MemberRegistry::new();
    let club = club_with(
        &mut registry,
        vec![
            runner("M1", Sex::Male, 10, 1),
            runner("F1", Sex::Female, 90, 1),
            runner("M2", Sex::Male, 30, 1),
            runner("M3", Sex::Male, 20, 1),
            runner("M4", Sex::Male, 5, 1),
        ],
    );
    let top = club.select_top_scorers(&registry, 3, Sex::Male);
    assert_eq!(names(&registry, &top), ["M2", "M3", "M1"]);
    for &id in &top {
        assert_eq!(registry[id].sex, Some(Sex::Male));
    }
}

#[test]
fn top_scorers_ties_keep_roster_order() {
    let mut registry = MemberRegistry::new();
    let club = club_with(
        &mut registry,
        vec![
            runner("First", Sex::Female, 20, 1),
            runner("Second", Sex::Female, 40, 1),
            runner("Third", Sex::Female, 20, 1),
            runner("Fourth", Sex::Female, 20, 1),
        ],
    );
    let top = club.select_top_scorers(&registry, 3, Sex::Female);
    assert_eq!(names(&registry, &top), ["Second", "First", "Third"]);
}

#[test]
fn top_scorers_empty_when_no_members_of_sex() {
    let mut registry = MemberRegistry::new();
    let club = club_with(&mut registry, vec![runner("M1", Sex::Male, 10, 1)]);
    assert!(club.select_top_scorers(&registry, 4, Sex::Female).is_empty());
}

#[test]
fn readding_member_keeps_roster_slot() {
    let mut registry = MemberRegistry::new();
    let mut club = club_with(
        &mut registry,
        vec![runner("A", Sex::Male, 1, 1), runner("B", Sex::Male, 1, 1)],
    );
    let a = registry.find("A").unwrap();
    club.add_member("A", a);
    assert_eq!(club.len(), 2);
    assert_eq!(names(&registry, club.members()), ["A", "B"]);
}

#[test]
fn compute_teams_sums_and_is_idempotent() {
    let mut registry = MemberRegistry::new();
    let mut members: Vec<Member> = (0..8)
        .map(|i| runner(&format!("M{i}"), Sex::Male, 10 * (i + 1), 2))
        .collect();
    members.push(runner("F0", Sex::Female, 15, 3));
    let mut club = club_with(&mut registry, members);

    club.compute_teams(&registry);
    let first = club.male_team().unwrap().clone();
    assert_eq!(first.size, MALE_TEAM_SIZE);
    assert_eq!(first.members.len(), MALE_TEAM_SIZE);
    // top six: 80+70+60+50+40+30
    assert_eq!(first.points, 330);
    assert_eq!(first.races, 12);

    club.compute_teams(&registry);
    assert_eq!(club.male_team().unwrap(), &first);

    let women = club.female_team().unwrap();
    assert_eq!(women.size, FEMALE_TEAM_SIZE);
    assert_eq!(women.points, 15);
    assert_eq!(women.races, 3);
    assert!(!women.is_eligible());
}

#[test]
fn no_members_of_sex_gives_zero_ineligible_team() {
    let mut registry = MemberRegistry::new();
    let mut club = club_with(&mut registry, vec![runner("M1", Sex::Male, 10, 10)]);
    club.compute_teams(&registry);
    let women = club.team(Sex::Female).unwrap();
    assert_eq!((women.points, women.races), (0, 0));
    assert_eq!(women.average(), 0.0);
    assert!(!women.is_eligible());
}

#[test]
fn eligibility_needs_one_and_a_half_races_per_scorer() {
    let mut team = ClubTeam::new("Acme RC", Sex::Male, 6);
    team.races = 9;
    assert!(team.is_eligible());
    team.races = 8;
    assert!(!team.is_eligible());

    let mut women = ClubTeam::new("Acme RC", Sex::Female, 4);
    women.races = 6;
    assert!(women.is_eligible());
    women.races = 5;
    assert!(!women.is_eligible());
}

#[test]
fn team_average_is_points_per_race() {
    let mut team = ClubTeam::new("Acme RC", Sex::Male, 6);
    team.points = 45;
    team.races = 10;
    assert_eq!(team.average(), 4.5);
    team.points = 0;
    assert_eq!(team.average(), 0.0);
}
