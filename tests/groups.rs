//! Integration tests for group standings: positions, summary lines and club filters.

use league_standings::{format_ordinal, Group, GroupKind, Member, MemberRegistry, SecondClaims, Sex};

fn add(registry: &mut MemberRegistry, group: &mut Group, pos: u32, name: &str, club: &str, points: u32, avg: f64) {
    let id = registry.upsert(Member {
        name: name.to_string(),
        points,
        races: 5,
        avg,
        club: club.to_string(),
        ..Member::default()
    });
    group.add_positioned_member(pos, id);
}

fn sample() -> (MemberRegistry, Group) {
    let mut registry = MemberRegistry::new();
    let mut group = Group::letter("C");
    add(&mut registry, &mut group, 2, "Bob", "Other AC", 40, 8.0);
    add(&mut registry, &mut group, 1, "Alice", "Acme RC", 50, 10.0);
    add(&mut registry, &mut group, 3, "Carol", "Acme RC", 30, 6.5);
    (registry, group)
}

#[test]
fn ordinals() {
    for (n, s) in [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (101, "101st"),
        (111, "111st"),
        (112, "112nd"),
    ] {
        assert_eq!(format_ordinal(n), s);
    }
}

#[test]
fn letter_group_division_fixed_at_creation() {
    assert_eq!(Group::letter("C").sex(), Some(Sex::Male));
    assert_eq!(Group::letter("L").sex(), Some(Sex::Female));
    assert_eq!(Group::letter("M").sex(), Some(Sex::Female));
    assert_eq!(Group::age("Male V40").sex(), None);
}

#[test]
fn display_uses_kind_prefix() {
    assert_eq!(Group::letter("C").to_string(), "Group C");
    assert_eq!(Group::age("Lady V35").to_string(), "Lady V35");
    assert_eq!(Group::new(GroupKind::Age, "Male V50").kind, GroupKind::Age);
}

#[test]
fn summary_line_in_position_order() {
    let (registry, group) = sample();
    assert_eq!(
        group.summary_line(&registry),
        "Group C: 1st Alice (10.00/50), 2nd Bob (8.00/40), 3rd Carol (6.50/30) out of 3"
    );
}

#[test]
fn empty_group_summary() {
    let registry = MemberRegistry::new();
    assert_eq!(Group::age("Lady V35").summary_line(&registry), "Lady V35: out of 0");
}

#[test]
fn reused_position_overwrites() {
    let (mut registry, mut group) = sample();
    add(&mut registry, &mut group, 2, "Dave", "Other AC", 1, 1.0);
    assert_eq!(group.len(), 3);
    let id = group.member_at(2).unwrap();
    assert_eq!(registry[id].name, "Dave");
}

#[test]
fn club_summary_filters_and_counts() {
    let (registry, group) = sample();
    let (hits, line) = group.club_summary(&registry, &SecondClaims::new(), "Acme RC");
    assert_eq!(hits, 2);
    assert_eq!(line, "Group C: 1st Alice (10.00/50), 3rd Carol (6.50/30) out of 3");

    let (hits, _) = group.club_summary(&registry, &SecondClaims::new(), "Nobody RC");
    assert_eq!(hits, 0);
}

#[test]
fn club_summary_includes_second_claims() {
    let (registry, group) = sample();
    let claims: SecondClaims = [("Bob", "Acme RC")].into_iter().collect();
    let (hits, line) = group.club_summary(&registry, &claims, "Acme RC");
    assert_eq!(hits, 3);
    assert!(line.contains("2nd Bob (8.00/40)"));

    // first-claim club still matches
    let (hits, _) = group.club_summary(&registry, &claims, "Other AC");
    assert_eq!(hits, 1);
}

#[test]
fn club_summary_table_layout() {
    let (registry, group) = sample();
    let (hits, table) = group.club_summary_table(&registry, &SecondClaims::new(), "Acme RC");
    assert_eq!(hits, 2);
    assert_eq!(
        table,
        "Group C (out of 3):\n  1st Alice 50 Pts, 10.00 Avg, 5 Rs\n  3rd Carol 30 Pts, 6.50 Avg, 5 Rs"
    );
}
