//! Letter groups and age groups: finishing positions and their text rendering.

use crate::config::SecondClaims;
use crate::models::member::{Member, MemberId, MemberRegistry, Sex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Which competition a group belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// General competition, named by a single letter.
    Letter,
    /// Age-bracket competition, named by its bracket label.
    Age,
}

impl GroupKind {
    /// Text printed before the group name.
    pub fn prefix(self) -> &'static str {
        match self {
            GroupKind::Letter => "Group ",
            GroupKind::Age => "",
        }
    }
}

/// Division of a letter group: `L` onwards (either case) is the women's range.
pub fn letter_group_sex(name: &str) -> Option<Sex> {
    let first = name.chars().next()?;
    if first.to_ascii_uppercase() >= 'L' {
        Some(Sex::Female)
    } else {
        Some(Sex::Male)
    }
}

/// `1` -> `"1st"`, `12` -> `"12th"`, `23` -> `"23rd"`. Only 11 to 13 themselves take "th";
/// `111` is `"111st"`.
pub fn format_ordinal(n: u32) -> String {
    let suffix = if (11..=13).contains(&n) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}

/// Averages are shown to two decimal places in every report.
pub fn format_average(avg: f64) -> String {
    format!("{avg:.2}")
}

/// Finishing order of one group.
#[derive(Clone, Debug)]
pub struct Group {
    pub name: String,
    pub kind: GroupKind,
    sex: Option<Sex>,
    /// 1-based position -> member.
    positions: BTreeMap<u32, MemberId>,
}

impl Group {
    /// A letter group; its division is fixed here from the first letter.
    pub fn letter(name: impl Into<String>) -> Self {
        let name = name.into();
        let sex = letter_group_sex(&name);
        Self {
            name,
            kind: GroupKind::Letter,
            sex,
            positions: BTreeMap::new(),
        }
    }

    pub fn age(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: GroupKind::Age,
            sex: None,
            positions: BTreeMap::new(),
        }
    }

    pub fn new(kind: GroupKind, name: impl Into<String>) -> Self {
        match kind {
            GroupKind::Letter => Self::letter(name),
            GroupKind::Age => Self::age(name),
        }
    }

    /// Division for letter groups; None for age groups.
    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    /// Place `id` at `position`, replacing whoever was there.
    pub fn add_positioned_member(&mut self, position: u32, id: MemberId) {
        self.positions.insert(position, id);
    }

    pub fn member_at(&self, position: u32) -> Option<MemberId> {
        self.positions.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// (position, member) in finishing order.
    pub fn positions(&self) -> impl Iterator<Item = (u32, MemberId)> + '_ {
        self.positions.iter().map(|(&pos, &id)| (pos, id))
    }

    /// Every runner in the group on one line.
    pub fn summary_line(&self, registry: &MemberRegistry) -> String {
        let entries: Vec<String> = self
            .positions()
            .map(|(pos, id)| summary_entry(pos, &registry[id]))
            .collect();
        self.render_line(&entries)
    }

    /// The group's runners who represent `club`, on one line.
    ///
    /// Returns the number of matching runners; when it is zero the line should not be shown.
    pub fn club_summary(
        &self,
        registry: &MemberRegistry,
        claims: &SecondClaims,
        club: &str,
    ) -> (usize, String) {
        let entries: Vec<String> = self
            .club_positions(registry, claims, club)
            .map(|(pos, member)| summary_entry(pos, member))
            .collect();
        (entries.len(), self.render_line(&entries))
    }

    /// The group's runners who represent `club`, one indented line each.
    pub fn club_summary_table(
        &self,
        registry: &MemberRegistry,
        claims: &SecondClaims,
        club: &str,
    ) -> (usize, String) {
        let mut out = format!("{} (out of {}):", self, self.len());
        let mut hits = 0;
        for (pos, member) in self.club_positions(registry, claims, club) {
            out.push_str(&format!(
                "\n  {} {} {} Pts, {} Avg, {} Rs",
                format_ordinal(pos),
                member.name,
                member.points,
                format_average(member.avg),
                member.races
            ));
            hits += 1;
        }
        (hits, out)
    }

    fn club_positions<'a>(
        &'a self,
        registry: &'a MemberRegistry,
        claims: &'a SecondClaims,
        club: &'a str,
    ) -> impl Iterator<Item = (u32, &'a Member)> + 'a {
        self.positions()
            .map(move |(pos, id)| (pos, &registry[id]))
            .filter(move |(_, member)| member.represents(club, claims))
    }

    fn render_line(&self, entries: &[String]) -> String {
        if entries.is_empty() {
            format!("{}: out of {}", self, self.len())
        } else {
            format!("{}: {} out of {}", self, entries.join(", "), self.len())
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.name)
    }
}

fn summary_entry(position: u32, member: &Member) -> String {
    format!(
        "{} {} ({}/{})",
        format_ordinal(position),
        member.name,
        format_average(member.avg),
        member.points
    )
}

/// Groups of one kind, in the order they were first seen.
#[derive(Clone, Debug)]
pub struct Groups {
    kind: GroupKind,
    groups: Vec<Group>,
    by_name: HashMap<String, usize>,
}

impl Groups {
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            groups: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// The group called `name`, created empty if not yet known.
    pub fn get_or_create(&mut self, name: &str) -> &mut Group {
        let idx = match self.by_name.get(name) {
            Some(&idx) => idx,
            None => {
                self.by_name.insert(name.to_string(), self.groups.len());
                self.groups.push(Group::new(self.kind, name));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx]
    }

    pub fn get(&self, name: &str) -> Option<&Group> {
        self.by_name.get(name).map(|&idx| &self.groups[idx])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }
}
