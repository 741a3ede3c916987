//! Member (runner) records and the name-keyed registry that owns them.

use crate::config::SecondClaims;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

/// Handle to a member stored in a [`MemberRegistry`]. Clubs and groups hold these,
/// never their own copies, so an edit through the registry is seen everywhere.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MemberId(usize);

/// League division a runner competes in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "M"),
            Sex::Female => write!(f, "F"),
        }
    }
}

/// A runner in the league.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Unset for runners only seen in age-group tables.
    pub sex: Option<Sex>,
    pub points: u32,
    pub races: u32,
    /// Average as published in the results sheet. Not recomputed from points/races.
    pub avg: f64,
    pub group: String,
    pub age_group: String,
    pub club: String,
}

impl Member {
    /// Create a member with the given name. Other fields start empty/zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Alternate club this runner may also score for, if any.
    pub fn second_claim<'a>(&self, claims: &'a SecondClaims) -> Option<&'a str> {
        claims.club_for(&self.name)
    }

    /// True if the runner's first claim or second claim club is `club`.
    pub fn represents(&self, club: &str, claims: &SecondClaims) -> bool {
        self.club == club || self.second_claim(claims) == Some(club)
    }
}

/// Every member in the league, unique by name (case-sensitive).
#[derive(Clone, Debug, Default)]
pub struct MemberRegistry {
    members: Vec<Member>,
    by_name: HashMap<String, MemberId>,
}

impl MemberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `member` unless one with the same name exists.
    ///
    /// Either way the returned handle points at the stored record. An existing record is left
    /// untouched; callers that need to change it go through [`MemberRegistry::get_mut`].
    pub fn upsert(&mut self, member: Member) -> MemberId {
        if let Some(&id) = self.by_name.get(&member.name) {
            return id;
        }
        let id = MemberId(self.members.len());
        self.by_name.insert(member.name.clone(), id);
        self.members.push(member);
        id
    }

    pub fn find(&self, name: &str) -> Option<MemberId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.get(id.0)
    }

    pub fn get_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (MemberId, &Member)> {
        self.members
            .iter()
            .enumerate()
            .map(|(i, m)| (MemberId(i), m))
    }
}

// MemberId has a private field and is only built by this registry, so a handle from the
// registry that owns it is always in bounds.
impl Index<MemberId> for MemberRegistry {
    type Output = Member;

    fn index(&self, id: MemberId) -> &Member {
        &self.members[id.0]
    }
}

impl IndexMut<MemberId> for MemberRegistry {
    fn index_mut(&mut self, id: MemberId) -> &mut Member {
        &mut self.members[id.0]
    }
}
