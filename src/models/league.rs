//! League: every member, club and group from one data snapshot.

use crate::config::{SecondClaims, DEFAULT_LEAGUE_NAME};
use crate::models::club::Clubs;
use crate::models::group::{GroupKind, Groups};
use crate::models::member::MemberRegistry;

/// Full league state. Built once per run, filled by ingestion and read by the reports.
///
/// Clubs and groups refer to members by [`crate::MemberId`], so fields stay disjoint and
/// ingestion can borrow them independently.
#[derive(Clone, Debug)]
pub struct League {
    /// Shown in report banners.
    pub name: String,
    pub members: MemberRegistry,
    pub clubs: Clubs,
    /// General competition, keyed by letter.
    pub letter_groups: Groups,
    /// Age-bracket competition, keyed by bracket label.
    pub age_groups: Groups,
    pub second_claims: SecondClaims,
}

impl League {
    /// Create an empty league with no second claims.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: MemberRegistry::new(),
            clubs: Clubs::new(),
            letter_groups: Groups::new(GroupKind::Letter),
            age_groups: Groups::new(GroupKind::Age),
            second_claims: SecondClaims::new(),
        }
    }

    pub fn with_second_claims(name: impl Into<String>, second_claims: SecondClaims) -> Self {
        Self {
            second_claims,
            ..Self::new(name)
        }
    }

    /// Groups of the given kind.
    pub fn groups(&self, kind: GroupKind) -> &Groups {
        match kind {
            GroupKind::Letter => &self.letter_groups,
            GroupKind::Age => &self.age_groups,
        }
    }
}

impl Default for League {
    fn default() -> Self {
        Self::new(DEFAULT_LEAGUE_NAME)
    }
}
