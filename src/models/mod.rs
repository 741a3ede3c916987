//! Data structures for the league: members, clubs and teams, groups, result rows.

mod club;
mod group;
mod league;
mod member;
mod row;

pub use club::{
    Club, ClubTeam, Clubs, FEMALE_TEAM_SIZE, MALE_TEAM_SIZE, UNKNOWN_CLUB, UNKNOWN_CLUB_EX,
};
pub use group::{format_average, format_ordinal, letter_group_sex, Group, GroupKind, Groups};
pub use league::League;
pub use member::{Member, MemberId, MemberRegistry, Sex};
pub use row::{columns, Cell, RawRow};
