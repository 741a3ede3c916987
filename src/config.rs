//! Run configuration: the second-claim club table and report selection.

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default club reported on when none is given.
pub const DEFAULT_CLUB: &str = "Stoke FIT";

/// Default league name used in report banners.
pub const DEFAULT_LEAGUE_NAME: &str = "NSRRA";

/// Runners who may also score for a club other than the one in the results sheet.
///
/// Stored as a JSON object mapping runner name to club name, e.g.
/// `{"Amanda Kelly": "Stoke FIT"}`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecondClaims(HashMap<String, String>);

impl SecondClaims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, club: impl Into<String>) {
        self.0.insert(name.into(), club.into());
    }

    /// Second-claim club for `name`, if listed.
    pub fn club_for(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let claims = Self::from_json_str(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded {} second claim(s) from {}", claims.len(), path.display());
        Ok(claims)
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for SecondClaims {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, club)| (name.into(), club.into()))
                .collect(),
        )
    }
}

/// Which report the binary prints.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ReportKind {
    /// One line per group listing the club's runners.
    Text,
    /// One table per group listing the club's runners.
    Table,
    /// Male and female club team rankings.
    Teams,
    /// Every group's full standings line.
    Groups,
}

/// Everything a run needs, resolved from the command line and environment.
#[derive(Clone, Debug)]
pub struct Settings {
    pub sheets: Vec<PathBuf>,
    pub club: String,
    pub league_name: String,
    pub second_claims: Option<PathBuf>,
    pub reports: Vec<ReportKind>,
}

impl Settings {
    /// Reports to print, falling back to the club table and team rankings.
    pub fn reports(&self) -> Vec<ReportKind> {
        if self.reports.is_empty() {
            vec![ReportKind::Table, ReportKind::Teams]
        } else {
            self.reports.clone()
        }
    }

    /// Second-claim table from the configured file, or an empty one.
    pub fn load_second_claims(&self) -> Result<SecondClaims, LoadError> {
        match &self.second_claims {
            Some(path) => SecondClaims::load(path),
            None => Ok(SecondClaims::new()),
        }
    }
}
