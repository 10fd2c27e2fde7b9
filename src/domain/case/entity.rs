use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Strongly-typed identifier for an animal case.
///
/// Ids are assigned sequentially by the repository, starting at 1, and are
/// never reused within a process lifetime. HTTP path parameters are parsed
/// into a `CaseId` once at the edge; an unparsable id behaves exactly like an
/// unknown one (not found).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub u64);

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CaseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(CaseId)
    }
}

/// Default status assigned to newly reported cases.
pub const DEFAULT_STATUS: &str = "open";

/// A reported animal case.
///
/// `image_url` is an opaque reference, typically the `/uploads/...` path
/// returned by the upload pipeline; the registry never interprets it.
/// `status` is a free-form string (e.g. "open", "in_progress", "resolved").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalCase {
    pub id: CaseId,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
    pub status: String,
}

/// Parameters for creating a case; the repository assigns the id and
/// initial status.
#[derive(Debug, Clone)]
pub struct NewCase {
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
}

/// Partial update for an existing case. `None` fields leave the stored value
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct CasePatch {
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}
