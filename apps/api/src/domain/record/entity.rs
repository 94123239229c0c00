use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use ts_rs::TS;

/// Display name used when a submission carries no user name.
pub const DEFAULT_USER: &str = "Guest";

/// Number of records shown on the home feed.
pub const RECENT_FEED_LIMIT: i64 = 3;

/// One growth-log entry.
///
/// Records are append-only: once created they are never updated or deleted.
///
/// # Invariants
/// - `id` is assigned by the store, increases monotonically and is never reused
/// - `image_path` is the join key to the like counters; uniqueness depends on
///   how upload file names are generated
/// - `plant` is plain text; the closed set of [`PlantKind`] is enforced only at
///   entry time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Record {
    /// Store-assigned identifier
    pub id: i64,

    /// Free-form display name of the submitter
    pub user: String,

    /// Plant kind as entered
    pub plant: String,

    /// Server-observed submission date (day granularity)
    pub date: NaiveDate,

    /// Filesystem location of the persisted photo
    pub image_path: String,
}

/// Fields supplied when appending a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub user: String,
    pub plant: String,
    pub date: NaiveDate,
    pub image_path: String,
}

impl NewRecord {
    /// Builds a record, falling back to [`DEFAULT_USER`] for a blank user name.
    pub fn new(
        user: Option<&str>,
        plant: impl Into<String>,
        date: NaiveDate,
        image_path: impl Into<String>,
    ) -> Self {
        Self {
            user: normalize_user(user),
            plant: plant.into(),
            date,
            image_path: image_path.into(),
        }
    }
}

/// Trims the user name and substitutes [`DEFAULT_USER`] when nothing is left.
pub fn normalize_user(user: Option<&str>) -> String {
    user.map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_USER)
        .to_string()
}

/// Plants offered by the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PlantKind {
    Tomato,
    Basil,
    Lettuce,
}

impl PlantKind {
    pub const ALL: [PlantKind; 3] = [PlantKind::Tomato, PlantKind::Basil, PlantKind::Lettuce];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantKind::Tomato => "tomato",
            PlantKind::Basil => "basil",
            PlantKind::Lettuce => "lettuce",
        }
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tomato" => Ok(PlantKind::Tomato),
            "basil" => Ok(PlantKind::Basil),
            "lettuce" => Ok(PlantKind::Lettuce),
            other => Err(format!("unknown plant '{}'", other)),
        }
    }
}
