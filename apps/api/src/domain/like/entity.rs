use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use ts_rs::TS;

/// Like counter for one image.
///
/// A row exists only once the image has been liked; a missing row reads as
/// zero likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct LikeCount {
    pub image_path: String,
    pub likes: i64,
}

/// How the like counter is bumped.
///
/// `Atomic` issues one upsert statement. `Racy` reads the current count and
/// writes back `count + 1`, so two concurrent likes on the same image can lose
/// an increment. `Racy` exists for parity with the read-then-write behaviour of
/// earlier deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncrementStrategy {
    #[default]
    Atomic,
    Racy,
}

impl fmt::Display for IncrementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncrementStrategy::Atomic => f.write_str("atomic"),
            IncrementStrategy::Racy => f.write_str("racy"),
        }
    }
}

impl FromStr for IncrementStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atomic" => Ok(IncrementStrategy::Atomic),
            "racy" => Ok(IncrementStrategy::Racy),
            other => Err(format!(
                "unknown increment strategy '{}', expected 'atomic' or 'racy'",
                other
            )),
        }
    }
}
