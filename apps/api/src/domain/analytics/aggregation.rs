//! Read-only summaries derived from the full record set.
//!
//! Nothing here is persisted: every view is recomputed from the records passed in.

use crate::domain::record::entity::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use ts_rs::TS;

/// Message shown in place of the charts when there are no records yet.
pub const NO_DATA_MESSAGE: &str = "No data yet.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlantShare {
    pub plant: String,
    pub count: i64,
    /// Fraction of all records, in `0.0..=1.0`
    pub proportion: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub plant: String,
    pub tool: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum AnalyticsReport {
    Empty {
        message: String,
    },
    Ready {
        total_records: i64,
        plant_distribution: Vec<PlantShare>,
        daily_frequency: Vec<DailyCount>,
        recommendation: Recommendation,
    },
}

impl AnalyticsReport {
    pub fn from_records(records: &[Record]) -> Self {
        if records.is_empty() {
            return AnalyticsReport::Empty {
                message: NO_DATA_MESSAGE.to_string(),
            };
        }

        AnalyticsReport::Ready {
            total_records: records.len() as i64,
            plant_distribution: plant_distribution(records),
            daily_frequency: daily_frequency(records),
            recommendation: recommend(records),
        }
    }
}

/// Groups records by plant. Largest share first, then by plant name.
pub fn plant_distribution(records: &[Record]) -> Vec<PlantShare> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<&str, i64> = HashMap::new();
    for record in records {
        *counts.entry(record.plant.as_str()).or_default() += 1;
    }

    let total = records.len() as f64;
    let mut shares: Vec<PlantShare> = counts
        .into_iter()
        .map(|(plant, count)| PlantShare {
            plant: plant.to_string(),
            count,
            proportion: count as f64 / total,
        })
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.plant.cmp(&b.plant)));
    shares
}

/// Posts per day in ascending date order.
pub fn daily_frequency(records: &[Record]) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for record in records {
        *per_day.entry(record.date).or_default() += 1;
    }

    per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Fixed rule: anyone who has grown tomatoes gets basil and a stake,
/// everyone else gets lettuce and a watering can.
pub fn recommend(records: &[Record]) -> Recommendation {
    let grew_tomato = records.iter().any(|r| r.plant == "tomato");

    if grew_tomato {
        Recommendation {
            plant: "basil".to_string(),
            tool: "stake".to_string(),
        }
    } else {
        Recommendation {
            plant: "lettuce".to_string(),
            tool: "watering can".to_string(),
        }
    }
}
