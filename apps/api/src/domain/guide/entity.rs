use crate::domain::{record::entity::PlantKind, shared::errors::DomainError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use ts_rs::TS;

/// Advisory shown for the cold region.
pub const COLD_REGION_ADVISORY: &str = "Indoor cultivation is recommended in cold regions.";

/// Care attributes for one plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CareGuide {
    pub plant: PlantKind,
    pub watering: &'static str,
    pub sunlight: &'static str,
    pub caution: &'static str,
}

const GUIDES: [CareGuide; 2] = [
    CareGuide {
        plant: PlantKind::Tomato,
        watering: "twice a week",
        sunlight: "6 hours or more",
        caution: "set up a support stake",
    },
    CareGuide {
        plant: PlantKind::Basil,
        watering: "3 times a week",
        sunlight: "4 hours or more",
        caution: "pinch off leaves frequently",
    },
];

/// Growing regions offered by the guide page. Only used for the advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Region {
    Hokkaido,
    Kanto,
    Kyushu,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Hokkaido, Region::Kanto, Region::Kyushu];

    /// Hokkaido is the only region with an advisory; the guide itself never changes.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Region::Hokkaido => Some(COLD_REGION_ADVISORY),
            Region::Kanto | Region::Kyushu => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Hokkaido => "hokkaido",
            Region::Kanto => "kanto",
            Region::Kyushu => "kyushu",
        };
        f.write_str(name)
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hokkaido" => Ok(Region::Hokkaido),
            "kanto" => Ok(Region::Kanto),
            "kyushu" => Ok(Region::Kyushu),
            other => Err(format!("Unknown region: {}", other)),
        }
    }
}

pub fn all_guides() -> &'static [CareGuide] {
    &GUIDES
}

/// Lettuce can be logged but has no guide entry.
pub fn guide_for(plant: PlantKind) -> Option<&'static CareGuide> {
    GUIDES.iter().find(|g| g.plant == plant)
}

/// Looks up the guide for a plant name as it appears in a URL.
///
/// # Errors
/// `NotFound` for a name outside the plant list and for a plant without a
/// guide entry.
pub fn find_guide(plant: &str) -> Result<&'static CareGuide, DomainError> {
    let plant: PlantKind = plant.parse().map_err(DomainError::NotFound)?;
    guide_for(plant)
        .ok_or_else(|| DomainError::NotFound(format!("No cultivation guide for {}", plant)))
}
