//! Table-driven classification of birds by species tag.
//!
//! Unrecognized tags never fail: they classify as [`Species::Unknown`], whose
//! plumage is `unknown` and whose air speed is absent.

pub mod router;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw bird record as submitted by callers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bird {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub number_of_coconuts: u32,
    #[serde(default)]
    pub voltage: f64,
    #[serde(default)]
    pub is_nailed: bool,
}

/// Species resolved from a bird's tag, carrying only the attributes its
/// formulas read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Species {
    EuropeanSwallow,
    AfricanSwallow { number_of_coconuts: u32 },
    NorwegianBlueParrot { voltage: f64, is_nailed: bool },
    Unknown,
}

impl Species {
    pub fn classify(bird: &Bird) -> Self {
        match bird.kind.as_str() {
            "EuropeanSwallow" => Self::EuropeanSwallow,
            "AfricanSwallow" => Self::AfricanSwallow {
                number_of_coconuts: bird.number_of_coconuts,
            },
            "NorwegianBlueParrot" => Self::NorwegianBlueParrot {
                voltage: bird.voltage,
                is_nailed: bird.is_nailed,
            },
            _ => Self::Unknown,
        }
    }

    pub fn plumage(&self) -> Plumage {
        match self {
            Species::EuropeanSwallow => Plumage::Average,
            Species::AfricanSwallow { number_of_coconuts } if *number_of_coconuts > 2 => {
                Plumage::Tired
            }
            Species::AfricanSwallow { .. } => Plumage::Average,
            Species::NorwegianBlueParrot { voltage, .. } if *voltage > 100.0 => Plumage::Scorched,
            Species::NorwegianBlueParrot { .. } => Plumage::Beautiful,
            Species::Unknown => Plumage::Unknown,
        }
    }

    pub fn air_speed_velocity(&self) -> Option<f64> {
        match self {
            Species::EuropeanSwallow => Some(35.0),
            Species::AfricanSwallow { number_of_coconuts } => {
                Some(40.0 - 2.0 * f64::from(*number_of_coconuts))
            }
            Species::NorwegianBlueParrot { is_nailed: true, .. } => Some(0.0),
            Species::NorwegianBlueParrot { voltage, .. } => Some(10.0 + voltage / 10.0),
            Species::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plumage {
    Average,
    Tired,
    Scorched,
    Beautiful,
    Unknown,
}

impl Plumage {
    pub fn label(&self) -> &'static str {
        match self {
            Plumage::Average => "average",
            Plumage::Tired => "tired",
            Plumage::Scorched => "scorched",
            Plumage::Beautiful => "beautiful",
            Plumage::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Plumage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn plumage(bird: &Bird) -> Plumage {
    Species::classify(bird).plumage()
}

pub fn air_speed_velocity(bird: &Bird) -> Option<f64> {
    Species::classify(bird).air_speed_velocity()
}

pub fn plumages(birds: &[Bird]) -> Vec<(String, Plumage)> {
    birds
        .iter()
        .map(|bird| (bird.name.clone(), plumage(bird)))
        .collect()
}

pub fn speeds(birds: &[Bird]) -> Vec<(String, Option<f64>)> {
    birds
        .iter()
        .map(|bird| (bird.name.clone(), air_speed_velocity(bird)))
        .collect()
}
