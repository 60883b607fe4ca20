mod policy;
mod rules;

use super::domain::{Grade, HistoryEntry, Voyage, Zone};
use policy::decide_grade;
use rules::{experienced, standard};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Closed set of rating formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingVariant {
    Default,
    ExperiencedRoute,
}

impl RatingVariant {
    pub fn label(&self) -> &'static str {
        match self {
            RatingVariant::Default => "default",
            RatingVariant::ExperiencedRoute => "experienced route",
        }
    }
}

/// Immutable view over one voyage and the commanding captain's history.
///
/// Every accessor derives its value from the borrowed inputs on demand;
/// nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct Rating<'a> {
    voyage: &'a Voyage,
    history: &'a [HistoryEntry],
    variant: RatingVariant,
}

impl<'a> Rating<'a> {
    pub fn new(voyage: &'a Voyage, history: &'a [HistoryEntry], variant: RatingVariant) -> Self {
        Self {
            voyage,
            history,
            variant,
        }
    }

    pub fn default_variant(voyage: &'a Voyage, history: &'a [HistoryEntry]) -> Self {
        Self::new(voyage, history, RatingVariant::Default)
    }

    pub fn experienced_route(voyage: &'a Voyage, history: &'a [HistoryEntry]) -> Self {
        Self::new(voyage, history, RatingVariant::ExperiencedRoute)
    }

    pub fn variant(&self) -> RatingVariant {
        self.variant
    }

    pub fn voyage(&self) -> &'a Voyage {
        self.voyage
    }

    pub fn history(&self) -> &'a [HistoryEntry] {
        self.history
    }

    pub fn voyage_risk(&self) -> i64 {
        rules::voyage_risk(self.voyage)
    }

    pub fn captain_history_risk(&self) -> i64 {
        match self.variant {
            RatingVariant::Default => standard::captain_history_risk(self.voyage, self.history),
            RatingVariant::ExperiencedRoute => experienced::captain_history_risk(self.history),
        }
    }

    pub fn history_length_factor(&self) -> i64 {
        match self.variant {
            RatingVariant::Default => standard::history_length_factor(self.history),
            RatingVariant::ExperiencedRoute => experienced::history_length_factor(self.history),
        }
    }

    pub fn voyage_length_factor(&self) -> i64 {
        match self.variant {
            RatingVariant::Default => standard::voyage_length_factor(self.voyage),
            RatingVariant::ExperiencedRoute => experienced::voyage_length_factor(self.voyage),
        }
    }

    pub fn voyage_profit_factor(&self) -> i64 {
        match self.variant {
            RatingVariant::Default => standard::voyage_profit_factor(self.voyage, self.history),
            RatingVariant::ExperiencedRoute => {
                experienced::voyage_profit_factor(self.voyage, self.history)
            }
        }
    }

    pub fn value(&self) -> Grade {
        decide_grade(
            self.voyage_profit_factor(),
            self.voyage_risk(),
            self.captain_history_risk(),
        )
    }

    pub fn has_china_history(&self) -> bool {
        rules::has_china_history(self.history)
    }

    pub fn breakdown(&self) -> RatingBreakdown {
        RatingBreakdown {
            variant: self.variant,
            voyage_risk: self.voyage_risk(),
            captain_history_risk: self.captain_history_risk(),
            history_length_factor: self.history_length_factor(),
            voyage_length_factor: self.voyage_length_factor(),
            voyage_profit_factor: self.voyage_profit_factor(),
            grade: self.value(),
        }
    }
}

/// Snapshot of every intermediate quantity behind a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub variant: RatingVariant,
    pub voyage_risk: i64,
    pub captain_history_risk: i64,
    pub history_length_factor: i64,
    pub voyage_length_factor: i64,
    pub voyage_profit_factor: i64,
    pub grade: Grade,
}

impl RatingBreakdown {
    pub fn summary(&self) -> String {
        let weighted_profit = self.voyage_profit_factor * 3;
        let weighted_risk = self.voyage_risk + self.captain_history_risk * 2;
        let comparison = if weighted_profit > weighted_risk {
            ">"
        } else {
            "<="
        };
        format!(
            "grade {} ({} formulas): profit {} x3 = {} {} risk {} + history risk {} x2 = {}",
            self.grade,
            self.variant.label(),
            self.voyage_profit_factor,
            weighted_profit,
            comparison,
            self.voyage_risk,
            self.captain_history_risk,
            weighted_risk
        )
    }
}

/// Picks the experienced-route formulas for a China voyage whose captain has
/// already sailed to China, and the default formulas otherwise.
pub fn select_rating<'a>(voyage: &'a Voyage, history: &'a [HistoryEntry]) -> Rating<'a> {
    let variant = if voyage.is_to(&Zone::China) && rules::has_china_history(history) {
        RatingVariant::ExperiencedRoute
    } else {
        RatingVariant::Default
    };

    if let Some(tag) = near_miss_tag(voyage, history) {
        warn!(
            zone = %voyage.zone,
            tag = %tag,
            "route tag differs from a known route only by case or whitespace; exact matching applies"
        );
    }
    debug!(
        zone = %voyage.zone,
        history = history.len(),
        variant = variant.label(),
        "rating variant selected"
    );

    Rating::new(voyage, history, variant)
}

/// First tag, voyage before history, that only matches a known route after
/// normalization.
fn near_miss_tag<'a>(voyage: &'a Voyage, history: &'a [HistoryEntry]) -> Option<&'a Zone> {
    std::iter::once(&voyage.zone)
        .chain(history.iter().map(|entry| &entry.zone))
        .find(|zone| zone.is_near_miss())
}

pub fn rating(voyage: &Voyage, history: &[HistoryEntry]) -> Grade {
    select_rating(voyage, history).value()
}
