use super::super::domain::{HistoryEntry, Voyage, Zone};

pub(crate) fn has_china_history(history: &[HistoryEntry]) -> bool {
    history.iter().any(|entry| entry.zone == Zone::China)
}

pub(crate) fn loss_count(history: &[HistoryEntry]) -> i64 {
    history.iter().filter(|entry| entry.is_loss()).count() as i64
}

pub(crate) fn voyage_risk(voyage: &Voyage) -> i64 {
    let length = voyage.effective_length();
    let mut result = 1;
    if length > 4 {
        result += 2;
    }
    if length > 8 {
        result += length - 8;
    }
    if voyage.is_to(&Zone::China) || voyage.is_to(&Zone::EastIndies) {
        result += 4;
    }
    result.max(0)
}

/// History risk before any route-experience discount or clamping.
fn raw_history_risk(history: &[HistoryEntry]) -> i64 {
    let mut result = 1;
    if history.len() < 5 {
        result += 4;
    }
    result + loss_count(history)
}

pub(crate) mod standard {
    use super::*;

    pub(crate) fn captain_history_risk(voyage: &Voyage, history: &[HistoryEntry]) -> i64 {
        let mut result = raw_history_risk(history);
        if voyage.is_to(&Zone::China) && has_china_history(history) {
            result -= 2;
        }
        result.max(0)
    }

    pub(crate) fn history_length_factor(history: &[HistoryEntry]) -> i64 {
        if history.len() > 8 {
            1
        } else {
            0
        }
    }

    pub(crate) fn voyage_length_factor(voyage: &Voyage) -> i64 {
        if voyage.effective_length() > 14 {
            -1
        } else {
            0
        }
    }

    pub(crate) fn voyage_profit_factor(voyage: &Voyage, history: &[HistoryEntry]) -> i64 {
        let mut result = 2;
        if voyage.is_to(&Zone::China) {
            result += 1;
        }
        if voyage.is_to(&Zone::EastIndies) {
            result += 1;
        }
        result + history_length_factor(history) + voyage_length_factor(voyage)
    }
}

/// Overrides for a China voyage commanded by a captain who has sailed there
/// before. The precondition is established by selection and not re-checked.
pub(crate) mod experienced {
    use super::*;

    const ROUTE_EXPERIENCE_DISCOUNT: i64 = 2;
    const ROUTE_EXPERIENCE_BONUS: i64 = 3;

    pub(crate) fn captain_history_risk(history: &[HistoryEntry]) -> i64 {
        (raw_history_risk(history) - ROUTE_EXPERIENCE_DISCOUNT).max(0)
    }

    pub(crate) fn history_length_factor(history: &[HistoryEntry]) -> i64 {
        if history.len() > 10 {
            1
        } else {
            0
        }
    }

    /// Base 3 folds in the flat route bonuses of the standard formula.
    pub(crate) fn voyage_length_factor(voyage: &Voyage) -> i64 {
        let length = voyage.effective_length();
        let mut result = 3;
        if length > 12 {
            result += 1;
        }
        if length > 18 {
            result -= 1;
        }
        result
    }

    pub(crate) fn voyage_profit_factor(voyage: &Voyage, history: &[HistoryEntry]) -> i64 {
        voyage_length_factor(voyage) + history_length_factor(history) + ROUTE_EXPERIENCE_BONUS
    }
}
