use super::domain::{Grade, HistoryEntry, Voyage};
use super::rating::{select_rating, RatingBreakdown};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named voyage submitted for rating together with its captain's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRequest {
    pub name: String,
    #[serde(flatten)]
    pub voyage: Voyage,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl RatingRequest {
    pub fn new(name: impl Into<String>, voyage: Voyage, history: Vec<HistoryEntry>) -> Self {
        Self {
            name: name.into(),
            voyage,
            history,
        }
    }

    /// Lower-cases and trims every zone tag so that `"China"` counts as China.
    pub fn normalize_zones(&mut self) {
        self.voyage.normalize_zone();
        self.history
            .iter_mut()
            .for_each(HistoryEntry::normalize_zone);
    }

    pub fn grade(&self) -> Grade {
        select_rating(&self.voyage, &self.history).value()
    }

    pub fn breakdown(&self) -> RatingBreakdown {
        select_rating(&self.voyage, &self.history).breakdown()
    }
}

/// Grades every request, one entry per input in the order supplied.
///
/// Names are not de-duplicated.
pub fn bulk_ratings(requests: &[RatingRequest]) -> Vec<(String, Grade)> {
    let graded: Vec<_> = requests
        .iter()
        .map(|request| (request.name.clone(), request.grade()))
        .collect();
    debug!(voyages = graded.len(), "bulk rating complete");
    graded
}

pub fn bulk_breakdowns(requests: &[RatingRequest]) -> Vec<(String, RatingBreakdown)> {
    let graded: Vec<_> = requests
        .iter()
        .map(|request| (request.name.clone(), request.breakdown()))
        .collect();
    debug!(voyages = graded.len(), "bulk breakdown complete");
    graded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voyage::rating::RatingVariant;

    fn requests() -> Vec<RatingRequest> {
        vec![
            RatingRequest::new(
                "west-indies run",
                Voyage::new("west-indies", Some(10)),
                vec![HistoryEntry::new("east-indies", Some(5.0))],
            ),
            RatingRequest::new(
                "silk",
                Voyage::new("china", None),
                vec![HistoryEntry::new("china", None)],
            ),
            RatingRequest::new(
                "latam",
                Voyage::new("latam", None),
                (0..10).map(|_| HistoryEntry::new("latam", None)).collect(),
            ),
        ]
    }

    #[test]
    fn bulk_ratings_preserves_input_order() {
        let graded = bulk_ratings(&requests());
        let names: Vec<_> = graded.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["west-indies run", "silk", "latam"]);
        assert_eq!(graded[2].1, Grade::A);
    }

    #[test]
    fn bulk_ratings_keeps_duplicate_names() {
        let mut input = requests();
        input.push(input[0].clone());
        assert_eq!(bulk_ratings(&input).len(), input.len());
    }

    #[test]
    fn bulk_breakdowns_report_variant_per_voyage() {
        let breakdowns = bulk_breakdowns(&requests());
        assert_eq!(breakdowns[0].1.variant, RatingVariant::Default);
        assert_eq!(breakdowns[1].1.variant, RatingVariant::ExperiencedRoute);
        assert_eq!(breakdowns[1].1.voyage_profit_factor, 6);
    }

    #[test]
    fn normalize_zones_turns_case_mismatch_into_route_experience() {
        let mut request = RatingRequest::new(
            "mixed case",
            Voyage::new("China", None),
            vec![HistoryEntry::new(" CHINA", None)],
        );
        assert_eq!(request.breakdown().variant, RatingVariant::Default);

        request.normalize_zones();
        assert_eq!(request.breakdown().variant, RatingVariant::ExperiencedRoute);
    }

    #[test]
    fn request_deserializes_flattened_voyage() {
        let request: RatingRequest = serde_json::from_str(
            r#"{"name":"silk","zone":"china","length":13,"history":[{"zone":"china","profit":-1}]}"#,
        )
        .expect("request parses");
        assert_eq!(request.voyage, Voyage::new("china", Some(13)));
        assert_eq!(request.history.len(), 1);
        assert!(request.history[0].is_loss());
    }
}
