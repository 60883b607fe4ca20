pub mod bulk;
pub mod domain;
pub mod import;
pub mod rating;
pub mod router;

pub use bulk::{bulk_breakdowns, bulk_ratings, RatingRequest};
pub use domain::{Grade, HistoryEntry, Voyage, Zone};
pub use import::{ImportError, VoyageImporter};
pub use rating::{rating, select_rating, Rating, RatingBreakdown, RatingVariant};
pub use router::rating_router;
