// Core state model exports
pub mod criteria;
pub mod filters;
pub mod publish;
pub mod searcher;
pub mod voice;

pub use criteria::{FilterCriteria, LocationCriteria, LocationField};
pub use filters::matches_criteria;
pub use publish::{MissingField, OfferForm};
pub use searcher::{SearchResult, Searcher};
pub use voice::{VoiceOutcome, VoiceSearch};
