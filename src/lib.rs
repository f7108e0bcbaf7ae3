//! jobcon - Search and publishing service for the iJob jobs/services marketplace
//!
//! This library holds the filter/search state model used by the search screen,
//! the candidate matching pipeline built on top of it, the offer publish flow,
//! and the thin clients for the managed Firebase backend.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FilterCriteria, LocationField, OfferForm, Searcher, VoiceSearch};
pub use crate::models::{Message, Offer, ProviderProfile, SearchRequest, SearchResponse};
pub use crate::services::{AuthClient, FirebaseClient};
