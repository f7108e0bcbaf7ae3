use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::core::criteria::{FilterCriteria, LocationField};

/// Simulated voice search.
///
/// There is no speech integration behind this: triggering it flips the active
/// flag, waits a fixed delay, then lands on one hard-coded filter combination.
/// The trigger/outcome contract is stable so a real recognizer can replace
/// the body later.
pub struct VoiceSearch {
    delay: Duration,
    active: AtomicBool,
}

/// Terms produced by one recognition run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOutcome {
    pub job_category: String,
    pub city: String,
    pub availability: Vec<String>,
}

impl VoiceSearch {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            active: AtomicBool::new(false),
        }
    }

    /// Whether a recognition run is currently in flight
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Run the one-shot recognition transition: active goes up, the fixed
    /// delay elapses, active goes back down and the preset outcome is
    /// returned.
    pub async fn recognize(&self) -> VoiceOutcome {
        self.active.store(true, Ordering::SeqCst);
        tracing::debug!("Voice search listening for {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        self.active.store(false, Ordering::SeqCst);
        VoiceOutcome::preset()
    }
}

impl Default for VoiceSearch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl VoiceOutcome {
    fn preset() -> Self {
        Self {
            job_category: "Bâtiment, électricité, plomberie".to_string(),
            city: "Gombe".to_string(),
            availability: vec!["Libre les week-ends".to_string()],
        }
    }

    /// Land the recognized terms onto live criteria. The availability
    /// selection is replaced wholesale, not merged.
    pub fn apply_to(&self, criteria: &mut FilterCriteria) {
        criteria.set_job_category(&self.job_category);
        criteria.set_location_field(LocationField::City, &self.city);
        criteria.availability = self.availability.iter().cloned().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_recognize_yields_preset_outcome() {
        let voice = VoiceSearch::new(Duration::from_millis(5));

        let outcome = voice.recognize().await;

        assert_eq!(outcome.job_category, "Bâtiment, électricité, plomberie");
        assert_eq!(outcome.city, "Gombe");
        assert_eq!(outcome.availability, vec!["Libre les week-ends"]);
        assert!(!voice.is_active());
    }

    #[tokio::test]
    async fn test_active_flag_during_recognition() {
        let voice = Arc::new(VoiceSearch::new(Duration::from_millis(50)));

        let handle = {
            let voice = Arc::clone(&voice);
            tokio::spawn(async move { voice.recognize().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(voice.is_active());

        handle.await.unwrap();
        assert!(!voice.is_active());
    }

    #[tokio::test]
    async fn test_outcome_replaces_availability() {
        let voice = VoiceSearch::new(Duration::from_millis(5));
        let mut criteria = FilterCriteria::default();
        criteria.toggle_availability("À plein temps");

        let outcome = voice.recognize().await;
        outcome.apply_to(&mut criteria);

        assert_eq!(criteria.job_category, "Bâtiment, électricité, plomberie");
        assert_eq!(criteria.location.city, "Gombe");
        assert_eq!(criteria.availability.len(), 1);
        assert!(criteria.availability.contains("Libre les week-ends"));
    }
}
