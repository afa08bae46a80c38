//! Diagnosis engine seam and the simulated implementation
//!
//! [`DiagnosisEngine`] is where a real inference backend would plug in: it
//! accepts a [`SessionRecord`] and yields a [`DiagnosisResult`] within bounded
//! time, or fails with [`Error::Inference`]. Re-invoking it is harmless.
//!
//! [`SimulatedDiagnosis`] waits a fixed delay and makes two independent
//! uniform draws. It never looks at the image or the crop.

use std::time::Duration;

use drcrop_core::prelude::*;
use drcrop_core::{DiagnosisResult, SessionRecord, CONFIDENCE_MAX, CONFIDENCE_MIN};
use rand::Rng;

use crate::config::AnalysisSettings;

/// Produces a diagnosis for a submitted session
#[trait_variant::make(DiagnosisEngine: Send)]
pub trait LocalDiagnosisEngine {
    /// Diagnose the session. Safe to call repeatedly for the same record.
    async fn diagnose(&self, record: &SessionRecord) -> Result<DiagnosisResult>;
}

/// Randomized stand-in for a real classifier
#[derive(Debug, Clone)]
pub struct SimulatedDiagnosis {
    delay: Duration,
    healthy_threshold: f64,
}

impl SimulatedDiagnosis {
    pub fn new(delay: Duration, healthy_threshold: f64) -> Self {
        Self {
            delay,
            healthy_threshold: healthy_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self::new(settings.delay(), settings.healthy_threshold)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Draw a verdict and a confidence score from `rng`
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> DiagnosisResult {
        let is_healthy = rng.gen::<f64>() > self.healthy_threshold;
        let confidence = rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX);
        DiagnosisResult::new(is_healthy, confidence)
    }
}

impl Default for SimulatedDiagnosis {
    fn default() -> Self {
        Self::from_settings(&AnalysisSettings::default())
    }
}

impl DiagnosisEngine for SimulatedDiagnosis {
    async fn diagnose(&self, record: &SessionRecord) -> Result<DiagnosisResult> {
        debug!(
            "Simulating diagnosis for crop '{}' ({:?} delay)",
            record.crop, self.delay
        );
        tokio::time::sleep(self.delay).await;

        let result = self.draw(&mut rand::thread_rng());
        info!(
            "Diagnosis resolved: healthy={} confidence={}",
            result.is_healthy, result.confidence
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drcrop_core::{Crop, Language, Verdict};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record() -> SessionRecord {
        SessionRecord::new(Some(Crop::Tomato), Some("data:x".into()), Language::En)
    }

    #[test]
    fn test_draw_confidence_always_in_range() {
        let sim = SimulatedDiagnosis::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let result = sim.draw(&mut rng);
            assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&result.confidence));
        }
    }

    #[test]
    fn test_draw_produces_both_verdicts() {
        let sim = SimulatedDiagnosis::default();
        let mut rng = StdRng::seed_from_u64(42);
        let healthy = (0..1_000)
            .filter(|_| sim.draw(&mut rng).verdict() == Verdict::Healthy)
            .count();

        // ~60% healthy with the default threshold
        assert!((450..=750).contains(&healthy), "healthy = {}", healthy);
    }

    #[test]
    fn test_threshold_extremes() {
        let mut rng = StdRng::seed_from_u64(1);

        let never = SimulatedDiagnosis::new(Duration::ZERO, 1.0);
        assert!((0..200).all(|_| !never.draw(&mut rng).is_healthy));

        let always = SimulatedDiagnosis::new(Duration::ZERO, -3.0);
        assert!((0..200).all(|_| always.draw(&mut rng).is_healthy));
    }

    #[test]
    fn test_same_seed_same_result() {
        let sim = SimulatedDiagnosis::default();
        let a = sim.draw(&mut StdRng::seed_from_u64(99));
        let b = sim.draw(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_diagnose_resolves_after_delay() {
        let sim = SimulatedDiagnosis::new(Duration::from_millis(3000), 0.4);
        let start = tokio::time::Instant::now();

        let result = DiagnosisEngine::diagnose(&sim, &record()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&result.confidence));
    }

    #[tokio::test(start_paused = true)]
    async fn test_diagnose_is_repeatable() {
        let sim = SimulatedDiagnosis::new(Duration::from_millis(10), 0.4);
        let rec = record();
        assert!(DiagnosisEngine::diagnose(&sim, &rec).await.is_ok());
        assert!(DiagnosisEngine::diagnose(&sim, &rec).await.is_ok());
    }
}
