//! Carbon credit estimation with injectable randomness.
//!
//! Credit yields are estimates, not measurements: each crop's contribution
//! is `area * coefficient` scaled by a uniform factor in `[0.8, 1.2)`.
//! Listing prices are drawn uniformly from `[15.0, 25.0)` USD per credit.
//! Both draws go through [`RandomSource`] so tests can pin them.

use std::ops::Range;
use std::sync::Arc;

use rand::Rng;
use terracredit_core::{Crop, CropType};

/// Uniform factor applied to every per-crop estimate.
pub const ESTIMATE_FACTOR: Range<f64> = 0.8..1.2;

/// Range listing prices are drawn from, in USD per credit.
pub const PRICE_PER_CREDIT: Range<f64> = 15.0..25.0;

/// A source of uniform random draws.
///
/// Production code uses [`ThreadRngSource`]; tests use [`FixedSource`] to
/// make estimates exact.
pub trait RandomSource: Send + Sync {
    /// Sample uniformly from the half-open range `[start, end)`.
    fn sample(&self, range: Range<f64>) -> f64;
}

/// [`RandomSource`] backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn sample(&self, range: Range<f64>) -> f64 {
        rand::rng().random_range(range)
    }
}

/// Deterministic [`RandomSource`] that always samples at the same relative
/// position within the requested range.
///
/// `FixedSource::new(0.0)` returns every range's lower bound, making
/// `estimate` come out to exactly `area * coefficient * 0.8`.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    position: f64,
}

impl FixedSource {
    /// Create a source sampling at `position` within `[0, 1)`.
    ///
    /// Values outside `[0, 1)` are clamped so the draw stays inside the
    /// requested range.
    #[must_use]
    pub fn new(position: f64) -> Self {
        Self {
            position: position.clamp(0.0, 0.999_999),
        }
    }
}

impl RandomSource for FixedSource {
    fn sample(&self, range: Range<f64>) -> f64 {
        range.start + (range.end - range.start) * self.position
    }
}

/// Estimates carbon-credit yields and listing prices.
#[derive(Clone)]
pub struct CreditEstimator {
    rng: Arc<dyn RandomSource>,
}

impl CreditEstimator {
    /// Create an estimator drawing from the given source.
    #[must_use]
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Estimated credits for one crop: `area * coefficient * factor` with
    /// `factor` drawn from [`ESTIMATE_FACTOR`].
    ///
    /// Non-positive areas contribute zero. Never fails, never negative.
    #[must_use]
    pub fn estimate(&self, crop_type: CropType, area_hectares: f64) -> f64 {
        if area_hectares <= 0.0 {
            return 0.0;
        }
        area_hectares * crop_type.credits_per_hectare() * self.rng.sample(ESTIMATE_FACTOR)
    }

    /// Total estimated credits over a crop list.
    #[must_use]
    pub fn total_for(&self, crops: &[Crop]) -> f64 {
        crops
            .iter()
            .map(|crop| self.estimate(crop.crop_type, crop.area_hectares))
            .sum()
    }

    /// Draw a listing price from [`PRICE_PER_CREDIT`].
    #[must_use]
    pub fn draw_price_per_credit(&self) -> f64 {
        self.rng.sample(PRICE_PER_CREDIT)
    }
}

impl Default for CreditEstimator {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngSource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_within_factor_bounds() {
        let estimator = CreditEstimator::default();
        for _ in 0..100 {
            let credits = estimator.estimate(CropType::Corn, 30.0);
            assert!(credits >= 30.0 * 2.5 * 0.8);
            assert!(credits < 30.0 * 2.5 * 1.2);
        }
    }

    #[test]
    fn test_estimate_zero_for_non_positive_area() {
        let estimator = CreditEstimator::default();
        assert_eq!(estimator.estimate(CropType::Wheat, 0.0), 0.0);
        assert_eq!(estimator.estimate(CropType::Wheat, -4.0), 0.0);
    }

    #[test]
    fn test_fixed_source_is_exact() {
        let estimator = CreditEstimator::new(Arc::new(FixedSource::new(0.0)));
        assert_eq!(estimator.estimate(CropType::Corn, 30.0), 30.0 * 2.5 * 0.8);

        let mid = CreditEstimator::new(Arc::new(FixedSource::new(0.5)));
        assert_eq!(mid.estimate(CropType::Rice, 10.0), 10.0 * 2.0 * 1.0);
    }

    #[test]
    fn test_total_skips_non_positive_areas() {
        let estimator = CreditEstimator::new(Arc::new(FixedSource::new(0.0)));
        let crops = vec![
            Crop::new(CropType::Corn, 30.0),
            Crop::new(CropType::Wheat, -1.0),
        ];
        assert_eq!(estimator.total_for(&crops), 30.0 * 2.5 * 0.8);
    }

    #[test]
    fn test_price_within_bounds() {
        let estimator = CreditEstimator::default();
        for _ in 0..100 {
            let price = estimator.draw_price_per_credit();
            assert!((15.0..25.0).contains(&price));
        }
    }

    #[test]
    fn test_fixed_source_clamps_position() {
        let source = FixedSource::new(2.0);
        let draw = source.sample(0.0..1.0);
        assert!(draw < 1.0);
    }
}
