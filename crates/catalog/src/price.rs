//! Price observations: single timestamped price samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pricewatch_core::ValueObject;

/// One point-in-time price sample for a tracked product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Price in smallest currency unit (e.g., cents).
    pub amount_minor: i64,
    /// When the sample was taken.
    pub observed_at: DateTime<Utc>,
}

impl PriceObservation {
    pub fn new(amount_minor: i64, observed_at: DateTime<Utc>) -> Self {
        Self {
            amount_minor,
            observed_at,
        }
    }
}

impl ValueObject for PriceObservation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observations_compare_by_value() {
        let at = Utc::now();
        assert_eq!(PriceObservation::new(1299, at), PriceObservation::new(1299, at));
        assert_ne!(PriceObservation::new(1299, at), PriceObservation::new(1300, at));
    }
}
