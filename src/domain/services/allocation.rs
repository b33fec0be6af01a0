//! Weighted-tier free share allocation.
//!
//! New users receive one free share whose value is drawn from three tiers.
//! With the default policy 95% of rewards fall in the cheapest tier
//! (3-10), 2% in the middle tier (10-25) and the remaining mass in the
//! most expensive tier (25-200), which keeps the cost per acquired
//! customer under control.

use crate::domain::entities::ShareLot;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// No lot in the firm account fell inside the drawn tier.
///
/// A legitimate "try later" outcome, not a bug; the engine never silently
/// falls back to another tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("there are no available free shares right now, try claiming yours later")]
pub struct NoEligibleShare;

/// The four value thresholds were not in non-decreasing order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "share value thresholds don't match this condition: \
     {min} <= {mid_low} <= {mid_high} <= {max}"
)]
pub struct InvalidThresholds {
    pub min: Decimal,
    pub mid_low: Decimal,
    pub mid_high: Decimal,
    pub max: Decimal,
}

/// Weighted-tier policy: four ascending value thresholds and the
/// probability mass of the cheapest and most expensive tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AllocationPolicy {
    #[serde(default = "default_min_share_value")]
    pub min_share_value: Decimal,
    #[serde(default = "default_mid_low_share_value")]
    pub mid_low_share_value: Decimal,
    #[serde(default = "default_mid_high_share_value")]
    pub mid_high_share_value: Decimal,
    #[serde(default = "default_max_share_value")]
    pub max_share_value: Decimal,
    #[serde(default = "default_cheapest_percentage")]
    pub cheapest_percentage: f64,
    #[serde(default = "default_most_expensive_percentage")]
    pub most_expensive_percentage: f64,
}

fn default_min_share_value() -> Decimal {
    dec!(3)
}
fn default_mid_low_share_value() -> Decimal {
    dec!(10)
}
fn default_mid_high_share_value() -> Decimal {
    dec!(25)
}
fn default_max_share_value() -> Decimal {
    dec!(200)
}
fn default_cheapest_percentage() -> f64 {
    0.95
}
fn default_most_expensive_percentage() -> f64 {
    0.02
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        AllocationPolicy {
            min_share_value: default_min_share_value(),
            mid_low_share_value: default_mid_low_share_value(),
            mid_high_share_value: default_mid_high_share_value(),
            max_share_value: default_max_share_value(),
            cheapest_percentage: default_cheapest_percentage(),
            most_expensive_percentage: default_most_expensive_percentage(),
        }
    }
}

impl AllocationPolicy {
    /// Thresholds must be non-decreasing. Checked once at startup; a
    /// violation is a configuration error, not a runtime error.
    pub fn validate(&self) -> Result<(), InvalidThresholds> {
        let ordered = self.min_share_value <= self.mid_low_share_value
            && self.mid_low_share_value <= self.mid_high_share_value
            && self.mid_high_share_value <= self.max_share_value;
        if ordered {
            Ok(())
        } else {
            Err(InvalidThresholds {
                min: self.min_share_value,
                mid_low: self.mid_low_share_value,
                mid_high: self.mid_high_share_value,
                max: self.max_share_value,
            })
        }
    }

    /// Map a uniform draw in `[0, 1)` onto an inclusive value range.
    pub fn select_tier(&self, random_value: f64) -> (Decimal, Decimal) {
        if random_value <= self.cheapest_percentage {
            (self.min_share_value, self.mid_low_share_value)
        } else if random_value <= self.cheapest_percentage + self.most_expensive_percentage {
            (self.mid_low_share_value, self.mid_high_share_value)
        } else {
            (self.mid_high_share_value, self.max_share_value)
        }
    }

    /// Pick the cheapest lot whose price falls inside the drawn tier.
    ///
    /// The returned lot always has quantity 1 regardless of the source
    /// lot's quantity.
    pub fn pick_free_share(
        &self,
        lots: &[ShareLot],
        random_value: f64,
    ) -> Result<ShareLot, NoEligibleShare> {
        let mut sorted: Vec<&ShareLot> = lots.iter().collect();
        sorted.sort_by(|a, b| a.share_price.cmp(&b.share_price));

        let (low, high) = self.select_tier(random_value);
        sorted
            .iter()
            .find(|lot| low <= lot.share_price && lot.share_price <= high)
            .map(|lot| ShareLot {
                quantity: 1,
                ..(**lot).clone()
            })
            .ok_or(NoEligibleShare)
    }
}
