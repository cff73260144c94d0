//! Campaign cost estimation.

use serde::{Deserialize, Serialize};
use sms_model::CampaignEstimate;
use tracing::debug;

/// Price charged per SMS segment.
pub const DEFAULT_COST_PER_SEGMENT: f64 = 0.05;

/// Currency the per-segment price is quoted in.
pub const DEFAULT_CURRENCY: &str = "AUD";

/// Per-segment pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub cost_per_segment: f64,
    pub currency: String,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            cost_per_segment: DEFAULT_COST_PER_SEGMENT,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Pricing {
    pub fn is_valid(&self) -> bool {
        self.cost_per_segment.is_finite() && self.cost_per_segment >= 0.0
    }
}

/// Reasons a campaign cannot be sent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CampaignError {
    #[error("nothing to send: the campaign has no segments to deliver")]
    NothingToSend,
    #[error("account balance {balance} is not a finite number")]
    InvalidBalance { balance: f64 },
    #[error("insufficient balance: {required} SMS credits needed, {available} available")]
    InsufficientBalance { required: u64, available: f64 },
}

/// Derive totals and the post-send balance for a campaign.
pub fn estimate_campaign(
    segment_count: u32,
    contact_count: u64,
    cost_per_segment: f64,
    current_balance: f64,
) -> CampaignEstimate {
    let total_segments = u64::from(segment_count).saturating_mul(contact_count);
    let total_cost = round_cents(total_segments as f64 * cost_per_segment);
    let remaining_balance = current_balance - total_segments as f64;
    debug!(
        segment_count,
        contact_count, total_segments, total_cost, remaining_balance, "campaign estimated"
    );
    CampaignEstimate {
        segment_count,
        contact_count,
        total_segments,
        cost_per_segment,
        total_cost,
        current_balance,
        remaining_balance,
    }
}

/// Round to 2 decimal places, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Send guard for an estimate.
pub trait EstimateCheck {
    /// Ok when there is something to send and the balance covers it.
    fn check(&self) -> Result<(), CampaignError>;
}

impl EstimateCheck for CampaignEstimate {
    fn check(&self) -> Result<(), CampaignError> {
        if self.total_segments < 1 {
            return Err(CampaignError::NothingToSend);
        }
        if !self.current_balance.is_finite() {
            return Err(CampaignError::InvalidBalance {
                balance: self.current_balance,
            });
        }
        if self.remaining_balance.is_nan() || self.remaining_balance < 0.0 {
            return Err(CampaignError::InsufficientBalance {
                required: self.total_segments,
                available: self.current_balance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(10.000_000_000_000_002), 10.0);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn default_pricing_is_valid() {
        let pricing = Pricing::default();
        assert!(pricing.is_valid());
        assert_eq!(pricing.cost_per_segment, 0.05);
        assert!(
            !Pricing {
                cost_per_segment: -1.0,
                ..Pricing::default()
            }
            .is_valid()
        );
    }
}
