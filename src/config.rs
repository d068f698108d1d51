// src/config.rs

use crate::errors::ServerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Financing assumptions baked into every cost estimate. Serialized into
/// the brief itself so clients can show their work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostAssumptions {
    pub down_payment_percent: f64,
    pub interest_rate_percent: f64,
    pub loan_term_years: u32,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            down_payment_percent: 20.0,
            interest_rate_percent: 6.75,
            loan_term_years: 30,
        }
    }
}

/// A monthly dollar band. Invariant: low <= high.
#[derive(Debug, Clone, Deserialize)]
pub struct Band {
    pub low: i64,
    pub high: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CostPolicy {
    pub assumptions: CostAssumptions,

    /// Annual property tax as a fraction of price (0.012 = 1.2%).
    pub annual_tax_rate: f64,

    /// No HOA feed wired up yet, so this stays at 0.
    pub monthly_hoa: i64,

    // Insurance and utilities are presented as flat bands rather than
    // price-derived numbers; without real comparables data a band
    // overclaims less than a single figure would.
    pub insurance_monthly: Band,
    pub utilities_monthly: Band,
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self {
            assumptions: CostAssumptions::default(),
            annual_tax_rate: 0.012,
            monthly_hoa: 0,
            insurance_monthly: Band { low: 140, high: 320 },
            utilities_monthly: Band { low: 180, high: 360 },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConflictPolicy {
    /// Listings at or above this size get a synthetic public-record
    /// disagreement; larger areas are measured with more method variance.
    pub living_area_threshold_sqft: i64,

    /// How far below the listing figure the public-record figure lands.
    pub public_record_variance_sqft: i64,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self {
            living_area_threshold_sqft: 1600,
            public_record_variance_sqft: 80,
        }
    }
}

/// Every numeric knob of the brief engine in one injectable bundle.
/// Defaults match production policy; a TOML file can override any subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BriefPolicy {
    pub cost: CostPolicy,
    pub conflict: ConflictPolicy,
}

impl BriefPolicy {
    /// Read policy overrides from a TOML file. A missing file is not an
    /// error; an unreadable or invalid one is.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();

        let policy = if path.exists() {
            let raw = fs::read_to_string(path).map_err(|e| {
                ServerError::ConfigError(format!("read {} failed: {e}", path.display()))
            })?;
            toml::from_str(&raw).map_err(|e| {
                ServerError::ConfigError(format!("parse {} failed: {e}", path.display()))
            })?
        } else {
            log::info!(
                "no policy file at {}, using built-in defaults",
                path.display()
            );
            Self::default()
        };

        policy.validate()?;
        Ok(policy)
    }

    /// Reject internally inconsistent policies up front so the engine
    /// never has to clamp anything mid-computation.
    pub fn validate(&self) -> Result<(), ServerError> {
        let a = &self.cost.assumptions;

        if !(0.0..=100.0).contains(&a.down_payment_percent) {
            return Err(ServerError::ConfigError(format!(
                "down_payment_percent must be within 0..=100, got {}",
                a.down_payment_percent
            )));
        }
        if !(0.0..=100.0).contains(&a.interest_rate_percent) {
            return Err(ServerError::ConfigError(format!(
                "interest_rate_percent must be within 0..=100, got {}",
                a.interest_rate_percent
            )));
        }
        if a.loan_term_years == 0 {
            return Err(ServerError::ConfigError(
                "loan_term_years must be at least 1".to_string(),
            ));
        }
        if self.cost.annual_tax_rate < 0.0 {
            return Err(ServerError::ConfigError(format!(
                "annual_tax_rate must not be negative, got {}",
                self.cost.annual_tax_rate
            )));
        }
        if self.cost.monthly_hoa < 0 {
            return Err(ServerError::ConfigError(format!(
                "monthly_hoa must not be negative, got {}",
                self.cost.monthly_hoa
            )));
        }

        for (name, band) in [
            ("insurance_monthly", &self.cost.insurance_monthly),
            ("utilities_monthly", &self.cost.utilities_monthly),
        ] {
            if band.low < 0 || band.low > band.high {
                return Err(ServerError::ConfigError(format!(
                    "{name} band must satisfy 0 <= low <= high, got {}..{}",
                    band.low, band.high
                )));
            }
        }

        if self.conflict.living_area_threshold_sqft <= 0 {
            return Err(ServerError::ConfigError(format!(
                "living_area_threshold_sqft must be positive, got {}",
                self.conflict.living_area_threshold_sqft
            )));
        }
        if self.conflict.public_record_variance_sqft < 0 {
            return Err(ServerError::ConfigError(format!(
                "public_record_variance_sqft must not be negative, got {}",
                self.conflict.public_record_variance_sqft
            )));
        }

        Ok(())
    }
}
