// src/domain/conflicts.rs

use crate::config::ConflictPolicy;
use crate::domain::brief::{Confidence, Conflict};
use crate::domain::listing::Listing;

pub const RISK_LIVING_AREA: &str = "Living area differs between listing and public record";
pub const RISK_ROOF_HVAC: &str = "Roof & HVAC age unverified";
pub const RISK_INSURANCE: &str = "Insurance costs may vary depending on hazard zone";

const LIVING_AREA_NOTE: &str =
    "Public-record square footage often lags remodels and additions; verify before leaning on price per sqft.";

/// Larger homes get measured with more method variance, so at the policy
/// threshold we surface a synthetic public-record figure alongside the
/// listing's own. Deterministic in `sqft`; no lookups, no randomness.
pub fn detect_living_area_conflict(listing: &Listing, policy: &ConflictPolicy) -> Option<Conflict> {
    if listing.sqft < policy.living_area_threshold_sqft {
        return None;
    }

    let public_record = (listing.sqft - policy.public_record_variance_sqft).max(0);

    Some(Conflict {
        field: "Living area".to_string(),
        values: vec![
            format!("{} sqft (listing)", listing.sqft),
            format!("{} sqft (public record)", public_record),
        ],
        note: LIVING_AREA_NOTE.to_string(),
    })
}

/// The conflict-derived risk always leads the list when present.
pub fn derive_risks(has_conflict: bool) -> Vec<String> {
    let mut risks = Vec::new();
    if has_conflict {
        risks.push(RISK_LIVING_AREA.to_string());
    }
    risks.push(RISK_ROOF_HVAC.to_string());
    risks.push(RISK_INSURANCE.to_string());
    risks
}

/// Both branches land on Medium under the current policy, but the
/// explanation must say which situation produced the label.
pub fn overall_confidence(has_conflict: bool) -> (Confidence, String) {
    if has_conflict {
        (
            Confidence::Medium,
            "Sources disagree on living area, so treat size-sensitive numbers as estimates until verified."
                .to_string(),
        )
    } else {
        (
            Confidence::Medium,
            "Core facts agree across sources; home type and HOA details are still placeholders pending a real data feed."
                .to_string(),
        )
    }
}
