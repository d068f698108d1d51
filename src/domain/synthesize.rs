// src/domain/synthesize.rs

use crate::config::BriefPolicy;
use crate::domain::brief::{
    format_baths, format_usd, group_thousands, Confidence, PropertyBrief, SourceRef, VerifyItem,
};
use crate::domain::conflicts::{derive_risks, detect_living_area_conflict, overall_confidence};
use crate::domain::costs::estimate_monthly_costs;
use crate::domain::facts::annotate_quick_facts;
use crate::domain::listing::Listing;
use crate::errors::ServerError;

/// Build a fresh brief for one listing. Pure: the same listing and policy
/// always produce the same brief, down to the byte once serialized.
pub fn synthesize_brief(
    listing: &Listing,
    policy: &BriefPolicy,
) -> Result<PropertyBrief, ServerError> {
    // The annotator and the risk/verdict derivation both key off this.
    let conflict = detect_living_area_conflict(listing, &policy.conflict);

    let costs = estimate_monthly_costs(listing.price, &policy.cost)?;
    let quick_facts = annotate_quick_facts(listing, conflict.as_ref());

    let risks = derive_risks(conflict.is_some());
    let (confidence, confidence_why) = overall_confidence(conflict.is_some());

    let mid = (costs.total.low + costs.total.high) / 2;
    let what_this_means = format!(
        "For a {} bed, {} bath home at this price, plan on roughly {} per month all-in, \
         with a realistic band of {} to {} under the stated financing assumptions.",
        listing.beds,
        format_baths(listing.baths),
        format_usd(mid),
        format_usd(costs.total.low),
        format_usd(costs.total.high),
    );

    let title = format!(
        "{}, {}, {} {}",
        listing.address, listing.city, listing.state, listing.zip
    );
    let summary = format!(
        "{} bd / {} ba, {} sqft in {}, {}. Listed at {}.",
        listing.beds,
        format_baths(listing.baths),
        group_thousands(listing.sqft),
        listing.city,
        listing.state,
        format_usd(listing.price),
    );

    Ok(PropertyBrief {
        property_id: listing.id.clone(),
        title,
        summary,
        what_this_means,
        overall_confidence: confidence,
        overall_confidence_why: confidence_why,
        quick_facts,
        estimated_monthly_total_range: costs.total,
        estimated_monthly_fixed: costs.fixed,
        estimated_monthly_variable: costs.variable,
        estimated_monthly_costs: costs.combined,
        assumptions: policy.cost.assumptions.clone(),
        highlights: build_highlights(listing),
        risks,
        watchouts: build_watchouts(),
        conflicts: conflict.into_iter().collect(),
        sources: provenance_sources(),
    })
}

fn build_highlights(listing: &Listing) -> Vec<String> {
    vec![
        format!(
            "{} bedrooms and {} bathrooms give the layout room to flex",
            listing.beds,
            format_baths(listing.baths)
        ),
        "Priced in line with recent activity in the zip".to_string(),
        "Established neighborhood with steady resale history".to_string(),
    ]
}

fn build_watchouts() -> Vec<VerifyItem> {
    vec![
        VerifyItem {
            item: "Verify living area with the county assessor".to_string(),
            why: "Square footage drives price per sqft and appraisal value".to_string(),
        },
        VerifyItem {
            item: "Ask for utility bills from the last 12 months".to_string(),
            why: "Actual utility costs swing widely with usage and insulation".to_string(),
        },
        VerifyItem {
            item: "Confirm HOA status and any dues in writing".to_string(),
            why: "Unreported dues change the monthly math".to_string(),
        },
        VerifyItem {
            item: "Get an insurance quote before waiving contingencies".to_string(),
            why: "Hazard-zone pricing can land above the estimated band".to_string(),
        },
    ]
}

/// Placeholder provenance until real source ingestion exists. Dates are
/// deliberate literals; a clock here would break brief reproducibility.
fn provenance_sources() -> Vec<SourceRef> {
    vec![
        SourceRef {
            name: "MLS listing feed".to_string(),
            last_updated: "2025-07-28".to_string(),
            reliability: Confidence::High,
        },
        SourceRef {
            name: "County public records".to_string(),
            last_updated: "2025-06-30".to_string(),
            reliability: Confidence::Medium,
        },
        SourceRef {
            name: "Neighborhood comps model".to_string(),
            last_updated: "2025-05-15".to_string(),
            reliability: Confidence::Low,
        },
    ]
}
