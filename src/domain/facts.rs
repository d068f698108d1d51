// src/domain/facts.rs

use crate::domain::brief::{format_baths, format_usd, group_thousands, BriefKV, Confidence, Conflict};
use crate::domain::listing::Listing;

const LIVING_AREA_CONTEXT: &str = "Nearby homes typically run 1,200 to 2,400 sqft";

/// Quick facts in display order. The living-area fact is the only one
/// whose confidence depends on the listing; the rest are fixed policy
/// until better data sources exist. Every fact ships with at least one
/// `why` entry, whatever its confidence.
pub fn annotate_quick_facts(
    listing: &Listing,
    living_area_conflict: Option<&Conflict>,
) -> Vec<BriefKV> {
    let mut facts = Vec::with_capacity(5);

    facts.push(BriefKV {
        label: "Price".to_string(),
        value: format_usd(listing.price),
        confidence: Confidence::High,
        why: vec!["Matches the current listing price".to_string()],
        context: None,
    });

    facts.push(BriefKV {
        label: "Beds / Baths".to_string(),
        value: format!("{} bd / {} ba", listing.beds, format_baths(listing.baths)),
        confidence: Confidence::High,
        why: vec!["Listing and public record typically agree on room counts".to_string()],
        context: None,
    });

    let (confidence, why) = match living_area_conflict {
        Some(_) => (
            Confidence::Medium,
            vec![
                "Listing and public record report different figures".to_string(),
                "Larger homes see more measurement variance between sources".to_string(),
            ],
        ),
        None => (
            Confidence::High,
            vec!["Listing and public record agree within normal measurement variance".to_string()],
        ),
    };
    facts.push(BriefKV {
        label: "Living area".to_string(),
        value: format!("{} sqft", group_thousands(listing.sqft)),
        confidence,
        why,
        context: Some(LIVING_AREA_CONTEXT.to_string()),
    });

    facts.push(BriefKV {
        label: "Home type".to_string(),
        value: "Single-family (assumed)".to_string(),
        confidence: Confidence::Low,
        why: vec!["No authoritative property-type feed wired up yet".to_string()],
        context: None,
    });

    facts.push(BriefKV {
        label: "HOA".to_string(),
        value: "None reported".to_string(),
        confidence: Confidence::Low,
        why: vec!["No HOA data source wired up yet".to_string()],
        context: None,
    });

    facts
}
