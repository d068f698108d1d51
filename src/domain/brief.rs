// src/domain/brief.rs

use crate::config::CostAssumptions;
use serde::Serialize;

/// Qualitative reliability label. Ordered high > medium > low for humans
/// reading it, but never summed, averaged, or compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One labeled, confidence-tagged data point shown to an end user.
/// `why` is never empty; every claim must be explainable.
#[derive(Debug, Clone, Serialize)]
pub struct BriefKV {
    pub label: String,
    pub value: String,
    pub confidence: Confidence,
    pub why: Vec<String>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoneyLine {
    pub label: String,
    pub monthly: i64,
}

/// A monthly cost presented as a band to avoid false precision.
#[derive(Debug, Clone, Serialize)]
pub struct MoneyRangeLine {
    pub label: String,
    pub low: i64,
    pub high: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoneyRange {
    pub low: i64,
    pub high: i64,
}

/// A detected disagreement between data sources for one field.
/// `values` always carries at least two competing renderings.
#[derive(Debug, Clone, Serialize)]
pub struct Conflict {
    pub field: String,
    pub values: Vec<String>,
    pub note: String,
}

/// Recommended due-diligence step. Never a bare checklist entry; the
/// `why` says what is at stake.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyItem {
    pub item: String,
    pub why: String,
}

/// Named origin of data with a last-updated date and a reliability label.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRef {
    pub name: String,
    pub last_updated: String,
    pub reliability: Confidence,
}

/// The synthesized, confidence-annotated summary of one listing.
/// Constructed fresh per request, never mutated, never cached. Field and
/// list order here is the wire order and must not be reshuffled.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyBrief {
    pub property_id: String,
    pub title: String,
    pub summary: String,
    pub what_this_means: String,

    pub overall_confidence: Confidence,
    pub overall_confidence_why: String,

    pub quick_facts: Vec<BriefKV>,

    pub estimated_monthly_total_range: MoneyRange,
    pub estimated_monthly_fixed: Vec<MoneyLine>,
    pub estimated_monthly_variable: Vec<MoneyRangeLine>,
    /// Flattened view: one number per line, variable lines collapsed to
    /// their midpoint. Kept for display modes that can't show ranges.
    pub estimated_monthly_costs: Vec<MoneyLine>,
    pub assumptions: CostAssumptions,
    pub highlights: Vec<String>,

    pub risks: Vec<String>,
    pub watchouts: Vec<VerifyItem>,
    pub conflicts: Vec<Conflict>,
    pub sources: Vec<SourceRef>,
}

/// "1,234,567" style digit grouping.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

pub fn format_usd(amount: i64) -> String {
    format!("${}", group_thousands(amount))
}

/// "2" for whole counts, "2.5" for half baths.
pub fn format_baths(baths: f64) -> String {
    if baths.fract() == 0.0 {
        format!("{baths:.0}")
    } else {
        format!("{baths}")
    }
}
