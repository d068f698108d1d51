use serde::Serialize;

/// A catalog listing as served to clients. The catalog owns these; the
/// brief engine only ever borrows one.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: String,

    /// Whole currency units, always positive.
    pub price: i64,

    pub beds: i64,
    pub baths: f64,
    pub sqft: i64,

    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,

    /// Absent means no illustrative image is available.
    pub image_url: Option<String>,
}
