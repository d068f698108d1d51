// src/catalog.rs

use crate::domain::listing::Listing;

/// In-memory listing catalog, seeded once at startup and read-only after.
/// Stands in for a real listings store until sourcing is wired up.
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn seeded() -> Self {
        Self::new(seed_listings())
    }

    /// Stable order: whatever the seed (or a future store) provides.
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn find_listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }
}

fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "prop-001".to_string(),
            price: 895_000,
            beds: 4,
            baths: 2.5,
            sqft: 1_680,
            address: "123 Maple St".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip: "97214".to_string(),
            image_url: Some("https://images.example.com/prop-001.jpg".to_string()),
        },
        Listing {
            id: "prop-002".to_string(),
            price: 445_000,
            beds: 2,
            baths: 1.0,
            sqft: 980,
            address: "98 Alder Ct".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip: "97202".to_string(),
            image_url: Some("https://images.example.com/prop-002.jpg".to_string()),
        },
        Listing {
            id: "prop-003".to_string(),
            price: 639_000,
            beds: 3,
            baths: 2.0,
            sqft: 1_540,
            address: "771 Juniper Way".to_string(),
            city: "Bend".to_string(),
            state: "OR".to_string(),
            zip: "97701".to_string(),
            image_url: None,
        },
        Listing {
            id: "prop-004".to_string(),
            price: 1_250_000,
            beds: 5,
            baths: 3.5,
            sqft: 2_880,
            address: "2450 Lakeview Dr".to_string(),
            city: "Lake Oswego".to_string(),
            state: "OR".to_string(),
            zip: "97034".to_string(),
            image_url: Some("https://images.example.com/prop-004.jpg".to_string()),
        },
    ]
}
