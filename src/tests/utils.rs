use crate::auth::AllowAll;
use crate::catalog::Catalog;
use crate::config::BriefPolicy;
use crate::domain::listing::Listing;
use crate::router::App;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// App wired exactly like production: seeded catalog, default policy,
/// allow-all login.
pub fn make_app() -> App {
    App::new(Catalog::seeded(), BriefPolicy::default(), Box::new(AllowAll))
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn post_json(path: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn read_body(resp: &mut Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read response body");
    bytes
}

/// A listing with the knobs the engine actually reads left adjustable.
pub fn sample_listing(price: i64, sqft: i64) -> Listing {
    Listing {
        id: "prop-test".to_string(),
        price,
        beds: 3,
        baths: 2.5,
        sqft,
        address: "1 Test Ave".to_string(),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip: "97200".to_string(),
        image_url: None,
    }
}
