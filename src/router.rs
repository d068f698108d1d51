use crate::auth::{self, CredentialVerifier, LoginRequest};
use crate::catalog::Catalog;
use crate::config::BriefPolicy;
use crate::domain::synthesize_brief;
use crate::errors::{ResultResp, ServerError};
use crate::responses::json_response;
use astra::Request;

/// Shared per-process state handed to every request. Everything in here
/// is read-only once the server starts, so requests need no coordination.
pub struct App {
    pub catalog: Catalog,
    pub policy: BriefPolicy,
    pub verifier: Box<dyn CredentialVerifier + Send + Sync>,
}

impl App {
    pub fn new(
        catalog: Catalog,
        policy: BriefPolicy,
        verifier: Box<dyn CredentialVerifier + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            policy,
            verifier,
        }
    }
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => json_response(200, &serde_json::json!({ "message": "Welcome" })),
        ("GET", ["health"]) => json_response(200, &serde_json::json!({ "status": "ok" })),

        ("POST", ["auth", "login"]) => {
            let payload: LoginRequest = serde_json::from_reader(req.body_mut().reader())
                .map_err(|e| ServerError::BadRequest(format!("invalid login payload: {e}")))?;
            json_response(200, &auth::login(app.verifier.as_ref(), &payload))
        }

        ("GET", ["properties"]) => json_response(200, &app.catalog.all()),

        ("GET", ["properties", id]) => {
            let listing = app.catalog.find_listing(id).ok_or_else(property_not_found)?;
            json_response(200, listing)
        }

        // Synthesized fresh on every request; nothing is cached.
        ("GET", ["properties", id, "brief"]) => {
            let listing = app.catalog.find_listing(id).ok_or_else(property_not_found)?;
            let brief = synthesize_brief(listing, &app.policy)?;
            json_response(200, &brief)
        }

        _ => Err(ServerError::NotFound("Not Found".to_string())),
    }
}

fn property_not_found() -> ServerError {
    ServerError::NotFound("Property not found".to_string())
}
