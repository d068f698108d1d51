// src/auth.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: Option<User>,
}

/// Seam for credential checks, so the serving path never hardcodes an
/// auth decision.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Stub verifier: always succeeds. Dev and demo environments only.
pub struct AllowAll;

impl CredentialVerifier for AllowAll {
    fn verify(&self, _username: &str, _password: &str) -> bool {
        true
    }
}

/// Fixed username/password table. Stands in for a real identity provider
/// and gives tests a rejection path to exercise.
pub struct StaticCredentials {
    entries: Vec<(String, String)>,
}

impl StaticCredentials {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.entries
            .iter()
            .any(|(u, p)| u == username && p == password)
    }
}

pub fn login(verifier: &dyn CredentialVerifier, payload: &LoginRequest) -> LoginResponse {
    if verifier.verify(&payload.username, &payload.password) {
        LoginResponse {
            ok: true,
            user: Some(User {
                id: format!("user:{}", payload.username),
                username: payload.username.clone(),
            }),
        }
    } else {
        LoginResponse { ok: false, user: None }
    }
}
