// src/tests/router_tests/auth_tests.rs

use crate::auth::{login, CredentialVerifier, LoginRequest, StaticCredentials};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{make_app, post_json, read_body};
use serde_json::Value;

#[test]
fn stub_login_always_succeeds() {
    let app = make_app();

    let req = post_json(
        "/auth/login",
        r#"{"username": "dana", "password": "anything"}"#,
    );
    let mut resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 200);

    let v: Value = serde_json::from_slice(&read_body(&mut resp)).unwrap();
    assert_eq!(v["ok"], true);
    assert_eq!(v["user"]["id"], "user:dana");
    assert_eq!(v["user"]["username"], "dana");
}

#[test]
fn malformed_login_body_is_a_400() {
    let app = make_app();

    let err = handle(post_json("/auth/login", "not json at all"), &app).unwrap_err();
    assert_eq!(error_to_response(err).status(), 400);
}

#[test]
fn static_credentials_verify_the_table_only() {
    let verifier = StaticCredentials::new(vec![("dana".to_string(), "s3cret".to_string())]);

    assert!(verifier.verify("dana", "s3cret"));
    assert!(!verifier.verify("dana", "wrong"));
    assert!(!verifier.verify("sam", "s3cret"));
}

#[test]
fn rejected_logins_carry_no_user() {
    let verifier = StaticCredentials::new(vec![("dana".to_string(), "s3cret".to_string())]);

    let ok = login(
        &verifier,
        &LoginRequest {
            username: "dana".to_string(),
            password: "s3cret".to_string(),
        },
    );
    assert!(ok.ok);
    assert_eq!(ok.user.as_ref().unwrap().id, "user:dana");

    let rejected = login(
        &verifier,
        &LoginRequest {
            username: "dana".to_string(),
            password: "nope".to_string(),
        },
    );
    assert!(!rejected.ok);
    assert!(rejected.user.is_none());
}
