use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_serializes_email_and_password() {
    let req = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "pw" })
    );
}

#[test]
fn register_request_uses_camel_case_names() {
    let req = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "email": "a@b.com",
            "password": "pw",
            "firstName": "Ada",
            "lastName": "Lovelace",
        })
    );
}

#[test]
fn register_request_omits_absent_names() {
    let req = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        first_name: None,
        last_name: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("firstName").is_none());
    assert!(json.get("lastName").is_none());
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn auth_response_parses_camel_case_body() {
    let body = r#"{"token":"t.k.n","userId":42,"email":"a@b.com","extra":true}"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.token, "t.k.n");
    assert_eq!(resp.user(), User { id: 42, email: "a@b.com".to_owned() });
}

#[test]
fn auth_response_without_token_is_rejected() {
    let body = r#"{"userId":42,"email":"a@b.com"}"#;
    assert!(serde_json::from_str::<AuthResponse>(body).is_err());
}
