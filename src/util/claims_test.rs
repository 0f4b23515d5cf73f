use super::*;
use base64::Engine as _;
use crate::test_support::{NOW, segment, token_for, token_with_payload};

// =============================================================
// decode: well-formed credentials
// =============================================================

#[test]
fn decode_reads_subject_user_id_and_expiry() {
    let claims = decode(&token_for("a@b.com", 7, NOW + 3600)).unwrap();
    assert_eq!(claims, Claims { sub: "a@b.com".to_owned(), user_id: 7, exp: NOW + 3600 });
}

#[test]
fn decode_ignores_unknown_claims() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "a@b.com",
        "user_id": 7,
        "exp": NOW,
        "iat": NOW - 60,
        "roles": ["admin"],
    }));
    assert_eq!(decode(&token).unwrap().user_id, 7);
}

#[test]
fn decode_accepts_camel_case_user_id() {
    let token = token_with_payload(&serde_json::json!({ "sub": "a@b.com", "userId": 9, "exp": NOW }));
    assert_eq!(decode(&token).unwrap().user_id, 9);
}

#[test]
fn decode_accepts_both_user_id_spellings_preferring_snake_case() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "a@b.com",
        "user_id": 7,
        "userId": 8,
        "exp": NOW,
    }));
    assert_eq!(decode(&token).unwrap().user_id, 7);
}

#[test]
fn decode_falls_back_to_camel_case_when_snake_case_is_null() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "a@b.com",
        "user_id": null,
        "userId": 8,
        "exp": NOW,
    }));
    assert_eq!(decode(&token).unwrap().user_id, 8);
}

#[test]
fn decode_accepts_standard_alphabet_payload() {
    // "?>" and "?~" push `/` and `+` into the standard encoding.
    let payload = serde_json::json!({ "sub": "?>?~@b.com", "user_id": 1, "exp": NOW }).to_string();
    let standard = base64::engine::general_purpose::STANDARD.encode(payload.as_bytes());
    assert!(standard.contains('/') || standard.contains('+'));
    let token = format!("h.{standard}.s");
    assert_eq!(decode(&token).unwrap().sub, "?>?~@b.com");
}

#[test]
fn decode_accepts_padded_payload() {
    let payload = serde_json::json!({ "sub": "ab@c.io", "user_id": 1, "exp": NOW }).to_string();
    let padded = base64::engine::general_purpose::URL_SAFE.encode(payload.as_bytes());
    let token = format!("h.{padded}.s");
    assert_eq!(decode(&token).unwrap().sub, "ab@c.io");
}

#[test]
fn decode_does_not_require_signature_segment() {
    let payload = serde_json::json!({ "sub": "a@b.com", "user_id": 7, "exp": NOW });
    let token = format!("header.{}", segment(payload.to_string().as_bytes()));
    assert!(decode(&token).is_ok());
}

// =============================================================
// decode: malformed credentials
// =============================================================

fn assert_malformed(input: &str) {
    match decode(input) {
        Err(CredentialError::Malformed(_)) => {}
        other => panic!("expected Malformed for {input:?}, got {other:?}"),
    }
}

#[test]
fn decode_rejects_inputs_without_payload_segment() {
    assert_malformed("");
    assert_malformed("not-a-token");
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert_malformed("header.@@@!!.sig");
    assert_malformed("a.b c.d");
}

#[test]
fn decode_rejects_non_json_payload() {
    let token = format!("h.{}.s", segment(b"hello world"));
    assert_malformed(&token);
}

#[test]
fn decode_rejects_missing_fields() {
    assert_malformed(&token_with_payload(&serde_json::json!({ "user_id": 7, "exp": NOW })));
    assert_malformed(&token_with_payload(&serde_json::json!({ "sub": "a@b.com", "exp": NOW })));
    assert_malformed(&token_with_payload(&serde_json::json!({ "sub": "a@b.com", "user_id": 7 })));
}

#[test]
fn decode_rejects_wrongly_typed_fields() {
    assert_malformed(&token_with_payload(&serde_json::json!({ "sub": 5, "user_id": 7, "exp": NOW })));
    assert_malformed(&token_with_payload(&serde_json::json!({ "sub": "a@b.com", "user_id": "7", "exp": NOW })));
    assert_malformed(&token_with_payload(&serde_json::json!({ "sub": "a@b.com", "user_id": 7, "exp": -1 })));
}

#[test]
fn decode_rejects_empty_subject() {
    assert_malformed(&token_for("  ", 7, NOW));
}

#[test]
fn decode_rejects_non_object_payload() {
    assert_malformed(&token_with_payload(&serde_json::json!([1, 2, 3])));
    assert_malformed(&token_with_payload(&serde_json::json!(null)));
}

#[test]
fn decode_is_total_over_arbitrary_strings() {
    let inputs = [
        ".",
        "..",
        "...",
        "a.",
        ".a",
        "\u{0}.\u{0}.\u{0}",
        "ünïcödé.ünïcödé.ünïcödé",
        "eyJ.eyJ.eyJ",
        "Bearer abc.def.ghi",
    ];
    for input in inputs {
        assert!(decode(input).is_err(), "expected error for {input:?}");
    }
}

// =============================================================
// expiry
// =============================================================

#[test]
fn claims_expiring_now_are_expired() {
    let claims = decode(&token_for("a@b.com", 7, NOW)).unwrap();
    assert!(claims.is_expired_at(NOW));
    assert_eq!(claims.into_user(NOW), Err(CredentialError::Expired { exp: NOW, now: NOW }));
}

#[test]
fn claims_expiring_next_second_yield_user() {
    let claims = decode(&token_for("a@b.com", 7, NOW + 1)).unwrap();
    let user = claims.into_user(NOW).unwrap();
    assert_eq!(user, User { id: 7, email: "a@b.com".to_owned() });
}
