use super::*;

fn parse_effect(raw: &str) -> ApplyEffectResponse {
    serde_json::from_str(raw).unwrap()
}

fn parse_action(raw: &str) -> ActionResponse {
    serde_json::from_str(raw).unwrap()
}

// =============================================================
// ApplyEffectResponse
// =============================================================

#[test]
fn apply_effect_success_yields_image() {
    let resp = parse_effect(
        r#"{"status":"success","image":"data:image/jpeg;base64,AAAA","effect":"sepia"}"#,
    );
    assert_eq!(resp.into_image(), Ok("data:image/jpeg;base64,AAAA".to_owned()));
}

#[test]
fn apply_effect_error_status_is_rejected_with_message() {
    let resp = parse_effect(r#"{"status":"error","message":"Missing effect or image data"}"#);
    assert_eq!(
        resp.into_image(),
        Err(ApiError::Rejected("Missing effect or image data".to_owned()))
    );
}

#[test]
fn apply_effect_success_without_image_is_decode_error() {
    let resp = parse_effect(r#"{"status":"success"}"#);
    assert!(matches!(resp.into_image(), Err(ApiError::Decode(_))));
}

#[test]
fn apply_effect_missing_status_fails_to_parse() {
    assert!(serde_json::from_str::<ApplyEffectResponse>(r#"{"image":"x"}"#).is_err());
}

// =============================================================
// ActionResponse
// =============================================================

#[test]
fn action_success_passes_through() {
    let resp = parse_action(r#"{"success":true}"#);
    assert!(resp.into_result().is_ok());
}

#[test]
fn action_failure_is_rejected_with_error_text() {
    let resp = parse_action(r#"{"success":false,"error":"Invalid form data"}"#);
    assert_eq!(
        resp.into_result(),
        Err(ApiError::Rejected("Invalid form data".to_owned()))
    );
}

#[test]
fn share_success_yields_url() {
    let resp = parse_action(r#"{"success":true,"url":"https://pycam.example/media/a.jpg"}"#);
    assert_eq!(
        resp.into_share_url(),
        Ok("https://pycam.example/media/a.jpg".to_owned())
    );
}

#[test]
fn share_success_without_url_is_decode_error() {
    let resp = parse_action(r#"{"success":true}"#);
    assert!(matches!(resp.into_share_url(), Err(ApiError::Decode(_))));
}
