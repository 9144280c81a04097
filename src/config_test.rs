use super::*;

#[test]
fn default_config_uses_stock_routes() {
    let config = ClientConfig::default();
    assert_eq!(config.apply_effect_url, "/apply-effect/");
    assert_eq!(config.save_url, "/save/");
    assert_eq!(config.home_url, "/home/");
    assert_eq!(config.csrf_cookie_name, "csrftoken");
    assert_eq!(config.csrf_header_name, "X-CSRFToken");
}

#[test]
fn delete_and_share_endpoints_format_ids() {
    let config = ClientConfig::default();
    assert_eq!(config.delete_endpoint(42), "/delete/42/");
    assert_eq!(config.share_endpoint(7), "/share/7/");
}

#[test]
fn endpoints_follow_custom_prefixes() {
    let config = ClientConfig {
        delete_url_prefix: "/editor/delete/".to_owned(),
        share_url_prefix: "/editor/share/".to_owned(),
        ..ClientConfig::default()
    };
    assert_eq!(config.delete_endpoint(3), "/editor/delete/3/");
    assert_eq!(config.share_endpoint(3), "/editor/share/3/");
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let config: ClientConfig =
        serde_json::from_str(r#"{ "home_url": "/gallery/" }"#).unwrap();
    assert_eq!(config.home_url, "/gallery/");
    assert_eq!(config.save_url, "/save/");
}

#[test]
fn notification_lifetime_is_five_and_a_half_seconds() {
    assert_eq!(NOTIFICATION_DISPLAY_MS + NOTIFICATION_HIDE_MS, 5500);
}

#[test]
fn default_intensity_is_midpoint() {
    assert_eq!(DEFAULT_INTENSITY, 50);
    assert!(DEFAULT_INTENSITY <= MAX_INTENSITY);
}
