use super::*;

#[test]
fn blank_input_yields_defaults() {
    assert_eq!(parse_page_data("  ").unwrap(), PageData::default());
}

#[test]
fn full_payload_parses_config_gallery_and_messages() {
    let raw = r#"{
        "config": { "home_url": "/home/", "csrf_cookie_name": "csrftoken" },
        "gallery": [
            { "id": 5, "edited_image_url": "/media/e5.jpg", "effect_applied": "blur" },
            { "id": 4, "original_image_url": "/media/o4.jpg" }
        ],
        "messages": [ { "level": "success", "text": "Image uploaded successfully!" } ]
    }"#;
    let data = parse_page_data(raw).unwrap();
    assert_eq!(data.config.home_url, "/home/");
    assert_eq!(data.config.apply_effect_url, "/apply-effect/");
    assert_eq!(data.gallery.len(), 2);
    assert_eq!(data.gallery[0].id, 5);
    assert_eq!(data.gallery[1].display_url(), "/media/o4.jpg");
    assert_eq!(data.messages[0].level, "success");
}

#[test]
fn missing_sections_default() {
    let data = parse_page_data(r#"{ "gallery": [] }"#).unwrap();
    assert_eq!(data.config, ClientConfig::default());
    assert!(data.messages.is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(parse_page_data("{ not json").is_err());
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_page_data_defaults_outside_browser() {
    assert_eq!(load_page_data(), PageData::default());
}
