use super::*;

#[test]
fn django_error_level_maps_to_danger() {
    assert_eq!(alert_class("error"), "alert alert-danger");
}

#[test]
fn known_levels_keep_their_variant() {
    assert_eq!(alert_class("success"), "alert alert-success");
    assert_eq!(alert_class(" Warning "), "alert alert-warning");
}

#[test]
fn unknown_levels_fall_back_to_info() {
    assert_eq!(alert_class("debug"), "alert alert-info");
    assert_eq!(alert_class(""), "alert alert-info");
}
