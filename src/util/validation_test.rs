use super::*;

#[test]
fn empty_value_is_invalid_and_gets_a_message() {
    assert_eq!(plan_required_field("", false), FieldPlan::Invalid { insert_message: true });
}

#[test]
fn whitespace_only_value_is_invalid() {
    assert_eq!(plan_required_field(" \t\n ", false), FieldPlan::Invalid { insert_message: true });
}

#[test]
fn repeated_invalid_submission_does_not_duplicate_message() {
    assert_eq!(plan_required_field("", true), FieldPlan::Invalid { insert_message: false });
}

#[test]
fn filled_value_clears_existing_message() {
    assert_eq!(plan_required_field("photo.jpg", true), FieldPlan::Valid { remove_message: true });
    assert_eq!(plan_required_field("photo.jpg", false), FieldPlan::Valid { remove_message: false });
}

#[test]
fn exactly_one_message_across_repeated_submissions() {
    // Simulate the DOM: whether a message currently follows the field.
    let mut has_message = false;
    let mut inserted = 0;
    for _ in 0..3 {
        if let FieldPlan::Invalid { insert_message: true } = plan_required_field("   ", has_message) {
            inserted += 1;
            has_message = true;
        }
    }
    assert_eq!(inserted, 1);
    assert!(has_message);
}

#[test]
fn any_invalid_field_blocks_submission() {
    let plans = [
        plan_required_field("title", false),
        plan_required_field("", false),
    ];
    assert!(!form_is_valid(&plans));
}

#[test]
fn all_filled_fields_allow_submission() {
    let plans = [plan_required_field("a", false), plan_required_field("b", true)];
    assert!(form_is_valid(&plans));
    assert!(form_is_valid(&[]));
}
