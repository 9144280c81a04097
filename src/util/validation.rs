//! Required-field validation for submitted forms.
//!
//! Each `[required]` field is planned independently from its trimmed value
//! and whether an `.error-message` already follows it, so repeated invalid
//! submissions never stack duplicate messages. The planning is pure; the
//! `csr` half applies plans to live DOM nodes.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_CLASS: &str = "is-invalid";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";

/// What to do to one required field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPlan {
    /// Mark invalid; insert a message only when none follows the field yet.
    Invalid { insert_message: bool },
    /// Clear the invalid mark; drop the following message if there is one.
    Valid { remove_message: bool },
}

impl FieldPlan {
    #[must_use]
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

pub fn plan_required_field(value: &str, has_error_message: bool) -> FieldPlan {
    if value.trim().is_empty() {
        FieldPlan::Invalid { insert_message: !has_error_message }
    } else {
        FieldPlan::Valid { remove_message: has_error_message }
    }
}

/// A form may submit only when no field planned invalid.
pub fn form_is_valid(plans: &[FieldPlan]) -> bool {
    !plans.iter().any(|plan| plan.is_invalid())
}

/// Validate every `[required]` field in `form`, annotating the DOM.
/// Returns whether submission may proceed.
#[cfg(feature = "csr")]
pub fn validate_form(form: &web_sys::HtmlFormElement) -> bool {
    let Ok(fields) = form.query_selector_all("[required]") else {
        return true;
    };
    let mut plans = Vec::with_capacity(fields.length() as usize);
    for index in 0..fields.length() {
        let Some(field) = fields.item(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let following = field
            .next_element_sibling()
            .filter(|el| el.class_list().contains(ERROR_MESSAGE_CLASS));
        let plan = plan_required_field(&field_value(&field), following.is_some());
        apply_plan(&field, following, plan);
        plans.push(plan);
    }
    form_is_valid(&plans)
}

#[cfg(feature = "csr")]
fn field_value(field: &web_sys::Element) -> String {
    js_sys::Reflect::get(field, &wasm_bindgen::JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

#[cfg(feature = "csr")]
fn apply_plan(field: &web_sys::Element, following: Option<web_sys::Element>, plan: FieldPlan) {
    let classes = field.class_list();
    match plan {
        FieldPlan::Invalid { insert_message } => {
            let _ = classes.add_1(INVALID_CLASS);
            if insert_message {
                let Some(doc) = field.owner_document() else {
                    return;
                };
                let Ok(message) = doc.create_element("div") else {
                    return;
                };
                message.set_class_name(ERROR_MESSAGE_CLASS);
                message.set_text_content(Some(REQUIRED_MESSAGE));
                let _ = field.after_with_node_1(&message);
            }
        }
        FieldPlan::Valid { remove_message } => {
            let _ = classes.remove_1(INVALID_CLASS);
            if remove_message {
                if let Some(message) = following {
                    message.remove();
                }
            }
        }
    }
}

/// Validate every `form[data-validate]` on the page, including server
/// rendered forms outside the mounted app.
#[cfg(feature = "csr")]
pub fn install_document_validation() {
    let handle = leptos::prelude::window_event_listener(leptos::ev::submit, |ev| {
        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            return;
        };
        if !form.has_attribute("data-validate") {
            return;
        }
        if !validate_form(&form) {
            ev.prevent_default();
        }
    });
    leptos::prelude::on_cleanup(move || handle.remove());
}
