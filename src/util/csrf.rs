//! Anti-forgery token lookup from `document.cookie`.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

/// Form field Django's CSRF middleware reads on natively submitted forms.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// Find `name=` in a raw cookie header and return its value, or an empty
/// string when the cookie is absent.
pub fn csrf_token_from_cookie(cookie_header: &str, name: &str) -> String {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| {
            cookie
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .unwrap_or_default()
        .to_owned()
}

/// Read the anti-forgery token from the live document's cookies.
#[cfg(feature = "csr")]
pub fn document_csrf_token(name: &str) -> String {
    use wasm_bindgen::JsCast as _;

    let cookie = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default();
    csrf_token_from_cookie(&cookie, name)
}

/// Token to embed in natively submitted forms. Empty outside the browser.
pub fn form_csrf_token(cookie_name: &str) -> String {
    #[cfg(feature = "csr")]
    {
        document_csrf_token(cookie_name)
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("no document cookies for {cookie_name}");
        String::new()
    }
}
