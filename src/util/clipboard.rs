//! Clipboard copy through a temporary, immediately removed text input.

/// Copy `text` to the system clipboard. Returns whether the browser
/// reported success; always `false` outside the browser.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(body) = doc.body() else {
            return false;
        };
        let Some(input) = doc
            .create_element("input")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return false;
        };
        input.set_value(text);
        if body.append_child(&input).is_err() {
            return false;
        }
        input.select();
        let copied = doc
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|html| html.exec_command("copy").ok())
            .unwrap_or(false);
        input.remove();
        copied
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("clipboard unavailable, {} bytes not copied", text.len());
        false
    }
}
