//! Async wrappers over the browser's callback-based file and image loading.
//!
//! Both helpers bridge an `onload`/`onerror` pair into a `js_sys::Promise`
//! and await it, so callers resume only once the browser has finished.
//! Handlers are `once_into_js` closures, so the one that fires frees itself.

use std::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;

/// Read a local file into a `data:` URL.
///
/// # Errors
///
/// Returns a description when the reader cannot start or reports an error.
pub async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = Rc::new(web_sys::FileReader::new().map_err(|_| "file reader unavailable".to_owned())?);
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader_onload = Rc::clone(&reader);
        let onload = Closure::once_into_js(move || {
            let result = reader_onload.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file_read_failed"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader
        .read_as_data_url(file)
        .map_err(|_| "failed to start file read".to_owned())?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| "failed to read file".to_owned())?;
    value.as_string().ok_or_else(|| "file reader returned no data".to_owned())
}

/// Load `src` into a fresh image element and wait until it has decoded.
///
/// # Errors
///
/// Returns a description when the element cannot be created or the image
/// fails to load.
pub async fn load_image(src: &str) -> Result<web_sys::HtmlImageElement, String> {
    let img = web_sys::HtmlImageElement::new().map_err(|_| "failed to create image".to_owned())?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.unchecked_ref()));
        img.set_onerror(Some(onerror.unchecked_ref()));
    });
    img.set_src(src);
    JsFuture::from(promise)
        .await
        .map_err(|_| "failed to load image".to_owned())?;
    if img.natural_width() == 0 || img.natural_height() == 0 {
        return Err("invalid image dimensions".to_owned());
    }
    Ok(img)
}
