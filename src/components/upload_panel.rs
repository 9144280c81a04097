//! Upload form: file picker, preview, and the save submission hook.
//!
//! The form posts natively to the save route unless an effect is selected
//! and the editor canvas exists; then `Command::Save` takes over and the
//! edited canvas is sent with the form fields instead.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::controller::Command;
use crate::util::csrf::{CSRF_FORM_FIELD, form_csrf_token};
use crate::util::tasks::{EditorHandles, dispatch};

#[component]
pub fn UploadPanel() -> impl IntoView {
    let handles = expect_context::<EditorHandles>();
    let controller = handles.controller;
    let action = handles.config.with_value(|c: &ClientConfig| c.upload_form_action.clone());
    let csrf_cookie = handles.config.with_value(|c: &ClientConfig| c.csrf_cookie_name.clone());
    let preview = Memo::new(move |_| controller.with(|c| c.editor.preview.clone()));
    let effect = Memo::new(move |_| controller.with(|c| c.editor.effect.clone()));

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(file) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let mime = file.type_();
            handles.pending_file.set_value(Some(file));
            dispatch(handles, Command::Upload { mime });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(form) = handles.upload_form.get_untracked() else {
                return;
            };
            if !crate::util::validation::validate_form(&form) {
                ev.prevent_default();
                return;
            }
        }
        let tasks = dispatch(handles, Command::Save);
        if crate::state::controller::intercepts_submission(&tasks) {
            ev.prevent_default();
        }
    };

    view! {
        <section class="upload-section">
            <form
                id="upload-form"
                node_ref=handles.upload_form
                action=action
                method="post"
                enctype="multipart/form-data"
                novalidate
                on:submit=on_submit
            >
                <input
                    type="hidden"
                    name=CSRF_FORM_FIELD
                    prop:value=move || form_csrf_token(&csrf_cookie)
                />
                <label for="image-upload">"Upload Image"</label>
                <input
                    id="image-upload"
                    class="form-control"
                    type="file"
                    name="original_image"
                    accept="image/*"
                    required
                    on:change=on_file_change
                />
                <input
                    id="effect-applied"
                    type="hidden"
                    name="effect_applied"
                    prop:value=move || effect.get()
                />
                <div class="image-preview">
                    {move || {
                        preview
                            .get()
                            .map(|src| view! { <img id="preview-image" src=src alt="Selected image preview" /> })
                    }}
                </div>
                <button id="save-btn" class="btn btn-primary" type="submit">
                    "Save"
                </button>
            </form>
        </section>
    }
}
