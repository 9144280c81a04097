//! Reusable card component for saved edits in the gallery grid.
//!
//! DESIGN
//! ======
//! Cards are presentational; delete and share go through the controller so
//! the grid only changes after the server confirmed a deletion.

use leptos::prelude::*;

use crate::state::controller::{Command, DELETE_CONFIRM_PROMPT};
use crate::state::gallery::GalleryItem;
use crate::util::tasks::{EditorHandles, dispatch};

/// Ask the user to confirm a deletion. Always declines outside the browser.
fn confirm_delete() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(DELETE_CONFIRM_PROMPT).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("declining without a browser: {DELETE_CONFIRM_PROMPT}");
        false
    }
}

/// One saved edit with delete and share actions.
#[component]
pub fn GalleryCard(item: GalleryItem) -> impl IntoView {
    let handles = expect_context::<EditorHandles>();
    let id = item.id;
    let label = item.effect_label();
    let src = item.display_url().to_owned();
    let controller = handles.controller;
    let busy = Memo::new(move |_| controller.with(|c| c.gallery.is_pending(id)));

    view! {
        <div class="gallery-item" data-id=id.to_string()>
            <img class="gallery-image" src=src alt=label.clone() loading="lazy" />
            <div class="gallery-meta">
                <span class="gallery-effect">{label}</span>
                <span class="gallery-date">{item.created_at}</span>
            </div>
            <div class="gallery-actions">
                <button
                    class="share-btn"
                    data-id=id.to_string()
                    title="Copy share link"
                    disabled=move || busy.get()
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        dispatch(handles, Command::Share(id));
                    }
                >
                    "Share"
                </button>
                <button
                    class="delete-btn"
                    data-id=id.to_string()
                    title="Delete image"
                    aria-label="Delete image"
                    disabled=move || busy.get()
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        if confirm_delete() {
                            dispatch(handles, Command::Delete(id));
                        }
                    }
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}

/// Grid of every saved edit, newest first as delivered by the server.
#[component]
pub fn Gallery() -> impl IntoView {
    let handles = expect_context::<EditorHandles>();
    let controller = handles.controller;
    let items = Memo::new(move |_| controller.with(|c| c.gallery.items.clone()));
    let is_empty = move || items.with(Vec::is_empty);

    view! {
        <section id="gallery" class="gallery-section">
            <h2>"Your Gallery"</h2>
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="gallery-empty">"No saved images yet."</p> }
            >
                <div class="gallery-grid">
                    <For
                        each=move || items.get()
                        key=|item: &GalleryItem| item.id
                        children=|item: GalleryItem| view! { <GalleryCard item=item /> }
                    />
                </div>
            </Show>
        </section>
    }
}

