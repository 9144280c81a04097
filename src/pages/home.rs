//! Home page: upload form, editor, and the user's gallery.

use leptos::prelude::*;

use crate::components::effect_panel::EffectPanel;
use crate::components::editor_canvas::EditorCanvas;
use crate::components::gallery_card::Gallery;
use crate::components::upload_panel::UploadPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container home-page">
            <div class="editor-layout">
                <UploadPanel/>
                <div class="editor-workspace">
                    <EditorCanvas/>
                    <EffectPanel/>
                </div>
            </div>
            <Gallery/>
        </main>
    }
}
