//! Editor canvas that repaints whenever the controller swaps the current image.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canvas element is shared through `EditorHandles::canvas` so effect
//! and save tasks can serialize exactly what the user sees. Painting waits
//! for the image to decode and skips the draw if a newer image replaced it
//! in the meantime.

use leptos::prelude::*;

use crate::util::tasks::EditorHandles;

#[component]
pub fn EditorCanvas() -> impl IntoView {
    let handles = expect_context::<EditorHandles>();
    let controller = handles.controller;
    let enabled = Memo::new(move |_| controller.with(|c| c.editor.editor_enabled));

    #[cfg(feature = "csr")]
    {
        use crate::state::controller::Command;
        use crate::util::canvas_render::draw_image_fitted;
        use crate::util::image_io::load_image;
        use crate::util::tasks::dispatch;

        let canvas_ref = handles.canvas;
        let render = Memo::new(move |_| {
            controller.with(|c| c.editor.current.as_ref().map(|img| (c.editor.render_seq, img.src.clone())))
        });

        Effect::new(move || {
            let attached = canvas_ref.get().is_some();
            if controller.with_untracked(|c| c.editor.canvas_attached) != attached {
                dispatch(handles, Command::CanvasAttached(attached));
            }
        });

        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let Some((seq, src)) = render.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match load_image(&src).await {
                    Ok(img) => {
                        if controller.with_untracked(|c| c.editor.render_seq) == seq {
                            draw_image_fitted(&canvas, &img);
                        }
                    }
                    Err(e) => leptos::logging::warn!("editor image failed to load: {e}"),
                }
            });
        });

        on_cleanup(move || {
            dispatch(handles, Command::CanvasAttached(false));
        });
    }

    view! {
        <section class="editor-section" class:hidden=move || !enabled.get()>
            <div class="canvas-container">
                <canvas id="editor-canvas" node_ref=handles.canvas></canvas>
            </div>
        </section>
    }
}
