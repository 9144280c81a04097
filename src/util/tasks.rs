//! Browser runtime for controller tasks.
//!
//! ARCHITECTURE
//! ============
//! [`dispatch`] is the single entry point UI handlers use: it runs the
//! command through the `Controller` held in context and then executes the
//! returned tasks. Async tasks (file reads, HTTP, image decoding, timers)
//! run on `spawn_local` and report back through `dispatch` with the token
//! they started with, so the controller can drop stale results.
//!
//! Outside `csr` only notifications are executed; every other task is a
//! logged no-op.

use leptos::prelude::*;

use crate::components::notifications::show_notification;
use crate::config::ClientConfig;
use crate::state::controller::{Command, Controller, Task};
use crate::state::notifications::NotificationsState;

/// Everything task execution needs, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct EditorHandles {
    pub controller: RwSignal<Controller>,
    pub notifications: RwSignal<NotificationsState>,
    pub config: StoredValue<ClientConfig>,
    pub canvas: NodeRef<leptos::html::Canvas>,
    pub upload_form: NodeRef<leptos::html::Form>,
    /// File picked in the upload input, waiting for its `ReadUpload` task.
    #[cfg(feature = "csr")]
    pub pending_file: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl EditorHandles {
    pub fn new(controller: Controller, config: ClientConfig) -> Self {
        Self {
            controller: RwSignal::new(controller),
            notifications: RwSignal::new(NotificationsState::default()),
            config: StoredValue::new(config),
            canvas: NodeRef::new(),
            upload_form: NodeRef::new(),
            #[cfg(feature = "csr")]
            pending_file: StoredValue::new_local(None),
        }
    }
}

/// Run `command` through the controller and execute its tasks.
///
/// Returns the tasks so synchronous callers (form submit) can inspect them.
pub fn dispatch(handles: EditorHandles, command: Command) -> Vec<Task> {
    let tasks = handles
        .controller
        .try_update(|controller| controller.dispatch(command))
        .unwrap_or_default();
    for task in &tasks {
        run_task(handles, task.clone());
    }
    tasks
}

fn run_task(handles: EditorHandles, task: Task) {
    match task {
        Task::Notify { message, severity } => {
            show_notification(handles.notifications, message, severity);
        }
        #[cfg(feature = "csr")]
        other => browser::run(handles, other),
        #[cfg(not(feature = "csr"))]
        other => leptos::logging::log!("browser task skipped: {other:?}"),
    }
}

#[cfg(feature = "csr")]
mod browser {
    use leptos::prelude::*;
    use leptos::task::spawn_local;

    use super::{EditorHandles, dispatch};
    use crate::net::api::{self, ApiError};
    use crate::state::controller::{Command, Task};
    use crate::state::editor::EditorImage;
    use crate::util::canvas_render::canvas_to_jpeg;
    use crate::util::clipboard::copy_text;
    use crate::util::image_io::{load_image, read_file_as_data_url};

    pub(super) fn run(handles: EditorHandles, task: Task) {
        match task {
            Task::ReadUpload { token } => read_upload(handles, token),
            Task::DecodeUpload { token, data_url } => spawn_local(async move {
                match load_image(&data_url).await {
                    Ok(img) => {
                        let image = EditorImage {
                            src: data_url,
                            width: img.natural_width(),
                            height: img.natural_height(),
                        };
                        dispatch(handles, Command::UploadDecoded { token, image });
                    }
                    Err(e) => leptos::logging::warn!("uploaded image failed to decode: {e}"),
                }
            }),
            Task::ApplyEffect { token, effect, intensity } => apply_effect(handles, token, effect, intensity),
            Task::SaveImage { effect } => save_image(handles, effect),
            Task::DeleteImage(id) => spawn_local(async move {
                let config = handles.config.get_value();
                let command = match api::delete_image(&config, id).await {
                    Ok(()) => Command::Deleted(id),
                    Err(error) => {
                        leptos::logging::warn!("delete {id} failed: {error}");
                        Command::DeleteFailed { id, error }
                    }
                };
                dispatch(handles, command);
            }),
            Task::ShareImage(id) => spawn_local(async move {
                let config = handles.config.get_value();
                let command = match api::share_image(&config, id).await {
                    Ok(url) => Command::Shared { id, url },
                    Err(error) => {
                        leptos::logging::warn!("share {id} failed: {error}");
                        Command::ShareFailed { id, error }
                    }
                };
                dispatch(handles, command);
            }),
            Task::CopyToClipboard(url) => {
                let command = if copy_text(&url) {
                    Command::Copied
                } else {
                    leptos::logging::warn!("clipboard copy was refused");
                    Command::CopyFailed(url)
                };
                dispatch(handles, command);
            }
            Task::NavigateHome { delay_ms } => spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                let href = handles.config.with_value(|config| config.home_url.clone());
                let Some(window) = web_sys::window() else {
                    return;
                };
                if let Err(e) = window.location().set_href(&href) {
                    leptos::logging::warn!("redirect to {href} failed: {e:?}");
                }
            }),
            Task::Notify { .. } => {}
        }
    }

    fn read_upload(handles: EditorHandles, token: u64) {
        let Some(file) = handles.pending_file.try_update_value(Option::take).flatten() else {
            leptos::logging::warn!("upload read requested without a selected file");
            return;
        };
        spawn_local(async move {
            let command = match read_file_as_data_url(&file).await {
                Ok(data_url) => Command::UploadRead { token, data_url },
                Err(e) => {
                    leptos::logging::warn!("file read failed: {e}");
                    Command::UploadReadFailed { token }
                }
            };
            dispatch(handles, command);
        });
    }

    fn apply_effect(handles: EditorHandles, token: u64, effect: String, intensity: u8) {
        let Some(image_data) = handles.canvas.get_untracked().and_then(|canvas| canvas_to_jpeg(&canvas)) else {
            dispatch(
                handles,
                Command::EffectFailed {
                    token,
                    error: ApiError::Transport("editor canvas unavailable".to_owned()),
                },
            );
            return;
        };
        spawn_local(async move {
            let config = handles.config.get_value();
            let src = match api::apply_effect(&config, &effect, intensity, &image_data).await {
                Ok(src) => src,
                Err(error) => {
                    leptos::logging::warn!("apply effect {effect} failed: {error}");
                    dispatch(handles, Command::EffectFailed { token, error });
                    return;
                }
            };
            let still_wanted = handles
                .controller
                .with_untracked(|controller| controller.editor.is_latest_effect(token));
            if !still_wanted {
                return;
            }
            let command = match load_image(&src).await {
                Ok(img) => Command::EffectApplied {
                    token,
                    image: EditorImage {
                        src,
                        width: img.natural_width(),
                        height: img.natural_height(),
                    },
                },
                Err(e) => Command::EffectFailed { token, error: ApiError::Decode(e) },
            };
            dispatch(handles, command);
        });
    }

    fn save_image(handles: EditorHandles, effect: String) {
        let canvas = handles.canvas.get_untracked();
        let form = handles.upload_form.get_untracked();
        let (Some(image_data), Some(form)) = (canvas.and_then(|c| canvas_to_jpeg(&c)), form) else {
            dispatch(
                handles,
                Command::SaveFailed(ApiError::Transport("editor canvas unavailable".to_owned())),
            );
            return;
        };
        spawn_local(async move {
            let config = handles.config.get_value();
            let command = match api::save_image(&config, &form, &image_data, &effect).await {
                Ok(()) => Command::SaveSucceeded,
                Err(error) => {
                    leptos::logging::warn!("save failed: {error}");
                    Command::SaveFailed(error)
                }
            };
            dispatch(handles, command);
        });
    }
}
