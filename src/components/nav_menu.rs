//! Top navigation bar with the collapsible mobile menu.

use leptos::prelude::*;

use crate::components::dropdown::Dropdown;
use crate::components::tooltip::Tooltip;
use crate::config::ClientConfig;
use crate::state::ui::UiState;

#[component]
pub fn NavMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let home_url = config.with_value(|c| c.home_url.clone());
    let menu_open = move || ui.with(|state| state.mobile_menu_open);

    view! {
        <nav class="navbar">
            <a class="navbar-brand" href=home_url.clone()>
                "PyCAM"
            </a>
            <button
                class="navbar-toggler"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| ui.update(UiState::toggle_mobile_menu)
            >
                "☰"
            </button>
            <ul class="navbar-nav" class:show=menu_open>
                <li class="nav-item">
                    <a class="nav-link" href=home_url>
                        "Editor"
                    </a>
                </li>
                <li class="nav-item">
                    <a class="nav-link" href="#gallery">
                        "Gallery"
                    </a>
                </li>
                <li class="nav-item">
                    <Dropdown key="help" label="Help">
                        <Tooltip text="Upload a JPEG, PNG or GIF to start editing">
                            <span class="dropdown-item">"Uploading"</span>
                        </Tooltip>
                        <Tooltip text="Effects are applied to the image currently on the canvas">
                            <span class="dropdown-item">"Effects"</span>
                        </Tooltip>
                        <Tooltip text="Reset restores the image you uploaded">
                            <span class="dropdown-item">"Reset"</span>
                        </Tooltip>
                    </Dropdown>
                </li>
            </ul>
        </nav>
    }
}
