//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert::FlashAlerts;
use crate::components::nav_menu::NavMenu;
use crate::components::notifications::NotificationHost;
use crate::pages::home::HomePage;
use crate::state::controller::Controller;
use crate::state::ui::UiState;
use crate::util::page_data::load_page_data;
use crate::util::tasks::EditorHandles;

/// Root application component.
///
/// Reads the page bootstrap data once, provides shared state contexts, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let data = load_page_data();
    let handles = EditorHandles::new(Controller::new(data.gallery), data.config);
    let ui = RwSignal::new(UiState::with_alerts(data.messages));

    provide_context(handles);
    provide_context(handles.notifications);
    provide_context(handles.config);
    provide_context(ui);

    #[cfg(feature = "csr")]
    {
        crate::components::dropdown::install_outside_click_close(ui);
        crate::util::validation::install_document_validation();
    }

    view! {
        <Title text="PyCAM"/>

        <NavMenu/>
        <FlashAlerts/>
        <NotificationHost/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("home") view=HomePage/>
            </Routes>
        </Router>
    }
}
