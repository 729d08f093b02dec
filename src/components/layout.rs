//! Authenticated console chrome: header, sidebar, and routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::footer::Footer;
use crate::components::guard::RequireAuth;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

/// Layout for every protected route: guard first, then chrome around
/// the routed outlet.
#[component]
pub fn ConsoleLayout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let class = move || {
        if ui.get().sidebar_collapsed {
            "console console--collapsed"
        } else {
            "console"
        }
    };

    view! {
        <RequireAuth>
            <div class=class>
                <Header/>
                <div class="console__body">
                    <Sidebar/>
                    <main class="console__content">
                        <Outlet/>
                    </main>
                </div>
                <Footer/>
            </div>
        </RequireAuth>
    }
}
