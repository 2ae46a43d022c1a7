//! Authenticated-and-public page chrome: header, sidebar, content outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

/// Wraps every routed page except the auth screens.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Header/>
            <div class="layout__body">
                <Sidebar/>
                <main class="layout__main">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
