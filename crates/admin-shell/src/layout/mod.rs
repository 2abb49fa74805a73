use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::ShellConfig;
use crate::state::ShellState;
use crate::viewport::CONTENT_OFFSET_WHEN_WIDE;

mod header;
mod overlay;
mod sidebar;

pub use header::{toggle_glyph, Header};
pub use overlay::MobileOverlay;
pub use sidebar::{nav_item_class, sidebar_class, NavMenu, Sidebar};

/// Sidebar, header and overlay wrapped around the page content.
///
/// `children` is mounted once inside `<main>` and is never touched by the
/// sidebar state. Pass `state` to own the sidebar flag from outside; by
/// default the layout creates it closed.
#[component]
pub fn DashboardLayout(
    #[prop(optional)] config: Option<ShellConfig>,
    #[prop(optional)] state: Option<Store<ShellState>>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    if let Err(err) = config.validate() {
        log::warn!("{err}");
    }
    let state = state.unwrap_or_else(|| Store::new(ShellState::default()));

    let ShellConfig {
        brand,
        title,
        search_placeholder,
        navigation,
        status,
        user,
    } = config;

    view! {
        <div class="min-h-screen bg-background dark">
            <Sidebar brand=brand navigation=navigation state=state />

            <div class=CONTENT_OFFSET_WHEN_WIDE>
                <Header
                    title=title
                    search_placeholder=search_placeholder
                    status=status
                    user=user
                    state=state
                />
                <main class="p-6">{children()}</main>
            </div>

            <MobileOverlay state=state />
        </div>
    }
}
