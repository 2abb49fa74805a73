use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::{ShellState, ShellStateExt};
use crate::ui::cn;
use crate::viewport::HIDDEN_WHEN_WIDE;

/// Backdrop behind the open sidebar on narrow viewports; clicking it closes
/// the sidebar. Absent from the tree while the sidebar is closed.
#[component]
pub fn MobileOverlay(state: Store<ShellState>) -> impl IntoView {
    view! {
        <Show when=move || state.is_sidebar_open()>
            <div
                class=cn(["fixed inset-0 z-40 bg-black/50", HIDDEN_WHEN_WIDE])
                data-shell="overlay"
                aria-hidden="true"
                on:click=move |_| state.close_sidebar()
            ></div>
        </Show>
    }
}
