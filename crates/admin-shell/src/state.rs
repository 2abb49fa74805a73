use leptos::prelude::*;
use reactive_stores::Store;

/// The only mutable state of the shell.
///
/// Created closed on mount and dropped with the layout; nothing persists it.
#[derive(Store, Default, Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
}

/// Sidebar transitions on a [`Store<ShellState>`].
pub trait ShellStateExt {
    /// Reactive read of the sidebar flag.
    fn is_sidebar_open(&self) -> bool;

    /// Flips the sidebar between open and closed.
    fn toggle_sidebar(&self);

    /// Closes the sidebar; a no-op when already closed.
    fn close_sidebar(&self);
}

impl ShellStateExt for Store<ShellState> {
    fn is_sidebar_open(&self) -> bool {
        self.sidebar_open().get()
    }

    fn toggle_sidebar(&self) {
        self.sidebar_open().update(|open| {
            *open = !*open;
            log::debug!("sidebar {}", if *open { "opened" } else { "closed" });
        });
    }

    fn close_sidebar(&self) {
        if self.sidebar_open().get_untracked() {
            self.sidebar_open().set(false);
            log::debug!("sidebar closed");
        }
    }
}
