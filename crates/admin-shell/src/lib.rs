//! A responsive sidebar-and-header shell for admin consoles built with Leptos.
//!
//! ```ignore
//! use admin_shell::prelude::*;
//!
//! view! {
//!     <DashboardLayout config=ShellConfig::default()>
//!         <p>"page content"</p>
//!     </DashboardLayout>
//! }
//! ```

pub mod config;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod state;
pub mod ui;
pub mod viewport;

pub mod prelude {
    pub use crate::config::{Brand, NavItem, ShellConfig, StatusIndicators, UserBadge};
    pub use crate::error::ShellError;
    pub use crate::glyph::Glyph;
    pub use crate::layout::DashboardLayout;
    pub use crate::state::{ShellState, ShellStateExt, ShellStateStoreFields};
    pub use crate::viewport::Viewport;
}
