//! The responsive rules of the layout.
//!
//! In the browser the `lg` breakpoint decides visibility through CSS. The
//! `lg:` class fragments the layout renders are defined here, next to the
//! [`Viewport`] functions stating the same rules, so both change together.

/// Width in CSS pixels at which the `lg:` classes take effect.
pub const LG_BREAKPOINT_PX: u32 = 1024;

/// Keeps the sidebar on-canvas on wide viewports whatever the flag says.
pub const SIDEBAR_PINNED_WHEN_WIDE: &str = "lg:translate-x-0";

/// Hides the menu button and the overlay on wide viewports.
pub const HIDDEN_WHEN_WIDE: &str = "lg:hidden";

/// Pushes the header and content right of the pinned sidebar.
pub const CONTENT_OFFSET_WHEN_WIDE: &str = "lg:ml-72";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Below the `lg` breakpoint: the sidebar is off-canvas unless opened.
    Narrow,
    /// At or above the `lg` breakpoint: the sidebar is pinned.
    Wide,
}

impl Viewport {
    pub fn from_width(px: u32) -> Self {
        if px >= LG_BREAKPOINT_PX {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }

    pub fn sidebar_visible(self, sidebar_open: bool) -> bool {
        match self {
            Viewport::Wide => true,
            Viewport::Narrow => sidebar_open,
        }
    }

    pub fn overlay_visible(self, sidebar_open: bool) -> bool {
        match self {
            Viewport::Wide => false,
            Viewport::Narrow => sidebar_open,
        }
    }

    /// Whether the menu button is shown at all.
    pub fn toggle_visible(self) -> bool {
        self == Viewport::Narrow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width() {
        assert_eq!(Viewport::from_width(375), Viewport::Narrow);
        assert_eq!(Viewport::from_width(1023), Viewport::Narrow);
        assert_eq!(Viewport::from_width(1024), Viewport::Wide);
        assert_eq!(Viewport::from_width(1920), Viewport::Wide);
    }

    #[test]
    fn test_closed_sidebar() {
        assert!(!Viewport::Narrow.sidebar_visible(false));
        assert!(Viewport::Wide.sidebar_visible(false));
        assert!(!Viewport::Narrow.overlay_visible(false));
        assert!(!Viewport::Wide.overlay_visible(false));
    }

    #[test]
    fn test_open_sidebar() {
        assert!(Viewport::Narrow.sidebar_visible(true));
        assert!(Viewport::Wide.sidebar_visible(true));
        assert!(Viewport::Narrow.overlay_visible(true));
        assert!(!Viewport::Wide.overlay_visible(true));
    }

    #[test]
    fn test_class_fragments_target_lg() {
        for fragment in [SIDEBAR_PINNED_WHEN_WIDE, HIDDEN_WHEN_WIDE, CONTENT_OFFSET_WHEN_WIDE] {
            assert!(fragment.starts_with("lg:"));
        }
    }

    #[test]
    fn test_toggle_only_on_narrow() {
        assert!(Viewport::Narrow.toggle_visible());
        assert!(!Viewport::Wide.toggle_visible());
    }
}
