use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{Brand, NavItem};
use crate::state::{ShellState, ShellStateExt};
use crate::ui::{cn, Button, ButtonVariant, Icon};
use crate::viewport::SIDEBAR_PINNED_WHEN_WIDE;

const SIDEBAR_BASE: &str = "fixed inset-y-0 left-0 z-50 w-72 bg-sidebar transform \
    transition-transform duration-200 ease-in-out";

/// Classes for the sidebar panel. Closed only hides it below `lg`.
pub fn sidebar_class(open: bool) -> String {
    if open {
        cn([SIDEBAR_BASE, "translate-x-0"])
    } else {
        cn([SIDEBAR_BASE, "-translate-x-full", SIDEBAR_PINNED_WHEN_WIDE])
    }
}

/// Classes for a navigation entry.
pub fn nav_item_class(active: bool) -> String {
    cn([
        "w-full justify-start gap-3 text-left",
        if active {
            "bg-primary text-primary-foreground"
        } else {
            "text-sidebar-foreground hover:bg-sidebar-accent hover:text-sidebar-accent-foreground"
        },
    ])
}

#[component]
pub fn Sidebar(brand: Brand, navigation: Vec<NavItem>, state: Store<ShellState>) -> impl IntoView {
    view! {
        <aside class=move || sidebar_class(state.is_sidebar_open()) data-shell="sidebar">
            <div class="flex h-full flex-col">
                <div class="flex h-16 items-center gap-3 px-6 border-b border-sidebar-border">
                    <div class="flex h-8 w-8 items-center justify-center rounded-lg bg-primary">
                        <Icon glyph=brand.glyph class="h-5 w-5 text-primary-foreground" />
                    </div>
                    <div>
                        <h1 class="text-lg font-bold text-sidebar-foreground">{brand.name}</h1>
                        <p class="text-xs text-muted-foreground">{brand.subtitle}</p>
                    </div>
                </div>
                <NavMenu navigation=navigation />
            </div>
        </aside>
    }
}

/// The navigation entries, in authored order. Entries are inert.
#[component]
pub fn NavMenu(navigation: Vec<NavItem>) -> impl IntoView {
    view! {
        <nav class="flex-1 p-4 space-y-2" aria-label="Main">
            {navigation
                .into_iter()
                .map(|item| {
                    let variant = if item.active {
                        ButtonVariant::Default
                    } else {
                        ButtonVariant::Ghost
                    };
                    view! {
                        <Button variant=variant class=nav_item_class(item.active) current=item.active>
                            <Icon glyph=item.glyph class="h-4 w-4" />
                            <span class="text-sm">{item.name}</span>
                        </Button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;

    #[test]
    fn test_sidebar_class_closed_hides_below_lg() {
        let class = sidebar_class(false);
        assert!(class.ends_with("-translate-x-full lg:translate-x-0"));
        assert!(class.starts_with("fixed inset-y-0 left-0 z-50 w-72"));
    }

    #[test]
    fn test_sidebar_class_open() {
        let class = sidebar_class(true);
        assert!(class.ends_with("ease-in-out translate-x-0"));
        assert!(!class.contains("-translate-x-full"));
    }

    #[test]
    fn test_sidebar_class_matches_viewport_rules() {
        for open in [false, true] {
            let class = sidebar_class(open);
            let narrow_hidden = class.split_whitespace().any(|c| c == "-translate-x-full");
            let pinned = class.contains(SIDEBAR_PINNED_WHEN_WIDE);
            assert_eq!(!narrow_hidden, Viewport::Narrow.sidebar_visible(open));
            assert_eq!(!narrow_hidden || pinned, Viewport::Wide.sidebar_visible(open));
        }
    }

    #[test]
    fn test_nav_item_class() {
        assert!(nav_item_class(true).contains("bg-primary text-primary-foreground"));
        assert!(!nav_item_class(false).contains("bg-primary"));
        assert!(nav_item_class(false).contains("hover:bg-sidebar-accent"));
    }
}
