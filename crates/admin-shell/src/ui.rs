//! Small design-system primitives the shell is composed from.
//!
//! Colors and spacing come from Tailwind-style token classes (`bg-primary`,
//! `text-sidebar-foreground`, ...) supplied by the host stylesheet.

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use crate::glyph::Glyph;

use std::collections::HashSet;

/// Joins class fragments, skipping empty ones.
///
/// When two classes fall in the same conflict group (same modifiers, same
/// utility family, e.g. `hover:bg-accent` and `hover:bg-sidebar-accent`) only
/// the later one is kept, so caller classes override component defaults.
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let classes: Vec<&str> = parts.into_iter().flat_map(str::split_whitespace).collect();
    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = classes
        .into_iter()
        .rev()
        .filter(|class| seen.insert(conflict_group(*class)))
        .collect();
    kept.reverse();
    kept.join(" ")
}

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

/// `(modifiers, family)` for the utilities whose values replace each other.
/// Anything else only conflicts with an identical class.
fn conflict_group(class: &str) -> (&str, &str) {
    let (modifiers, utility) = match class.rfind(':') {
        Some(at) => class.split_at(at + 1),
        None => ("", class),
    };
    let family = if utility.starts_with("bg-") {
        "bg"
    } else if let Some(value) = utility.strip_prefix("text-") {
        if TEXT_SIZES.contains(&value) {
            "text-size"
        } else if TEXT_ALIGNS.contains(&value) {
            "text-align"
        } else {
            "text-color"
        }
    } else {
        utility
    };
    (modifiers, family)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid primary fill.
    #[default]
    Default,
    /// Transparent until hovered.
    Ghost,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Ghost => "ghost",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Sm => "h-9 rounded-md px-3",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md \
    text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 \
    focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    /// Accessible name for icon-only buttons.
    #[prop(optional, into)]
    label: Option<String>,
    /// Renders `aria-current="page"`.
    #[prop(optional)]
    current: bool,
    /// Value of the `data-shell` hook attribute.
    #[prop(optional)]
    marker: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = cn([BUTTON_BASE, variant.class(), size.class(), class.as_str()]);

    view! {
        <button
            type="button"
            class=class
            data-variant=variant.as_str()
            data-shell=marker
            aria-label=label
            aria-current=current.then_some("page")
            on:click=move |_| {
                if let Some(on_click) = &on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// A text input. The shell only displays it; nothing reads its value.
#[component]
pub fn Input(
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = cn([
        "flex h-10 rounded-md border border-input px-3 py-2 text-sm placeholder:text-muted-foreground",
        class.as_str(),
    ]);
    let label = placeholder.clone();

    view! { <input type="search" class=class placeholder=placeholder aria-label=label /> }
}

#[component]
pub fn Badge(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = cn([
        "inline-flex items-center justify-center rounded-full font-semibold text-destructive-foreground",
        class.as_str(),
    ]);

    view! { <span class=class>{children()}</span> }
}

/// Draws a [`Glyph`] through the icon set's `glyph-<key>` classes.
#[component]
pub fn Icon(glyph: Glyph, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = cn([glyph.class().as_str(), class.as_str()]);

    view! { <i class=class data-glyph=glyph.key() aria-hidden="true"></i> }
}
