use leptos::callback::Callback;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::{StatusIndicators, UserBadge};
use crate::glyph::Glyph;
use crate::state::{ShellState, ShellStateExt};
use crate::ui::{cn, Badge, Button, ButtonSize, ButtonVariant, Icon, Input};
use crate::viewport::HIDDEN_WHEN_WIDE;

/// The menu button shows a close glyph while the sidebar is open.
pub fn toggle_glyph(open: bool) -> Glyph {
    if open {
        Glyph::X
    } else {
        Glyph::Menu
    }
}

fn status_dot(on: bool) -> String {
    cn([
        "w-2 h-2 rounded-full",
        if on {
            "bg-status-online"
        } else {
            "bg-muted-foreground"
        },
    ])
}

#[component]
pub fn Header(
    title: String,
    search_placeholder: String,
    status: StatusIndicators,
    user: UserBadge,
    state: Store<ShellState>,
) -> impl IntoView {
    let StatusIndicators {
        system_active,
        online,
        notification_count,
    } = status;

    view! {
        <header class="bg-card border-b border-border">
            <div class="flex h-16 items-center justify-between px-6">
                <div class="flex items-center gap-4">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        class=HIDDEN_WHEN_WIDE
                        label="Toggle navigation"
                        marker="sidebar-toggle"
                        on_click=Callback::new(move |_| state.toggle_sidebar())
                    >
                        {move || {
                            view! {
                                <Icon glyph=toggle_glyph(state.is_sidebar_open()) class="h-4 w-4" />
                            }
                        }}
                    </Button>
                    <div>
                        <h2 class="text-xl font-semibold">{title}</h2>
                        <div class="flex items-center gap-2">
                            <div class=status_dot(system_active)></div>
                            <span class="text-sm text-muted-foreground">
                                {if system_active { "System Active" } else { "System Inactive" }}
                            </span>
                        </div>
                    </div>
                </div>

                <div class="flex items-center gap-4">
                    <div class="relative hidden md:block">
                        <Icon
                            glyph=Glyph::Search
                            class="absolute left-3 top-1/2 h-4 w-4 -translate-y-1/2 text-muted-foreground"
                        />
                        <Input placeholder=search_placeholder class="w-64 pl-9 bg-background/50" />
                    </div>

                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        class="relative"
                        label=format!("Notifications ({notification_count} unread)")
                        marker="notifications"
                    >
                        <Icon glyph=Glyph::Bell class="h-4 w-4" />
                        {(notification_count > 0)
                            .then(|| {
                                view! {
                                    <Badge class="absolute -top-1 -right-1 h-5 w-5 p-0 text-xs bg-destructive">
                                        {notification_count}
                                    </Badge>
                                }
                            })}
                    </Button>

                    <div class="flex items-center gap-2" data-shell="online-status">
                        <div class=status_dot(online)></div>
                        <span class="text-sm hidden md:inline">
                            {if online { "Online" } else { "Offline" }}
                        </span>
                    </div>

                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        class="gap-2"
                        label="User menu"
                        marker="user-menu"
                    >
                        <div class="w-6 h-6 bg-primary rounded-full flex items-center justify-center">
                            <span class="text-xs font-bold text-primary-foreground">{user.initials}</span>
                        </div>
                        <span class="text-sm hidden md:inline">{user.name}</span>
                    </Button>
                </div>
            </div>
        </header>
    }
}
