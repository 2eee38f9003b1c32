//! Directory listing shown after unlock.

use arasaka_core::content::SYSTEM_NAME;
use arasaka_core::{Page, ShellView};
use dioxus::prelude::*;

use crate::state::PortfolioContext;

const LISTING_HEADER: [&str; 3] = [
    "total 4",
    "drwxr-xr-x 6 user user 4096 Aug 04 2025 .",
    "drwxr-xr-x 3 root root 4096 Aug 04 2025 ..",
];

#[component]
pub fn NavBar(view: Signal<ShellView>) -> Element {
    let ctx = use_context::<PortfolioContext>();
    let mut hovered: Signal<Option<Page>> = use_signal(|| None);

    let visitor_count = view.read().visitor_count;
    let session_started = ctx.session_started();
    let logout = ctx.shell.clone();

    rsx! {
        div {
            class: "nav-terminal",

            div {
                class: "nav-titlebar",
                div {
                    class: "nav-title",
                    span { class: "pulse-block" }
                    span { "root@arasaka-system:/home/user$" }
                }
                button {
                    class: "nav-logout",
                    // stop the click reaching the gate handler on the root
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        logout.logout();
                    },
                    "[LOGOUT]"
                }
            }

            div {
                class: "nav-body",

                div {
                    class: "nav-command",
                    span { class: "nav-user", "user@arasaka-system" }
                    ":~$ ls -la"
                }
                div {
                    class: "nav-listing-header",
                    for line in LISTING_HEADER {
                        div { "{line}" }
                    }
                }

                div {
                    class: "nav-listing",
                    for page in Page::ALL {
                        DirectoryEntry {
                            page,
                            hovered: *hovered.read() == Some(page),
                            on_hover: move |over: bool| {
                                hovered.set(over.then_some(page));
                            },
                        }
                    }
                }
            }

            div {
                class: "nav-prompt",
                span { class: "nav-user", "user@arasaka-system" }
                ":~$ "
                span { class: "pulse", "_" }
            }

            div {
                class: "nav-sysinfo",
                div { "System: {SYSTEM_NAME}" }
                div { "Access Level: AUTHENTICATED" }
                div { "Visitors: {visitor_count}" }
                div { "Session: {session_started}" }
            }
        }
    }
}

#[component]
fn DirectoryEntry(page: Page, hovered: bool, on_hover: EventHandler<bool>) -> Element {
    let ctx = use_context::<PortfolioContext>();

    rsx! {
        button {
            class: if hovered { "nav-entry nav-entry-hovered" } else { "nav-entry" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                ctx.shell.navigate(page);
            },
            onmouseenter: move |_| on_hover.call(true),
            onmouseleave: move |_| on_hover.call(false),

            div {
                class: "nav-entry-row",
                span { class: "nav-entry-meta", "drwxr-xr-x 2 user user 4096 Aug 04 12:00" }
                span { class: "nav-entry-icon", if hovered { "▾" } else { "▸" } }
                span { class: "nav-entry-name", "{page.name()}/" }
                if hovered {
                    span { class: "nav-entry-chevron pulse", ">" }
                }
            }
            if hovered {
                div {
                    class: "nav-entry-hint",
                    "Access {page.label().to_lowercase()} directory"
                }
            }
        }
    }
}
