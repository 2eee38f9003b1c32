//! Root application component: the gate until unlocked, then the panels.

use std::rc::Rc;

use arasaka_core::{InputEvent, Page};
use dioxus::prelude::*;

use crate::hooks::use_shell_view;
use crate::state::PortfolioContext;
use crate::theme::ThemedRoot;

use super::{AboutPanel, ContactPanel, Footer, LinksPanel, LoginScreen, NavBar, ProjectsPanel};

/// Root application component.
#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(PortfolioContext::launched);
    let view = use_shell_view(ctx.shell.clone());

    // Keys go to the root element, so it takes focus back whenever the
    // gate changes phase.
    let mut root = use_signal(|| None::<Rc<MountedData>>);
    let phase = use_memo(move || view.read().phase);
    use_effect(move || {
        let _ = phase();
        if let Some(element) = root.read().clone() {
            spawn(async move {
                if let Err(e) = element.set_focus(true).await {
                    tracing::debug!(error = ?e, "Could not focus the root element");
                }
            });
        }
    });

    let on_key = ctx.shell.clone();
    let on_click = ctx.shell.clone();
    let on_touch = ctx.shell.clone();

    let unlocked = view.read().is_unlocked();
    let page = view.read().page;
    let show_footer = view.read().show_footer();

    rsx! {
        ThemedRoot {
            div {
                class: "arasaka-app",
                tabindex: "0",
                onmounted: move |evt: MountedEvent| root.set(Some(evt.data())),
                onkeydown: move |evt: KeyboardEvent| {
                    on_key.input(&InputEvent::key(evt.key().to_string()));
                },
                onclick: move |_| {
                    on_click.input(&InputEvent::Click);
                },
                ontouchstart: move |_| {
                    on_touch.input(&InputEvent::Tap);
                },

                div { class: "scanlines" }

                if unlocked {
                    main {
                        class: "terminal",
                        match page {
                            None => rsx! { NavBar { view } },
                            Some(Page::About) => rsx! { AboutPanel {} },
                            Some(Page::Projects) => rsx! { ProjectsPanel {} },
                            Some(Page::Contact) => rsx! { ContactPanel {} },
                            Some(Page::Links) => rsx! { LinksPanel {} },
                        }
                    }
                    if show_footer {
                        Footer {}
                    }
                } else {
                    LoginScreen { view }
                }
            }
        }
    }
}

/// Header row shared by the content panels: path prompt and a back button.
#[component]
pub fn PanelHeader(page: Page) -> Element {
    let ctx = use_context::<PortfolioContext>();

    rsx! {
        div {
            class: "panel-header",
            span { class: "panel-path", "root@arasaka:~/{page.name()}$" }
            button {
                class: "panel-back",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    ctx.shell.go_back();
                },
                "< BACK"
            }
        }
    }
}
