//! Projects panel: tag filter and flip cards.

use arasaka_core::content::{PROJECTS_DESCRIPTION, PROJECTS_HEADER};
use arasaka_core::projects::{all_tags, catalog, filter};
use arasaka_core::{CardFlip, Page, ProjectRecord, TagSelection};
use dioxus::prelude::*;

use super::{PanelHeader, TextReveal};

#[component]
pub fn ProjectsPanel() -> Element {
    let mut selected = use_signal(TagSelection::new);
    let mut flip = use_signal(CardFlip::default);
    let mut show_filter = use_signal(|| false);

    let tags = all_tags(catalog());
    let visible: Vec<(usize, ProjectRecord)> = filter(catalog(), &selected.read())
        .into_iter()
        .copied()
        .enumerate()
        .collect();
    let active_count = selected.read().len();

    rsx! {
        section {
            class: "panel panel-projects",

            PanelHeader { page: Page::Projects }
            div {
                class: "panel-title-row",
                h1 { class: "panel-title", "{PROJECTS_HEADER}" }
                div {
                    class: "tag-filter",
                    button {
                        class: "tag-filter-toggle",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            let open = show_filter();
                            show_filter.set(!open);
                        },
                        if active_count > 0 {
                            "Filter by Tag ({active_count})"
                        } else {
                            "Filter by Tag"
                        }
                    }
                    if show_filter() {
                        div {
                            class: "tag-filter-menu",
                            div {
                                class: "tag-filter-head",
                                h3 { "Filter Tags" }
                                button {
                                    onclick: move |evt: MouseEvent| {
                                        evt.stop_propagation();
                                        show_filter.set(false);
                                    },
                                    "x"
                                }
                            }
                            for tag in tags {
                                label {
                                    class: "tag-option",
                                    input {
                                        r#type: "checkbox",
                                        checked: selected.read().contains(tag),
                                        onchange: move |_| {
                                            selected.write().toggle(tag);
                                            flip.write().reset();
                                        },
                                    }
                                    span { "{tag}" }
                                }
                            }
                        }
                    }
                }
            }

            TextReveal {
                text: PROJECTS_DESCRIPTION,

                div {
                    class: "project-grid",
                    for (index, project) in visible {
                        ProjectCard {
                            key: "{project.name}",
                            project,
                            flipped: flip.read().is_flipped(index),
                            on_flip: move |_| flip.write().toggle(index),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: ProjectRecord, flipped: bool, on_flip: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: if flipped { "project-card flipped" } else { "project-card" },

            div {
                class: "project-face project-front",
                div {
                    class: "project-head",
                    span { class: "project-name", "{project.name}" }
                    span { class: "project-status {project.status.css_class()}", "{project.status.label()}" }
                    if let Some(url) = project.url {
                        a {
                            class: "project-link",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            onclick: move |evt: MouseEvent| evt.stop_propagation(),
                            "View"
                        }
                    }
                }
                h4 { class: "project-info", "Project Info" }
                p { class: "project-description", "{project.description}" }
                div {
                    class: "project-tags",
                    for tag in project.tags {
                        span { class: "project-tag", "{tag}" }
                    }
                }
                if project.image_src.is_some() {
                    button {
                        class: "project-flip",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_flip.call(());
                        },
                        "Show image"
                    }
                }
            }

            div {
                class: "project-face project-back",
                span { class: "project-name", "{project.name} - Image" }
                if let Some(src) = project.image_src {
                    img { class: "project-image", src: "{src}", alt: "{project.name}" }
                }
                button {
                    class: "project-flip",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_flip.call(());
                    },
                    "Back"
                }
            }
        }
    }
}
