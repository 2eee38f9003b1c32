//! Personnel profile panel.

use arasaka_core::content::{ABOUT_BIO, ABOUT_HEADER, EDUCATION, EXPERIENCE, SKILLS, SYSTEM_SPECS};
use arasaka_core::Page;
use dioxus::prelude::*;

use super::{PanelHeader, TextReveal};

#[component]
pub fn AboutPanel() -> Element {
    rsx! {
        section {
            class: "panel panel-about",

            PanelHeader { page: Page::About }
            h1 { class: "panel-title", "{ABOUT_HEADER}" }
            div { class: "panel-command", "system@arasaka:~$ cat personal_bio.txt" }

            TextReveal {
                text: ABOUT_BIO,

                div {
                    class: "panel-section",
                    h2 { class: "section-title", "TECH STACK" }
                    div {
                        class: "skill-grid",
                        for skill in SKILLS {
                            div {
                                class: "skill-card",
                                span { class: "skill-name", "{skill.name}" }
                                span { class: "skill-category", "{skill.category}" }
                            }
                        }
                    }
                }

                div {
                    class: "panel-section",
                    h2 { class: "section-title", "EMPLOYMENT HISTORY" }
                    for job in EXPERIENCE {
                        article {
                            class: "record",
                            div {
                                class: "record-head",
                                div {
                                    h3 { class: "record-title", "{job.title}" }
                                    p { class: "record-subtitle", "{job.company}" }
                                }
                                div {
                                    class: "record-meta",
                                    div { "{job.period}" }
                                    span { class: "record-badge", "{job.clearance}" }
                                }
                            }
                            ul {
                                class: "record-duties",
                                for duty in job.duties {
                                    li { "{duty}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "panel-section",
                    h2 { class: "section-title", "EDUCATION" }
                    for edu in EDUCATION {
                        article {
                            class: "record",
                            div {
                                class: "record-head",
                                div {
                                    h3 { class: "record-title", "{edu.degree}" }
                                    p { class: "record-subtitle", "{edu.institution}" }
                                    if let Some(results) = edu.results {
                                        span { class: "record-badge", "{results}" }
                                    }
                                }
                                div { class: "record-meta", "{edu.year}" }
                            }
                        }
                    }
                }

                div {
                    class: "panel-section",
                    h2 { class: "section-title", "SYSTEM SPECIFICATIONS" }
                    div {
                        class: "spec-grid",
                        for (label, value) in SYSTEM_SPECS {
                            div {
                                class: "spec-card",
                                div { class: "spec-label", "{label}" }
                                div { class: "spec-value", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
