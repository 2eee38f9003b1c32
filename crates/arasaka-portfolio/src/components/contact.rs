//! Contact panel: profile links and the message form.

use arasaka_core::content::{CONTACT_DESCRIPTION, CONTACT_HEADER, CONTACT_LINKS};
use arasaka_core::{ContactDesk, Field, FormStatus, Page};
use dioxus::prelude::*;

use crate::hooks::use_contact_desk;
use crate::state::PortfolioContext;

use super::{PanelHeader, TextReveal};

#[component]
pub fn ContactPanel() -> Element {
    let ctx = use_context::<PortfolioContext>();
    let animation = ctx.animation;
    let fail = ctx.fail_transmissions;
    let (desk, form) = use_contact_desk(move || {
        if fail {
            ContactDesk::simulated_failing(&animation, "uplink rejected by ICE")
        } else {
            ContactDesk::simulated(&animation)
        }
    });

    let current = form.read().clone();
    let submitting = current.status.is_submitting();
    let banner = current.status.banner();
    let banner_class = match current.status {
        FormStatus::Success => "form-banner form-banner-success",
        _ => "form-banner form-banner-error",
    };

    rsx! {
        section {
            class: "panel panel-contact",

            PanelHeader { page: Page::Contact }
            h1 { class: "panel-title", "{CONTACT_HEADER}" }

            TextReveal {
                text: CONTACT_DESCRIPTION,

                div {
                    class: "contact-links",
                    for link in CONTACT_LINKS {
                        a {
                            class: "contact-link",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            span { class: "contact-link-label", "{link.label}" }
                            span { class: "contact-link-value", "{link.value}" }
                            span { class: "contact-link-description", "{link.description}" }
                        }
                    }
                }

                div {
                    class: "panel-section",
                    h2 { class: "section-title", "SECURE MESSAGE TRANSMISSION" }

                    div {
                        class: "contact-form",
                        for field in Field::ALL {
                            FormField {
                                field,
                                value: current.value(field).to_string(),
                                error: current.error(field).map(str::to_string),
                                on_edit: {
                                    let desk = desk.clone();
                                    move |value: String| desk.edit(field, value)
                                },
                            }
                        }

                        button {
                            class: "form-submit",
                            r#type: "button",
                            disabled: submitting,
                            onclick: {
                                let desk = desk.clone();
                                move |_| {
                                    if let Err(e) = desk.submit() {
                                        tracing::debug!(error = %e, "Submit button rejected");
                                    }
                                }
                            },
                            "{current.status.button_label()}"
                        }

                        if let Some(text) = banner {
                            div { class: "{banner_class}", "{text}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(field: Field, value: String, error: Option<String>, on_edit: EventHandler<String>) -> Element {
    let class = if error.is_some() { "form-input form-input-error" } else { "form-input" };

    rsx! {
        div {
            class: "form-field form-field-{field}",
            label { class: "form-label", "{field.label()}" }
            if field == Field::Message {
                textarea {
                    class: "{class}",
                    rows: "6",
                    placeholder: "{field.placeholder()}",
                    value: "{value}",
                    oninput: move |evt| on_edit.call(evt.value()),
                }
            } else {
                input {
                    class: "{class}",
                    r#type: if field == Field::Email { "email" } else if field == Field::Phone { "tel" } else { "text" },
                    placeholder: "{field.placeholder()}",
                    value: "{value}",
                    oninput: move |evt| on_edit.call(evt.value()),
                }
            }
            if let Some(error) = error {
                p { class: "form-error", "{error}" }
            }
        }
    }
}
