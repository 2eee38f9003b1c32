//! External links directory.

use arasaka_core::content::{CONTACT_LINKS, LINKS_DESCRIPTION, LINKS_HEADER};
use arasaka_core::Page;
use dioxus::prelude::*;

use super::{PanelHeader, TextReveal};

#[component]
pub fn LinksPanel() -> Element {
    rsx! {
        section {
            class: "panel panel-links",

            PanelHeader { page: Page::Links }
            h1 { class: "panel-title", "{LINKS_HEADER}" }

            TextReveal {
                text: LINKS_DESCRIPTION,

                ul {
                    class: "link-list",
                    for link in CONTACT_LINKS {
                        li {
                            class: "link-entry",
                            span { class: "link-perms", "lrwxrwxrwx" }
                            a {
                                class: "link-target",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label} -> {link.value}"
                            }
                            span { class: "link-description", "# {link.description}" }
                        }
                    }
                }
            }
        }
    }
}
