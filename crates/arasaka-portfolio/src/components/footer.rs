//! Footer shown beneath an open panel.

use arasaka_core::content::FOOTER_TEXT;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { class: "footer-text", "{FOOTER_TEXT}" }
        }
    }
}
