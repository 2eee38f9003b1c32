//! Login gate: banner, animated password field and the prompt.

use arasaka_core::content::{GATE_BANNER, GATE_CONFIRM_PROMPT, GATE_PROMPT};
use arasaka_core::{ShellView, UnlockPhase};
use dioxus::prelude::*;

use crate::hooks::{use_cursor_blink, use_timer_arena};
use crate::state::PortfolioContext;

const INDICATORS: [(&str, &str); 3] = [
    ("indicator-red", "SECURE"),
    ("indicator-yellow", "ENCRYPTED"),
    ("indicator-green", "ONLINE"),
];

#[component]
pub fn LoginScreen(view: Signal<ShellView>) -> Element {
    let ctx = use_context::<PortfolioContext>();
    let timers = use_timer_arena();
    let cursor = use_cursor_blink(ctx.animation.cursor_period(), &timers);

    let current = view.read();
    let phase = current.phase;
    let password = current.password.revealed().to_string();

    let prompt = if current.awaiting_confirm() {
        Some(GATE_CONFIRM_PROMPT)
    } else if phase == UnlockPhase::Locked {
        Some(GATE_PROMPT)
    } else {
        None
    };
    let cursor_class = if *cursor.read() { "cursor" } else { "cursor cursor-hidden" };

    rsx! {
        div {
            class: "login-screen",

            div {
                class: "login-banner",
                for (i, line) in GATE_BANNER.iter().enumerate() {
                    p {
                        class: if i == 0 { "banner-line banner-alert" } else { "banner-line" },
                        "{line}"
                    }
                }
            }

            div {
                class: "login-field",
                div { class: "login-label", "ENTER_PASSWORD:" }
                div {
                    class: "login-input",
                    span { class: "login-value", "{password}" }
                    span { class: "{cursor_class}", "▓" }
                }
            }

            div {
                class: "login-status",
                "STATUS: {phase.status_display()}"
            }

            if let Some(prompt) = prompt {
                p {
                    class: "login-prompt",
                    "{prompt}"
                }
            }

            div {
                class: "login-indicators",
                for (color, label) in INDICATORS {
                    div {
                        class: "indicator",
                        span { class: "indicator-dot {color}" }
                        span { class: "indicator-label {color}", "{label}" }
                    }
                }
            }
        }
    }
}
