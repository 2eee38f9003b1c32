//! Typewriter text with a trailing cursor, revealing its children once the
//! text has finished.

use arasaka_core::Timing;
use dioxus::prelude::*;

use crate::hooks::{use_cursor_blink, use_timer_arena, use_typewriter};
use crate::state::PortfolioContext;

#[component]
pub fn TextReveal(
    text: &'static str,
    #[props(default)] timing: Option<Timing>,
    children: Element,
) -> Element {
    let ctx = use_context::<PortfolioContext>();
    let timers = use_timer_arena();
    let anim = use_typewriter(text, timing.unwrap_or(ctx.animation.panel), &timers);
    let cursor = use_cursor_blink(ctx.animation.cursor_period(), &timers);

    let current = anim.read();
    let complete = current.is_complete();
    let revealed = current.revealed().to_string();
    drop(current);

    rsx! {
        p {
            class: "reveal-text",
            "{revealed}"
            if !complete {
                span {
                    class: if *cursor.read() { "cursor" } else { "cursor cursor-hidden" },
                    "▓"
                }
            }
        }
        if complete {
            div {
                class: "reveal-body",
                {children}
            }
        }
    }
}
