//! UI components for the portfolio.

mod about;
mod app;
mod contact;
mod footer;
mod links;
mod login_screen;
mod nav_bar;
mod projects;
mod text_reveal;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use footer::*;
pub use links::*;
pub use login_screen::*;
pub use nav_bar::*;
pub use projects::*;
pub use text_reveal::*;
