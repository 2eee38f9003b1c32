//! Arasaka terminal portfolio
//!
//! Dioxus desktop front end over `arasaka-core`: the login gate, the
//! directory listing and the content panels.

pub mod components;
pub mod hooks;
pub mod state;
pub mod theme;
