//! Panel selection after unlock.
//!
//! No history and no deep links; the current page lives only as long as
//! the process.

use std::fmt;

/// A content panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    About,
    Projects,
    Contact,
    Links,
}

impl Page {
    /// Panels in directory-listing order.
    pub const ALL: [Page; 4] = [Page::About, Page::Projects, Page::Contact, Page::Links];

    /// Directory name shown in the listing.
    pub fn name(&self) -> &'static str {
        match self {
            Page::About => "about",
            Page::Projects => "projects",
            Page::Contact => "contact",
            Page::Links => "links",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
            Page::Links => "Links",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Router recording which panel is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Router {
    current: Option<Page>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active panel, `None` for the directory listing.
    pub fn current(&self) -> Option<Page> {
        self.current
    }

    pub fn navigate(&mut self, page: Page) {
        self.current = Some(page);
    }

    /// Back to the directory listing.
    pub fn go_back(&mut self) {
        self.current = None;
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_listing() {
        assert_eq!(Router::new().current(), None);
    }

    #[test]
    fn test_navigate_is_unconditional() {
        let mut router = Router::new();
        router.navigate(Page::Projects);
        router.navigate(Page::Projects);
        router.navigate(Page::Links);
        assert_eq!(router.current(), Some(Page::Links));
    }

    #[test]
    fn test_go_back_returns_to_listing() {
        let mut router = Router::new();
        router.navigate(Page::Contact);
        router.go_back();
        assert_eq!(router.current(), None);
        router.go_back();
        assert_eq!(router.current(), None);
    }
}
