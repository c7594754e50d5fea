//! Navigation highlighting and the mobile menu toggle.

/// Class added to the nav link of the current page.
pub const ACTIVE_CLASS: &str = "active";

/// Class flipped on the nav list by the mobile menu toggle.
pub const SHOW_CLASS: &str = "show";

/// Whether a link with `href` points at `current_path`.
///
/// Exact string equality: `/servers` does not match `/servers/3`, and a
/// link without an `href` never matches.
#[must_use]
pub fn is_active(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}

/// Indices of the links to mark active, in document order.
pub fn active_links<'a>(
    current_path: &str,
    hrefs: impl IntoIterator<Item = Option<&'a str>>,
) -> Vec<usize> {
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| is_active(*href, current_path))
        .map(|(index, _)| index)
        .collect()
}

/// Visibility of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    shown: bool,
}

impl MobileMenu {
    /// Start from the visibility currently rendered on the page.
    #[must_use]
    pub fn new(shown: bool) -> Self {
        Self { shown }
    }

    /// Flip visibility, returning whether the panel is now shown.
    pub fn toggle(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }
}
