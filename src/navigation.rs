#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Liked,
    Records,
    Account,
}

impl Page {
    /// Tab bar order, with the plus button sitting between `Liked` and `Records`.
    pub const ALL: [Page; 4] = [Page::Home, Page::Liked, Page::Records, Page::Account];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Liked => "Liked",
            Page::Records => "Records",
            Page::Account => "Account",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Liked => "♡",
            Page::Records => "🎙",
            Page::Account => "👤",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Selected page plus popup menu visibility. Every combination is reachable
/// and both transitions are always enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_page: Page,
    menu_visible: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: Page::Home,
            menu_visible: false,
        }
    }
}

impl NavigationState {
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn select_page(&mut self, page: Page) {
        if self.current_page != page {
            tracing::info!(from = %self.current_page, to = %page, "page selected");
        }
        self.current_page = page;
    }

    /// Flips the popup menu and returns the new visibility.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_visible = !self.menu_visible;
        tracing::debug!(visible = self.menu_visible, "plus menu toggled");
        self.menu_visible
    }
}
