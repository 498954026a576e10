//! Navigation state: active route highlighting and mobile menu visibility.
//!
//! Active detection is exact string equality between the current route and
//! a link path. `/about/` does not match `/about`, and `/about/history` does
//! not activate `/about`.

/// A single navigation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }
}

/// Returns true when `link_path` is the page currently being shown.
pub fn compute_active(current_path: &str, link_path: &str) -> bool {
    current_path == link_path
}

/// Pairs every link with its active flag, preserving link order.
pub fn active_links<'a>(
    current_path: &'a str,
    links: &'a [NavLink],
) -> impl Iterator<Item = (&'a NavLink, bool)> + 'a {
    links
        .iter()
        .map(move |link| (link, compute_active(current_path, link.path)))
}

/// User input that drives the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClicked,
    LinkActivated,
}

/// Open/closed flag of the mobile slide-in panel.
///
/// Starts closed. The trigger toggles it; activating any link closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub const CLOSED: Self = Self { is_open: false };
    pub const OPEN: Self = Self { is_open: true };

    pub fn is_open(self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        Self {
            is_open: !self.is_open,
        }
    }

    #[must_use]
    pub fn close(self) -> Self {
        Self::CLOSED
    }

    /// Applies one user event to the state.
    #[must_use]
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::TriggerClicked => self.toggle(),
            MenuEvent::LinkActivated => self.close(),
        }
    }
}

/// Flips the menu state. Bound to the trigger button.
pub fn toggle_menu(state: MenuState) -> MenuState {
    state.toggle()
}

/// Forces the menu closed. Bound to every link inside the panel.
pub fn close_menu(state: MenuState) -> MenuState {
    state.close()
}
