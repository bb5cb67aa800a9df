//! UI-chrome state: theme, dark mode, status panel and the overlay menu

use crate::domain::ThemeName;

/// Entries of the overlay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ChangeTheme,
    ExitTerminal,
}

impl MenuAction {
    pub const ALL: [MenuAction; 2] = [MenuAction::ChangeTheme, MenuAction::ExitTerminal];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ChangeTheme => "Change Theme",
            MenuAction::ExitTerminal => "Exit Terminal",
        }
    }
}

/// Fixed status readouts shown in the console header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    pub security: &'static str,
    pub agent: &'static str,
    pub mission: &'static str,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self {
            security: "SECURE",
            agent: "ACTIVE",
            mission: "CLASSIFIED",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChromeState {
    pub theme: ThemeName,
    pub dark_mode: bool,
    pub status: StatusPanel,
    /// Selected menu row while the menu is open
    menu: Option<usize>,
}

impl ChromeState {
    pub fn new(theme: ThemeName) -> Self {
        Self {
            theme,
            dark_mode: true,
            status: StatusPanel::default(),
            menu: None,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn menu_selection(&self) -> Option<usize> {
        self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            Some(_) => None,
            None => Some(0),
        };
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn menu_next(&mut self) {
        if let Some(i) = self.menu {
            self.menu = Some((i + 1) % MenuAction::ALL.len());
        }
    }

    pub fn menu_previous(&mut self) {
        if let Some(i) = self.menu {
            let len = MenuAction::ALL.len();
            self.menu = Some((i + len - 1) % len);
        }
    }

    pub fn selected_action(&self) -> Option<MenuAction> {
        self.menu.map(|i| MenuAction::ALL[i])
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
