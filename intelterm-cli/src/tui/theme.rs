//! Colour palettes for the three terminal themes
//!
//! Each [`ThemeName`] maps to a phosphor-style palette. Dark mode only swaps
//! the background surfaces; the foreground colours stay the same.

use intelterm_core::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Muted text - timestamps, hints, footers
pub const MUTED: Color = Color::Rgb(110, 110, 120);

/// Error text, shared by every theme
pub const ERROR: Color = Color::Rgb(248, 113, 113);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub prompt: Color,
    pub highlight: Color,
    pub system: Color,
    pub background: Color,
    pub surface: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemeName, dark_mode: bool) -> Self {
        let (background, surface) = if dark_mode {
            (Color::Rgb(17, 24, 39), Color::Rgb(31, 41, 55))
        } else {
            (Color::Rgb(243, 244, 246), Color::Rgb(229, 231, 235))
        };

        match theme {
            ThemeName::Green => Self {
                primary: Color::Rgb(34, 197, 94),
                secondary: Color::Rgb(74, 222, 128),
                accent: Color::Rgb(250, 204, 21),
                border: Color::Rgb(22, 101, 52),
                prompt: Color::Rgb(134, 239, 172),
                highlight: Color::Rgb(187, 247, 208),
                system: Color::Rgb(96, 165, 250),
                background,
                surface,
            },
            ThemeName::Blue => Self {
                primary: Color::Rgb(59, 130, 246),
                secondary: Color::Rgb(96, 165, 250),
                accent: Color::Rgb(34, 211, 238),
                border: Color::Rgb(30, 64, 175),
                prompt: Color::Rgb(147, 197, 253),
                highlight: Color::Rgb(191, 219, 254),
                system: Color::Rgb(52, 211, 153),
                background,
                surface,
            },
            ThemeName::Amber => Self {
                primary: Color::Rgb(245, 158, 11),
                secondary: Color::Rgb(251, 191, 36),
                accent: Color::White,
                border: Color::Rgb(146, 64, 14),
                prompt: Color::Rgb(252, 211, 77),
                highlight: Color::Rgb(253, 230, 138),
                system: Color::Rgb(45, 212, 191),
                background,
                surface,
            },
        }
    }

    /// Base style for whole screens
    pub fn base(&self) -> Style {
        Style::default().fg(self.primary).bg(self.background)
    }

    /// Header/title style
    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_active(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(MUTED)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(ERROR)
    }

    pub fn user_prefix(&self) -> Style {
        Style::default().fg(self.prompt).add_modifier(Modifier::BOLD)
    }

    pub fn system(&self) -> Style {
        Style::default().fg(self.system)
    }

    pub fn response(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn loading(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Highlighted/selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.border)
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}
