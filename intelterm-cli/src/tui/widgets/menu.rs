//! Overlay menu for console actions

use super::super::theme::Palette;
use intelterm_core::application::MenuAction;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Centered popup listing [`MenuAction`]s with one row highlighted
pub struct MenuOverlay<'a> {
    pub title: &'a str,
    pub selected: Option<usize>,
    pub palette: &'a Palette,
}

impl<'a> MenuOverlay<'a> {
    pub fn new(title: &'a str, selected: Option<usize>, palette: &'a Palette) -> Self {
        Self {
            title,
            selected,
            palette,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered(area, 32, MenuAction::ALL.len() as u16 + 4);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(self.palette.border_active())
            .style(self.palette.base());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

        let items: Vec<ListItem> = MenuAction::ALL
            .iter()
            .map(|action| ListItem::new(Line::from(action.label())))
            .collect();

        let list = List::new(items)
            .highlight_style(self.palette.selected())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(self.selected);
        frame.render_stateful_widget(list, chunks[0], &mut state);

        let footer = Paragraph::new("↑↓ Navigate  Enter Select  Esc Close")
            .style(self.palette.muted())
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
