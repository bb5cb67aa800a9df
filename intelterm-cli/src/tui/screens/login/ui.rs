//! Access gate rendering

use crate::tui::theme::Palette;
use crate::tui::widgets::centered;
use chrono::Local;
use intelterm_core::TerminalSession;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub struct LoginUI;

impl LoginUI {
    pub fn render(frame: &mut Frame, session: &TerminalSession, spinner_frame: usize) {
        let palette = Palette::for_theme(session.chrome.theme, session.chrome.dark_mode);
        let area = frame.area();
        frame.render_widget(Block::default().style(palette.base()), area);

        let card = centered(area, 60, 20);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .style(palette.base().bg(palette.surface));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Term id + clock
            Constraint::Length(1), // Label
            Constraint::Length(3), // Code field
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hint
            Constraint::Length(2), // Button
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(inner);

        Self::render_title(frame, chunks[0], &palette);
        Self::render_term_info(frame, chunks[1], session, &palette);

        frame.render_widget(
            Paragraph::new("ACCESS CODE")
                .style(palette.muted())
                .alignment(Alignment::Center),
            chunks[2],
        );
        Self::render_code_field(frame, chunks[3], session, &palette);

        if let Some(error) = session.auth.error() {
            frame.render_widget(
                Paragraph::new(format!("⚠ {error}"))
                    .style(palette.error())
                    .alignment(Alignment::Center),
                chunks[4],
            );
        }

        frame.render_widget(
            Paragraph::new("Hint 🕵: Use \"IMF-1996\" for access")
                .style(palette.muted().add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center),
            chunks[5],
        );

        let button = if session.auth.is_verifying() {
            Line::from(vec![
                Span::styled(SPINNER[spinner_frame % SPINNER.len()], palette.loading()),
                Span::styled(" VERIFYING...", palette.loading()),
            ])
        } else {
            Line::from(Span::styled("[ AUTHENTICATE ]", palette.title()))
        };
        frame.render_widget(
            Paragraph::new(button).alignment(Alignment::Center),
            chunks[6],
        );

        frame.render_widget(
            Paragraph::new("Unauthorized access attempts will be reported")
                .style(palette.muted())
                .alignment(Alignment::Center),
            chunks[8],
        );
    }

    fn render_title(frame: &mut Frame, area: Rect, palette: &Palette) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled("🛡 ", palette.title()),
            Span::styled("IMF Intelligence Division", palette.title()),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.border()),
        );
        frame.render_widget(title, area);
    }

    fn render_term_info(frame: &mut Frame, area: Rect, session: &TerminalSession, palette: &Palette) {
        let now = Local::now().format("%m/%d/%Y, %H:%M:%S").to_string();
        let line = Line::from(vec![
            Span::styled(format!("TERM ID: {}", session.session_id), palette.muted()),
            Span::styled("  │  ", palette.border()),
            Span::styled(now, palette.muted()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn render_code_field(frame: &mut Frame, area: Rect, session: &TerminalSession, palette: &Palette) {
        let code = &session.auth.code;
        let field = centered(area, 30, 3);
        let text = if code.is_empty() && !session.auth.is_verifying() {
            Line::from(Span::styled("ENTER ACCESS CODE", palette.muted()))
        } else {
            Line::from(Span::styled(code.masked('•'), palette.title()))
        };
        let border = if session.auth.is_verifying() {
            palette.border()
        } else {
            palette.border_active()
        };
        let para = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(para, field);
    }
}
