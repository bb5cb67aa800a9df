//! Console rendering

use super::super::login::SPINNER;
use crate::tui::markdown::render_markdown;
use crate::tui::theme::Palette;
use crate::tui::widgets::MenuOverlay;
use chrono::Local;
use intelterm_core::{Message, MessageKind, TerminalSession};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Main console renderer
pub struct ConsoleUI;

impl ConsoleUI {
    /// Render the console. Returns the largest valid scroll offset so the
    /// caller can clamp scrolling to real content.
    pub fn render(frame: &mut Frame, session: &TerminalSession, spinner_frame: usize) -> u16 {
        let palette = Palette::for_theme(session.chrome.theme, session.chrome.dark_mode);
        let area = frame.area();
        frame.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Messages area
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        Self::render_header(frame, chunks[0], session, &palette);
        let max_scroll = Self::render_messages(frame, chunks[1], session, &palette, spinner_frame);
        Self::render_input(frame, chunks[2], session, &palette);
        Self::render_help_bar(frame, chunks[3], session, &palette);

        if session.chrome.menu_open() {
            MenuOverlay::new("TERMINAL MENU", session.chrome.menu_selection(), &palette)
                .render(frame, area);
        }

        max_scroll
    }

    fn render_header(frame: &mut Frame, area: Rect, session: &TerminalSession, palette: &Palette) {
        let status = &session.chrome.status;
        let sep = || Span::styled(" │ ", palette.border());
        let line = Line::from(vec![
            Span::styled(" ▣ IMF INTELLIGENCE ", palette.title()),
            Span::styled("v3.1", palette.muted()),
            sep(),
            Span::styled(Local::now().format("%H:%M:%S").to_string(), palette.muted()),
            sep(),
            Span::styled(format!("SESSION {}", session.session_id), palette.response()),
            sep(),
            Span::styled("SECURITY: ", palette.muted()),
            Span::styled(status.security, palette.response()),
            sep(),
            Span::styled("AGENT: ", palette.muted()),
            Span::styled(status.agent, palette.response()),
            sep(),
            Span::styled("MISSION: ", palette.muted()),
            Span::styled(status.mission, palette.loading()),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.border())
            .style(palette.base().bg(palette.surface));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_messages(
        frame: &mut Frame,
        area: Rect,
        session: &TerminalSession,
        palette: &Palette,
        spinner_frame: usize,
    ) -> u16 {
        let mut lines: Vec<Line> = Vec::new();
        for message in session.conversation.messages() {
            lines.extend(message_lines(message, session, palette, spinner_frame));
            lines.push(Line::from(""));
        }

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(palette.border());
        let inner = block.inner(area);

        // Count rows with the same word wrapper the paragraph renders with
        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        let total = para.line_count(inner.width.max(1));
        let max_scroll = total.saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16;
        let scroll = session.conversation.scroll_offset.min(max_scroll);

        let para = para.block(block).scroll((scroll, 0));
        frame.render_widget(para, area);

        max_scroll
    }

    fn render_input(frame: &mut Frame, area: Rect, session: &TerminalSession, palette: &Palette) {
        let busy = session.conversation.in_flight();
        let input = &session.conversation.input;

        let mut spans = vec![Span::styled("> ", palette.user_prefix())];
        if busy {
            spans.push(Span::styled("Awaiting transmission...", palette.muted()));
        } else if input.is_empty() {
            spans.push(Span::styled("_", palette.user_prefix()));
            spans.push(Span::styled(" Enter your query, agent", palette.muted()));
        } else {
            let (before, after) = input.split_at_cursor();
            let text_style = Style::default().fg(palette.highlight);
            spans.push(Span::styled(before.to_string(), text_style));
            if after.is_empty() {
                spans.push(Span::styled("_", palette.user_prefix()));
            } else {
                spans.push(Span::styled("|", palette.user_prefix()));
                spans.push(Span::styled(after.to_string(), text_style));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if busy {
                palette.border()
            } else {
                palette.border_active()
            })
            .title(if busy { " Processing " } else { " Query " });
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, session: &TerminalSession, palette: &Palette) {
        let key = |k: &'static str| Span::styled(k, palette.key_hint());
        let text = |t: &'static str| Span::styled(t, palette.muted());

        let help = if session.conversation.in_flight() {
            Line::from(Span::styled(
                " Transmitting over secure channel... ",
                palette.loading(),
            ))
        } else {
            Line::from(vec![
                key(" Enter"),
                text(": Send │ "),
                key("↑↓"),
                text(": History │ "),
                key("PgUp/PgDn"),
                text(": Scroll │ "),
                key("F2"),
                text(": Menu │ "),
                key("^T"),
                text(": Theme │ "),
                key("^L"),
                text(": Exit Terminal │ "),
                Span::styled("^Q", palette.error()),
                text(": Quit "),
            ])
        };
        frame.render_widget(Paragraph::new(help), area);
    }
}

/// Lines for one message: a prefix on the first line, content below or beside it
pub fn message_lines(
    message: &Message,
    session: &TerminalSession,
    palette: &Palette,
    spinner_frame: usize,
) -> Vec<Line<'static>> {
    let stamp = Span::styled(
        format!("[{}] ", message.timestamp.format("%H:%M:%S")),
        palette.muted(),
    );

    match message.kind {
        MessageKind::User => {
            let mut lines = plain_lines(&message.content, Style::default().fg(palette.highlight));
            prepend(&mut lines, vec![stamp, Span::styled("> ", palette.user_prefix())]);
            lines
        }
        MessageKind::Error => {
            let mut lines = plain_lines(&message.content, palette.error());
            prepend(
                &mut lines,
                vec![stamp, Span::styled("⚠ ", palette.error().add_modifier(Modifier::BOLD))],
            );
            lines
        }
        MessageKind::Processing => {
            let glyph = SPINNER[spinner_frame % SPINNER.len()];
            vec![Line::from(vec![
                stamp,
                Span::styled(format!("{glyph} "), palette.loading()),
                Span::styled(message.content.clone(), palette.loading()),
            ])]
        }
        MessageKind::System | MessageKind::Response => {
            let (label, style) = if message.kind == MessageKind::System {
                ("[SYSTEM] ", palette.system())
            } else {
                ("[INTEL] ", palette.response())
            };
            let revealing = session.reveals.visible(message.id);
            let text = revealing.unwrap_or(&message.content);

            let mut lines = render_markdown(text, style, palette.title());
            if revealing.is_some() {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(Span::styled("▌", palette.title()));
                }
            }
            prepend(
                &mut lines,
                vec![stamp, Span::styled(label, style.add_modifier(Modifier::BOLD))],
            );
            lines
        }
    }
}

fn plain_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = text
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

fn prepend(lines: &mut [Line<'static>], prefix: Vec<Span<'static>>) {
    if let Some(first) = lines.first_mut() {
        let mut spans = prefix;
        spans.append(&mut first.spans);
        first.spans = spans;
    }
}

/// Flatten lines to text, for assertions and debugging
pub fn lines_to_string(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
