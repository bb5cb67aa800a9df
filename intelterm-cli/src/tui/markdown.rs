//! Lightweight markdown to ratatui lines
//!
//! Covers what the answering service actually produces: headings, bullet and
//! numbered lists, block quotes, horizontal rules, GFM tables, fenced code,
//! `[text](url)` links and the inline `**bold**`, `*italic*` / `_italic_` and
//! `` `code` `` markers. Unclosed markers (common while text is still being
//! revealed) run to the end of the line.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const CODE_FG: Color = Color::Rgb(230, 230, 235);
const CODE_BG: Color = Color::Rgb(40, 44, 52);
const RULE_WIDTH: usize = 40;

/// Render `text` into owned lines, using `base` for plain text and
/// `accent` for headings, list markers, rules and table borders.
pub fn render_markdown(text: &str, base: Style, accent: Style) -> Vec<Line<'static>> {
    let source: Vec<&str> = text.lines().collect();
    let mut lines = Vec::new();
    let mut in_code_block = false;
    let mut i = 0;

    while i < source.len() {
        let raw = source[i];
        let trimmed = raw.trim_start();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            i += 1;
            continue;
        }

        if in_code_block {
            lines.push(Line::from(Span::styled(
                format!("  {raw}"),
                Style::default().fg(CODE_FG).bg(CODE_BG),
            )));
            i += 1;
            continue;
        }

        if let Some((rows, consumed)) = table_at(&source[i..]) {
            lines.extend(render_table(&rows, base, accent));
            i += consumed;
            continue;
        }

        lines.push(render_block_line(raw, trimmed, base, accent));
        i += 1;
    }

    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

fn render_block_line(raw: &str, trimmed: &str, base: Style, accent: Style) -> Line<'static> {
    if is_rule(trimmed) {
        return Line::from(Span::styled("─".repeat(RULE_WIDTH), accent));
    }

    if let Some((level, heading)) = heading(trimmed) {
        let mut style = accent.add_modifier(Modifier::BOLD);
        if level == 1 {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        return Line::from(render_inline(heading, style));
    }

    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
        .or_else(|| trimmed.strip_prefix("+ "))
    {
        let indent = " ".repeat(raw.len() - trimmed.len());
        let mut spans = vec![Span::styled(format!("{indent}• "), accent)];
        spans.extend(render_inline(item, base));
        return Line::from(spans);
    }

    if let Some((number, item)) = numbered_item(trimmed) {
        let indent = " ".repeat(raw.len() - trimmed.len());
        let mut spans = vec![Span::styled(format!("{indent}{number}. "), accent)];
        spans.extend(render_inline(item, base));
        return Line::from(spans);
    }

    if let Some(quote) = trimmed.strip_prefix('>') {
        let style = base.add_modifier(Modifier::ITALIC);
        let mut spans = vec![Span::styled("│ ", accent)];
        spans.extend(render_inline(quote.trim_start(), style));
        return Line::from(spans);
    }

    Line::from(render_inline(raw, base))
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&level) {
        line[level..].strip_prefix(' ').map(|rest| (level, rest))
    } else {
        None
    }
}

fn numbered_item(line: &str) -> Option<(&str, &str)> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let (number, rest) = line.split_at(digits);
    rest.strip_prefix(". ").map(|item| (number, item))
}

/// `---`, `***` or `___`, optionally spaced out
fn is_rule(line: &str) -> bool {
    let marks: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    marks.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|m| marks.iter().all(|c| c == m))
}

/// A GFM table starting at the first line: a header row, a delimiter row and
/// any body rows. Returns the cell text of header and body rows plus the
/// number of source lines used.
fn table_at<'a>(source: &[&'a str]) -> Option<(Vec<Vec<&'a str>>, usize)> {
    let count = source
        .iter()
        .take_while(|line| line.trim_start().starts_with('|'))
        .count();
    if count < 2 || !is_delimiter_row(source[1]) {
        return None;
    }

    let rows = source[..count]
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != 1)
        .map(|(_, line)| split_cells(*line))
        .collect();
    Some((rows, count))
}

fn split_cells(line: &str) -> Vec<&str> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(str::trim).collect()
}

fn is_delimiter_row(line: &str) -> bool {
    split_cells(line).iter().all(|cell| {
        cell.contains('-') && cell.chars().all(|c| c == '-' || c == ':')
    })
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.width()).sum()
}

fn render_table(rows: &[Vec<&str>], base: Style, accent: Style) -> Vec<Line<'static>> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let cells: Vec<Vec<Vec<Span<'static>>>> = rows
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let style = if r == 0 {
                accent.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            (0..columns)
                .map(|c| render_inline(row.get(c).copied().unwrap_or(""), style))
                .collect()
        })
        .collect();
    let widths: Vec<usize> = (0..columns)
        .map(|c| cells.iter().map(|row| spans_width(&row[c])).max().unwrap_or(0))
        .collect();

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        Line::from(Span::styled(
            format!("{left}{}{right}", segments.join(mid)),
            accent,
        ))
    };

    let mut lines = vec![border("┌", "┬", "┐")];
    for (r, row) in cells.into_iter().enumerate() {
        let mut spans = vec![Span::styled("│", accent)];
        for (c, cell) in row.into_iter().enumerate() {
            let pad = widths[c] - spans_width(&cell);
            spans.push(Span::styled(" ", base));
            spans.extend(cell);
            spans.push(Span::styled(" ".repeat(pad + 1), base));
            spans.push(Span::styled("│", accent));
        }
        lines.push(Line::from(spans));
        if r == 0 {
            lines.push(border("├", "┼", "┤"));
        }
    }
    lines.push(border("└", "┴", "┘"));
    lines
}

/// `[label](url)` starting at `start`: label, url and the index just past it
fn link_at(chars: &[char], start: usize) -> Option<(String, String, usize)> {
    let close = start + chars[start..].iter().position(|c| *c == ']')?;
    if chars.get(close + 1) != Some(&'(') {
        return None;
    }
    let end = close + 2 + chars[close + 2..].iter().position(|c| *c == ')')?;
    let label: String = chars[start + 1..close].iter().collect();
    let url: String = chars[close + 2..end].iter().collect();
    if label.is_empty() || url.is_empty() || url.contains(char::is_whitespace) {
        return None;
    }
    Some((label, url, end + 1))
}

#[derive(Default, Clone, Copy)]
struct InlineState {
    bold: bool,
    italic: bool,
    code: bool,
}

impl InlineState {
    fn style(self, base: Style) -> Style {
        if self.code {
            return Style::default().fg(CODE_FG).bg(CODE_BG);
        }
        let mut style = base;
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }
}

fn is_boundary(c: Option<char>) -> bool {
    c.is_none_or(|c| !c.is_alphanumeric())
}

/// Split one line into styled spans according to inline markers
pub fn render_inline(text: &str, base: Style) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut buf = String::new();
    let mut state = InlineState::default();
    let mut i = 0;

    let flush = |buf: &mut String, spans: &mut Vec<Span<'static>>, state: InlineState| {
        if !buf.is_empty() {
            spans.push(Span::styled(std::mem::take(buf), state.style(base)));
        }
    };

    while i < chars.len() {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();

        if c == '`' {
            flush(&mut buf, &mut spans, state);
            state.code = !state.code;
            i += 1;
            continue;
        }

        if state.code {
            buf.push(c);
            i += 1;
            continue;
        }

        if c == '[' {
            if let Some((label, url, end)) = link_at(&chars, i) {
                flush(&mut buf, &mut spans, state);
                let style = state.style(base);
                spans.push(Span::styled(label, style.add_modifier(Modifier::UNDERLINED)));
                spans.push(Span::styled(format!(" ({url})"), style.add_modifier(Modifier::DIM)));
                i = end;
                continue;
            }
        }

        if c == '*' && next == Some('*') {
            flush(&mut buf, &mut spans, state);
            state.bold = !state.bold;
            i += 2;
            continue;
        }

        if c == '*' || c == '_' {
            let opens =
                !state.italic && is_boundary(prev) && next.is_some_and(|n| !n.is_whitespace());
            let closes = state.italic && is_boundary(next);
            if opens || closes {
                flush(&mut buf, &mut spans, state);
                state.italic = !state.italic;
                i += 1;
                continue;
            }
        }

        buf.push(c);
        i += 1;
    }

    flush(&mut buf, &mut spans, state);
    if spans.is_empty() {
        spans.push(Span::styled(String::new(), base));
    }
    spans
}
