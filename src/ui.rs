use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{Alert, App};
use crate::dictionary::Dictionary;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
const ALERT_WIDTH: u16 = 44;
const ALERT_HEIGHT: u16 = 6;

impl<D: Dictionary> Widget for &App<D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.engine.current_state();

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let cyan_bold_style = Style::default().patch(bold_style).fg(Color::Cyan);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(3), // root word
                Constraint::Length(1), // score
                Constraint::Length(3), // input
                Constraint::Min(1),    // used words
                Constraint::Length(1), // help
            ])
            .split(area);

        Paragraph::new(Span::styled(state.root_word.clone(), cyan_bold_style))
            .block(Block::default().borders(Borders::ALL).title("Root word"))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(format!("Score: {}", state.score), bold_style))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let inner_width = chunks[2].width.saturating_sub(3) as usize;
        Paragraph::new(Line::from(vec![
            Span::raw(visible_tail(&self.input, inner_width)),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter your word"),
        )
        .render(chunks[2], buf);

        let items: Vec<ListItem> = state
            .used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("({}) ", word.chars().count()), dim_style),
                    Span::raw(word.clone()),
                ]))
            })
            .collect();
        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Words ({})", state.used_words.len())),
            )
            .render(chunks[3], buf);

        Paragraph::new(Span::styled(
            "(enter) submit  (ctrl+r) new word  (esc) quit",
            Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);

        if let Some(alert) = &self.alert {
            render_alert(alert, area, buf);
        }
    }
}

fn render_alert(alert: &Alert, area: Rect, buf: &mut Buffer) {
    let popup = centered(area, ALERT_WIDTH, ALERT_HEIGHT);
    Clear.render(popup, buf);

    let mut lines = Vec::new();
    let message = alert.message();
    if !message.is_empty() {
        lines.push(Line::from(message));
    }
    lines.push(Line::from(Span::styled(
        "press any key",
        Style::default().add_modifier(Modifier::DIM),
    )));

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    alert.title(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(popup, buf);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Keeps the end of `text` that fits in `max_width` columns.
fn visible_tail(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = c.to_string().width();
        if used + w > max_width {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}
