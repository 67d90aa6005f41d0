use crate::ui::theme::{GIFT_ORANGE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::gift::ViewState;

pub struct Header<'a> {
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }

    pub fn widget(&self, view: &ViewState, alerting: bool) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = match view {
            _ if alerting => ("●", STATUS_ERROR),
            ViewState::Loading { .. } => ("●", GIFT_ORANGE),
            _ => ("●", STATUS_OK),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled(
                "Giftster",
                Style::default().fg(GIFT_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
