use crate::ui::gift::ViewState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for the active screen.
    pub fn hints(view: &ViewState) -> &'static str {
        match view {
            ViewState::Form => {
                " Tab/↓: Next │ Shift+Tab/↑: Prev │ ←/→: Gender │ Enter: Generate │ Esc: Quit"
            }
            ViewState::Loading { .. } => " Waiting for gift ideas… │ Ctrl+C: Quit",
            ViewState::Result { .. } => " Enter: Try again │ Esc: Quit",
        }
    }

    pub fn widget(&self, area: Rect, view: &ViewState) -> Paragraph<'static> {
        let hints = Self::hints(view);
        let version = format!("v{} ", VERSION);

        // Padding uses char count, not byte count
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
