//! Rendering for the three gift screens and the alert overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::form::{FormField, Gender};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    BUTTON_TEXT, GIFT_ORANGE, HEADER_TEXT, INPUT_BORDER, LABEL_TEXT, POPUP_BORDER, SELECTOR_BG,
    SELECTOR_TEXT, STATUS_ERROR,
};

use super::state::{Alert, Focus, GiftState, ViewState};

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LOADING_TITLE: &str = "Looking for the best gift ideas 🎁 💡";
const RESULT_TITLE: &str = "Here are some great Christmas gift ideas 🎁 💡";
const SUBMIT_LABEL: &str = "Generate gift ideas";
const TRY_AGAIN_LABEL: &str = "Try again";
const GENDER_LABEL: &str = "For who is the gift?";

/// Height of every form control, borders included.
const CONTROL_HEIGHT: u16 = 3;

/// Render whichever screen `state.view` selects into `area`.
pub fn render_body(frame: &mut Frame, area: Rect, state: &GiftState) {
    match &state.view {
        ViewState::Form => render_form(frame, area, state),
        ViewState::Loading { animation_tick } => render_loading(frame, area, *animation_tick),
        ViewState::Result { text } => render_result(frame, area, text),
    }
}

fn render_form(frame: &mut Frame, area: Rect, state: &GiftState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            Focus::ORDER
                .iter()
                .map(|_| Constraint::Length(CONTROL_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (control, row) in Focus::ORDER.iter().zip(rows.iter()) {
        let focused = state.focus == *control;
        match control.field() {
            Some(field) => render_text_field(frame, *row, state, field, focused),
            None if *control == Focus::Gender => {
                render_gender_selector(frame, *row, state.input.gender, focused)
            }
            None => render_submit_button(frame, *row, focused),
        }
    }
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    state: &GiftState,
    field: FormField,
    focused: bool,
) {
    let draft = state.draft(field);
    let valid = state.is_field_valid(field);
    let border = if !valid {
        STATUS_ERROR
    } else if focused {
        GIFT_ORANGE
    } else {
        INPUT_BORDER
    };

    let mut title = vec![Span::styled(field.label(), Style::default().fg(LABEL_TEXT))];
    if !valid {
        title.push(Span::styled(
            "  not a number",
            Style::default().fg(STATUS_ERROR),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let content = if draft.is_empty() {
        Line::from(Span::styled(
            field.label(),
            Style::default().fg(LABEL_TEXT).add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(Span::styled(draft, Style::default().fg(HEADER_TEXT)))
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let typed = Line::from(draft).width() as u16;
        let x = inner.x + typed.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_gender_selector(frame: &mut Frame, area: Rect, selected: Gender, focused: bool) {
    let border = if focused { GIFT_ORANGE } else { INPUT_BORDER };
    let block = Block::default()
        .title(Span::styled(GENDER_LABEL, Style::default().fg(LABEL_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (gender, half) in Gender::ALL.iter().zip(halves.iter()) {
        let style = if *gender == selected {
            Style::default()
                .fg(BUTTON_TEXT)
                .bg(GIFT_ORANGE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SELECTOR_TEXT).bg(SELECTOR_BG)
        };
        let option = Paragraph::new(gender.label())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(option, *half);
    }
}

fn render_submit_button(frame: &mut Frame, area: Rect, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(BUTTON_TEXT)
            .bg(GIFT_ORANGE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GIFT_ORANGE).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(SUBMIT_LABEL)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GIFT_ORANGE)),
        );
    frame.render_widget(button, area);
}

fn render_loading(frame: &mut Frame, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(Span::styled(
            LOADING_TITLE,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", spinner, spinner),
            Style::default().fg(GIFT_ORANGE),
        )),
    ];

    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let centered = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: height.min(area.height),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

fn render_result(frame: &mut Frame, area: Rect, text: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(CONTROL_HEIGHT),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            RESULT_TITLE,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false }),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(TRY_AGAIN_LABEL)
            .style(
                Style::default()
                    .fg(BUTTON_TEXT)
                    .bg(GIFT_ORANGE)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GIFT_ORANGE)),
            ),
        rows[2],
    );
}

/// Render the transient alert on top of `area`.
pub fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let max_width = area.width.saturating_sub(4).max(1);
    let message_width = Line::from(alert.message.as_str()).width() as u16;
    let title_width = Line::from(alert.title.as_str()).width() as u16;
    let width = message_width
        .max(title_width)
        .saturating_add(4)
        .max(40)
        .min(max_width);

    let text_width = width.saturating_sub(2).max(1);
    let message_rows = message_width.div_ceil(text_width).max(1);
    let height = message_rows.saturating_add(4);

    let popup = centered_rect_by_size(area, width, height);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            alert.message.as_str(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: dismiss",
            Style::default().fg(LABEL_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(
            alert.title.as_str(),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::gift::{GiftIntent, GiftReducer};
    use crate::ui::mvi::Reducer;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn render(state: &GiftState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_body(frame, area, state);
                if let Some(alert) = &state.alert {
                    render_alert(frame, area, alert);
                }
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn form_shows_every_control() {
        let text = render(&GiftState::default());
        for label in ["Quantity", "Age", "Price from ($)", "Price to ($)", "Hobbies"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("For who is the gift?"));
        assert!(text.contains("Woman"));
        assert!(text.contains(SUBMIT_LABEL));
    }

    #[test]
    fn invalid_field_is_flagged() {
        let state = GiftReducer::reduce(
            GiftState::default(),
            GiftIntent::EditField {
                field: FormField::Age,
                raw: "old".into(),
            },
        );
        assert!(render(&state).contains("not a number"));
    }

    #[test]
    fn loading_hides_submit() {
        let state = GiftReducer::reduce(GiftState::default(), GiftIntent::Submit);
        let text = render(&state);
        assert!(text.contains("Looking for the best gift ideas"));
        assert!(!text.contains(SUBMIT_LABEL));
    }

    #[test]
    fn result_shows_text_and_try_again() {
        let mut state = GiftReducer::reduce(GiftState::default(), GiftIntent::Submit);
        state = GiftReducer::reduce(
            state,
            GiftIntent::Succeeded {
                text: "A telescope".into(),
            },
        );
        let text = render(&state);
        assert!(text.contains("A telescope"));
        assert!(text.contains(TRY_AGAIN_LABEL));
    }

    #[test]
    fn alert_overlays_form() {
        let mut state = GiftReducer::reduce(GiftState::default(), GiftIntent::Submit);
        state = GiftReducer::reduce(
            state,
            GiftIntent::Failed {
                message: "Request failed".into(),
            },
        );
        let text = render(&state);
        assert!(text.contains("Couldn't generate ideas"));
        assert!(text.contains("Request failed"));
    }
}
