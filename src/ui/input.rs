use crate::form::Gender;
use crate::ui::app::App;
use crate::ui::gift::{Focus, GiftIntent, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Esc {
        if app.state().alert.is_some() {
            app.dispatch(GiftIntent::DismissAlert);
        } else {
            app.request_quit();
        }
        return;
    }

    // Loading has no bindings: no submit affordance while a request is in flight.
    if app.state().view.is_form() {
        handle_form_key(app, key);
    } else if matches!(app.state().view, ViewState::Result { .. })
        && matches!(key.code, KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char(' '))
    {
        app.try_again();
    }
}

/// Bracketed paste goes into the focused text field.
pub fn handle_paste(app: &mut App, text: &str) {
    let line = text.lines().next().unwrap_or("");
    app.edit_focused(|raw| raw.push_str(line));
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.dispatch(GiftIntent::FocusNext);
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.dispatch(GiftIntent::FocusPrev);
            return;
        }
        _ => {}
    }

    let focus = app.state().focus;
    match focus {
        Focus::Gender => match key.code {
            KeyCode::Left => app.select_gender(Gender::Man),
            KeyCode::Right => app.select_gender(Gender::Woman),
            KeyCode::Char('m') | KeyCode::Char('M') => app.select_gender(Gender::Man),
            KeyCode::Char('w') | KeyCode::Char('W') => app.select_gender(Gender::Woman),
            KeyCode::Char(' ') => app.dispatch(GiftIntent::ToggleGender),
            KeyCode::Enter => app.dispatch(GiftIntent::FocusNext),
            _ => {}
        },
        Focus::Submit => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.submit();
            }
        }
        _ => match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.edit_focused(|raw| raw.push(ch));
            }
            KeyCode::Backspace => {
                app.edit_focused(|raw| {
                    raw.pop();
                });
            }
            KeyCode::Enter => app.submit(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
