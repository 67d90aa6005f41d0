mod common;

use common::{deliver_outcome, make_app, FakeReply, FakeService};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use giftster::form::{FormField, Gender};
use giftster::ui::gift::Focus;
use giftster::ui::input::{handle_key, handle_paste};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn typing_edits_focused_field() {
    let (mut app, _rx) = make_app(FakeService::new([]));

    handle_key(&mut app, press(KeyCode::Backspace));
    handle_key(&mut app, press(KeyCode::Char('5')));
    assert_eq!(app.state().input.quantity, 5);

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.state().focus, Focus::Age);
    handle_key(&mut app, press(KeyCode::Backspace));
    handle_key(&mut app, press(KeyCode::Backspace));
    assert_eq!(app.state().draft(FormField::Age), "");
    assert!(!app.state().is_field_valid(FormField::Age));
    assert_eq!(app.state().input.age, 30);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn gender_selector_keys() {
    let (mut app, _rx) = make_app(FakeService::new([]));
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Down));
    assert_eq!(app.state().focus, Focus::Gender);

    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.state().input.gender, Gender::Woman);
    handle_key(&mut app, press(KeyCode::Char('w')));
    assert_eq!(app.state().input.gender, Gender::Woman);
    handle_key(&mut app, press(KeyCode::Char(' ')));
    assert_eq!(app.state().input.gender, Gender::Man);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn paste_goes_into_hobbies() {
    let (mut app, _rx) = make_app(FakeService::new([]));
    handle_key(&mut app, press(KeyCode::BackTab));
    handle_key(&mut app, press(KeyCode::BackTab));
    assert_eq!(app.state().focus, Focus::Hobbies);

    handle_paste(&mut app, "chess\nignored line");
    assert_eq!(app.state().input.hobbies, "chess");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn enter_submits_and_result_enter_tries_again() {
    let service = FakeService::succeeding("A telescope");
    let (mut app, rx) = make_app(service.clone());

    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.state().view.is_loading());

    // Nothing to press while loading
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.state().view.is_loading());

    deliver_outcome(&mut app, &rx);
    assert_eq!(app.state().view.result_text(), Some("A telescope"));

    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.state().view.is_form());
    assert_eq!(service.calls().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn esc_dismisses_alert_before_quitting() {
    let service = FakeService::new([FakeReply::Status(500, "down".into())]);
    let (mut app, rx) = make_app(service);

    app.submit();
    deliver_outcome(&mut app, &rx);
    assert!(app.state().alert.is_some());

    handle_key(&mut app, press(KeyCode::Esc));
    assert!(app.state().alert.is_none());
    assert!(!app.should_quit());

    handle_key(&mut app, press(KeyCode::Esc));
    assert!(app.should_quit());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ctrl_c_quits_from_loading() {
    let (mut app, _rx) = make_app(FakeService::succeeding("x"));
    app.submit();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}
