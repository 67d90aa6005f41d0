use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::gift::{render_alert, render_body};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    let header_widget = Header::new(app.service_name());
    frame.render_widget(header_widget.widget(&state.view, state.alert.is_some()), header);

    frame.render_widget(Clear, body);
    if body.width > 0 && body.height > 0 {
        render_body(frame, body, state);
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, &state.view), footer);

    if let Some(alert) = &state.alert {
        render_alert(frame, body, alert);
    }
}
