use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(Paragraph::new(Self::line(app, area.width)), area);
    }

    fn line(app: &App, width: u16) -> Line<'static> {
        let theme = &app.theme;
        let base = Style::default().fg(theme.status_fg).bg(theme.status_bg);

        let mode = format!(" {} ", app.mode_label());
        let status_text = if !app.input.is_empty() {
            format!(" > {}_", app.input)
        } else if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " last {} | current {} | {} | anim {}",
                app.odometer.last_number(),
                app.odometer.current_number(),
                app.odometer.font().face.name(),
                if app.animated { "on" } else { "off" },
            )
        };

        let help_hint = " q:quit 0-9:type enter:roll +/_:step a:anim s:stop f:font ";
        let used = mode.width() + status_text.width() + help_hint.width();
        let padding_len = (width as usize).saturating_sub(used);

        Line::from(vec![
            Span::styled(mode, base.fg(theme.accent)),
            Span::styled(status_text, base),
            Span::styled(" ".repeat(padding_len), base),
            Span::styled(help_hint, base.fg(theme.hint)),
        ])
    }
}
