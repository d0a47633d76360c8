use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::roll::{DisplayMode, Odometer};
use crate::theme::Theme;

/// Draws an [`Odometer`] into a buffer
///
/// Static mode draws the formatted number. Rolling mode draws every track
/// through a one-glyph window at the track's current scroll offset.
pub struct OdometerView<'a> {
    odometer: &'a Odometer,
    style: Style,
    alignment: Alignment,
}

impl<'a> OdometerView<'a> {
    pub fn new(odometer: &'a Odometer) -> Self {
        Self {
            odometer,
            style: Style::default(),
            alignment: Alignment::Left,
        }
    }

    /// Extra style patched over the odometer's own colour
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn static_width(&self) -> u16 {
        let font = self.odometer.font();
        self.odometer
            .display_text()
            .chars()
            .map(|ch| rows_width(&font.rows(ch)))
            .sum()
    }

    fn rolling_width(&self) -> u16 {
        self.odometer
            .tracks()
            .last()
            .map(|t| t.x + t.size.width)
            .unwrap_or(0)
    }

    fn origin_x(&self, area: Rect, width: u16) -> u16 {
        let slack = area.width.saturating_sub(width);
        match self.alignment {
            Alignment::Left => area.x,
            Alignment::Center => area.x + slack / 2,
            Alignment::Right => area.x + slack,
        }
    }

    fn render_static(&self, area: Rect, buf: &mut Buffer, style: Style) {
        let font = self.odometer.font();
        let mut x = self.origin_x(area, self.static_width());

        for ch in self.odometer.display_text().chars() {
            if x >= area.right() {
                break;
            }
            let rows = font.rows(ch);
            let room = (area.right() - x) as usize;
            for (dy, row) in rows.iter().enumerate().take(area.height as usize) {
                buf.set_stringn(x, area.y + dy as u16, row, room, style);
            }
            x = x.saturating_add(rows_width(&rows));
        }
    }

    fn render_rolling(&self, area: Rect, buf: &mut Buffer, style: Style) {
        let font = self.odometer.font();
        let left = self.origin_x(area, self.rolling_width());

        for track in self.odometer.tracks() {
            let x = left.saturating_add(track.x);
            if x >= area.right() || track.size.height == 0 {
                break;
            }
            let room = (area.right() - x).min(track.size.width) as usize;
            let offset = track.offset();

            for dy in 0..track.size.height.min(area.height) {
                let row = offset + dy;
                let cell_index = (row / track.size.height) as usize;
                let glyph_row = (row % track.size.height) as usize;

                let Some(cell) = self.odometer.cell(track, cell_index) else {
                    continue;
                };
                if let Some(text) = font.rows(cell.text).get(glyph_row) {
                    buf.set_stringn(x, area.y + dy, text, room, style);
                }
            }
        }
    }
}

fn rows_width(rows: &[String]) -> u16 {
    rows.iter()
        .map(|row| UnicodeWidthStr::width(row.as_str()) as u16)
        .max()
        .unwrap_or(0)
}

impl Widget for OdometerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let style = Theme::digit_style(self.odometer.text_color(), self.odometer.font())
            .patch(self.style);

        match self.odometer.display_mode() {
            DisplayMode::Static => self.render_static(area, buf, style),
            DisplayMode::Rolling => self.render_rolling(area, buf, style),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use odometer_core::{EasingType, Font, FontFace, OdometerConfig};
    use ratatui::style::Color;

    use super::*;

    fn odometer(face: FontFace) -> Odometer {
        let config = OdometerConfig {
            easing: EasingType::Linear,
            ..Default::default()
        };
        Odometer::new(&config, Font::new(face, false))
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn test_static_plain() {
        let mut odo = odometer(FontFace::Plain);
        odo.set_number(1234567, false);

        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        OdometerView::new(&odo).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0), "1,234,567   ");
    }

    #[test]
    fn test_static_centered() {
        let mut odo = odometer(FontFace::Plain);
        odo.set_number(42, false);

        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        OdometerView::new(&odo)
            .alignment(Alignment::Center)
            .render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0), "  42  ");
    }

    #[test]
    fn test_rolling_mid_and_settled() {
        let mut odo = odometer(FontFace::Plain);
        let now = Instant::now();
        odo.set_number_at(9, true, now);

        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        OdometerView::new(&odo).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0), "0  ");

        // One track of 10 frames over 1300ms, linear
        odo.tick(now + Duration::from_millis(600));
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        OdometerView::new(&odo).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0), "4  ");

        odo.tick(now + Duration::from_secs(2));
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        OdometerView::new(&odo).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0), "9  ");
    }

    #[test]
    fn test_block_font_rows() {
        let mut odo = odometer(FontFace::Block);
        odo.set_number(7, false);

        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 5));
        OdometerView::new(&odo).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0), "███ ");
        assert_eq!(row_text(&buf, 4), "  █ ");
    }

    #[test]
    fn test_clipped_to_area() {
        let mut odo = odometer(FontFace::Plain);
        odo.set_number(123456, false);

        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        OdometerView::new(&odo).render(Rect::new(0, 0, 3, 1), &mut buf);
        assert_eq!(row_text(&buf, 0), "123       ");
    }

    #[test]
    fn test_text_color_applied() {
        let mut odo = odometer(FontFace::Plain);
        odo.set_text_color(Color::Rgb(1, 2, 3));
        odo.set_number(8, false);

        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 1));
        OdometerView::new(&odo).render(buf.area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_zero_area_is_noop() {
        let odo = odometer(FontFace::Plain);
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        OdometerView::new(&odo).render(buf.area, &mut buf);
    }
}
