//! Five-day forecast strip.
//!
//! Renders each forecast entry as a column: day label, condition glyph, and
//! high/low temperatures. The strip owns its input handling: an empty
//! sequence renders nothing, anything past [`FORECAST_DAYS`] entries is not
//! shown.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::icons;
use crate::weather::DayForecast;

use super::theme::Theme;

/// Maximum number of forecast columns shown.
pub const FORECAST_DAYS: usize = 5;

/// Forecast strip widget.
pub struct ForecastStrip<'a> {
    days: &'a [DayForecast],
    theme: &'a Theme,
}

impl<'a> ForecastStrip<'a> {
    /// Rows the strip occupies: day label, glyph, temperatures.
    pub const HEIGHT: u16 = 3;

    pub fn new(days: &'a [DayForecast], theme: &'a Theme) -> Self {
        Self { days, theme }
    }
}

impl Widget for ForecastStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let shown = &self.days[..self.days.len().min(FORECAST_DAYS)];
        if shown.is_empty() {
            return;
        }

        let col_width = area.width / shown.len() as u16;
        if col_width == 0 {
            return;
        }

        for (i, day) in shown.iter().enumerate() {
            let col_x = area.x + i as u16 * col_width;

            set_centered(
                buf,
                col_x,
                area.y,
                col_width,
                &day.day_of_week,
                Style::default().fg(self.theme.dimmed),
            );

            if area.height > 1 {
                set_centered(
                    buf,
                    col_x,
                    area.y + 1,
                    col_width,
                    icons::glyph(&day.icon_key),
                    Style::default().fg(self.theme.foreground),
                );
            }

            if area.height > 2 {
                let temps = Line::from(vec![
                    Span::styled(
                        format!("{:.0}", day.temp_max),
                        Style::default().fg(self.theme.foreground),
                    ),
                    Span::styled("/", Style::default().fg(self.theme.dimmed_alt)),
                    Span::styled(
                        format!("{:.0}", day.temp_min),
                        Style::default().fg(self.theme.dimmed),
                    ),
                ]);
                let text_width = temps.width() as u16;
                let x = col_x + col_width.saturating_sub(text_width) / 2;
                buf.set_line(x, area.y + 2, &temps, col_width);
            }
        }
    }
}

/// Write `text` centered within a column, clipped to the column width.
fn set_centered(buf: &mut Buffer, col_x: u16, y: u16, col_width: u16, text: &str, style: Style) {
    let text_width = text.width() as u16;
    let x = col_x + col_width.saturating_sub(text_width) / 2;
    buf.set_stringn(x, y, text, col_width as usize, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(label: &str, icon: &str, max: f64, min: f64) -> DayForecast {
        DayForecast {
            day_of_week: label.to_string(),
            icon_key: icon.to_string(),
            temp_max: max,
            temp_min: min,
        }
    }

    fn render_to_text(days: &[DayForecast], width: u16, height: u16) -> Vec<String> {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ForecastStrip::new(days, &theme).render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_renders_days_in_given_order() {
        let days = vec![
            day("Mon", "clear-day", 70.0, 58.0),
            day("Tue", "rain", 64.0, 55.0),
            day("Wed", "fog", 66.0, 57.0),
        ];
        let rows = render_to_text(&days, 45, 3);

        let mon = rows[0].find("Mon").unwrap();
        let tue = rows[0].find("Tue").unwrap();
        let wed = rows[0].find("Wed").unwrap();
        assert!(mon < tue && tue < wed);
    }

    #[test]
    fn test_renders_glyphs_and_temps() {
        let days = vec![day("Mon", "clear-day", 70.0, 58.0)];
        let rows = render_to_text(&days, 20, 3);
        assert!(rows[1].contains('\u{2600}'));
        assert!(rows[2].contains("70/58"));
    }

    #[test]
    fn test_empty_sequence_renders_nothing() {
        let rows = render_to_text(&[], 40, 3);
        for row in rows {
            assert!(row.trim().is_empty());
        }
    }

    #[test]
    fn test_caps_at_five_days() {
        let days: Vec<DayForecast> = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .iter()
            .map(|label| day(label, "cloudy", 60.0, 50.0))
            .collect();
        let rows = render_to_text(&days, 60, 3);
        assert!(rows[0].contains("Fri"));
        assert!(!rows[0].contains("Sat"));
        assert!(!rows[0].contains("Sun"));
    }

    #[test]
    fn test_short_sequence_renders_what_is_given() {
        let days = vec![day("Mon", "snow", 40.0, 30.0), day("Tue", "wind", 45.0, 33.0)];
        let rows = render_to_text(&days, 40, 3);
        assert!(rows[0].contains("Mon"));
        assert!(rows[0].contains("Tue"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let days = vec![day("Mon", "rain", 64.0, 55.0)];
        render_to_text(&days, 2, 1);
        render_to_text(&days, 0, 0);
    }
}
