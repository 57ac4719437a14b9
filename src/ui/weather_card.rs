//! The weather card widget.
//!
//! Presentation only: given an optional snapshot, the card derives one of
//! two render states and draws it. Absent data is not an error here - it is
//! the loading state, however long it lasts. Fetching, caching, and retry
//! all belong to whoever maintains the snapshot.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::config::WeatherConfig;
use crate::icons;
use crate::weather::WeatherSnapshot;

use super::forecast::ForecastStrip;
use super::layout::{DeviceMetrics, LOADING_HEIGHT};
use super::theme::Theme;

/// What the card renders this frame, derived once per render from the
/// nullability of the input. There is no partial or error state.
#[derive(Debug, Clone, Copy)]
pub enum RenderState<'a> {
    /// No snapshot available - show the indeterminate placeholder.
    Loading,
    /// A complete snapshot - show header, forecast, and navigation control.
    Populated(&'a WeatherSnapshot),
}

impl<'a> RenderState<'a> {
    pub fn of(snapshot: Option<&'a WeatherSnapshot>) -> Self {
        match snapshot {
            Some(snapshot) => Self::Populated(snapshot),
            None => Self::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Spinner frames for the loading placeholder, advanced by the app tick.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Navigation affordance label.
const SURF_REPORT_LABEL: &str = "Surf Report »";

/// Rows of the populated card: header (2), rule, forecast strip (3), rule, link.
const POPULATED_HEIGHT: u16 = 8;

/// Horizontal content padding inside the card.
const PADDING_X: u16 = 1;

/// Weather card widget.
///
/// Built fresh each frame from borrowed state, like every widget here. The
/// snapshot is owned by the caller and may come and go between frames;
/// either direction is just a different render.
pub struct WeatherCard<'a> {
    snapshot: Option<&'a WeatherSnapshot>,
    theme: &'a Theme,
    weather: &'a WeatherConfig,
    pressed: bool,
    tick: u64,
}

impl<'a> WeatherCard<'a> {
    pub fn new(
        snapshot: Option<&'a WeatherSnapshot>,
        theme: &'a Theme,
        weather: &'a WeatherConfig,
    ) -> Self {
        Self {
            snapshot,
            theme,
            weather,
            pressed: false,
            tick: 0,
        }
    }

    /// Show press feedback on the navigation control.
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// App tick, used to animate the loading spinner.
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Content height for the current render state.
    ///
    /// The loading placeholder has a fixed design height so the card keeps
    /// stable layout space while data is pending.
    pub fn height(&self, metrics: &DeviceMetrics) -> u16 {
        match RenderState::of(self.snapshot) {
            RenderState::Loading => metrics.scale(LOADING_HEIGHT).max(3),
            RenderState::Populated(_) => POPULATED_HEIGHT,
        }
    }

    /// Source URL for the current-conditions icon, `{base}{key}.png`.
    ///
    /// Composed here, loaded (or not) by the icon collaborator. Not
    /// validated.
    pub fn current_icon_url(&self) -> Option<String> {
        self.snapshot
            .map(|s| icons::icon_url(&self.weather.icon_base_url, &s.current.icon_key))
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let frame = SPINNER[(self.tick % SPINNER.len() as u64) as usize];
        let y = area.y + area.height / 2;
        let x = area.x + area.width.saturating_sub(frame.width() as u16) / 2;
        buf.set_stringn(
            x,
            y,
            frame,
            area.width as usize,
            Style::default().fg(self.theme.accent),
        );
    }

    fn render_populated(&self, snapshot: &WeatherSnapshot, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(PADDING_X * 2);
        if inner_width == 0 {
            return;
        }
        let inner_x = area.x + PADDING_X;
        let max_y = area.y + area.height;
        let mut y = area.y;

        // Header left: temperature and location, summary beneath
        let icon = icons::glyph(&snapshot.current.icon_key);
        let icon_width = icon.width() as u16;
        let text_width = inner_width.saturating_sub(icon_width + 2) as usize;

        let temp_line = format!(
            "{:.0}° in {}",
            snapshot.current.temperature, self.weather.location_label
        );
        buf.set_stringn(
            inner_x,
            y,
            truncate(&temp_line, text_width),
            text_width,
            Style::default()
                .fg(self.theme.foreground)
                .add_modifier(Modifier::BOLD),
        );

        // Header right: condition icon
        let icon_x = area.x + area.width.saturating_sub(icon_width + PADDING_X);
        buf.set_string(icon_x, y, icon, Style::default().fg(self.theme.accent));
        y += 1;

        if y < max_y {
            buf.set_stringn(
                inner_x,
                y,
                truncate(&snapshot.current.summary, text_width),
                text_width,
                Style::default().fg(self.theme.dimmed),
            );
            y += 1;
        }

        if y < max_y {
            self.rule(area, y, buf);
            y += 1;
        }

        // Forecast section: daily handed through verbatim, in order
        if y < max_y {
            let strip_height = ForecastStrip::HEIGHT.min(max_y - y);
            let strip_area = Rect::new(inner_x, y, inner_width, strip_height);
            ForecastStrip::new(&snapshot.daily, self.theme).render(strip_area, buf);
            y += strip_height;
        }

        if y < max_y {
            self.rule(area, y, buf);
            y += 1;
        }

        // Navigation affordance, highlighted while press feedback is active
        if y < max_y {
            if self.pressed {
                for x in area.x..area.x + area.width {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(self.theme.selection_bg);
                    }
                }
            }
            buf.set_stringn(
                inner_x,
                y,
                truncate(SURF_REPORT_LABEL, inner_width as usize),
                inner_width as usize,
                Style::default().fg(self.theme.accent),
            );
        }
    }

    fn rule(&self, area: Rect, y: u16, buf: &mut Buffer) {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("─").set_fg(self.theme.rule);
            }
        }
    }
}

impl Widget for WeatherCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match RenderState::of(self.snapshot) {
            RenderState::Loading => self.render_loading(area, buf),
            RenderState::Populated(snapshot) => self.render_populated(snapshot, area, buf),
        }
    }
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{CurrentConditions, DayForecast};

    fn sample_snapshot() -> WeatherSnapshot {
        let daily = ["Mon", "Tue", "Wed", "Thu", "Fri"]
            .iter()
            .enumerate()
            .map(|(i, label)| DayForecast {
                day_of_week: label.to_string(),
                icon_key: "clear-day".to_string(),
                temp_max: 70.0 + i as f64,
                temp_min: 58.0,
            })
            .collect();
        WeatherSnapshot {
            current: CurrentConditions {
                temperature: 68.0,
                summary: "Sunny".to_string(),
                icon_key: "clear-day".to_string(),
            },
            daily,
        }
    }

    fn settings() -> WeatherConfig {
        WeatherConfig {
            snapshot_path: "/tmp/weather.json".into(),
            icon_base_url: "https://assets.example.edu/icons/".to_string(),
            location_label: "San Diego".to_string(),
        }
    }

    fn render_to_text(snapshot: Option<&WeatherSnapshot>, width: u16, height: u16) -> Vec<String> {
        let theme = Theme::default();
        let weather = settings();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        WeatherCard::new(snapshot, &theme, &weather).render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_loading_shows_spinner_only() {
        let rows = render_to_text(None, 40, 8);
        let all: String = rows.join("\n");
        assert!(all.contains(SPINNER[0]));
        assert!(!all.contains("Surf Report"));
        assert!(!all.contains('°'));
    }

    #[test]
    fn test_loading_spinner_advances_with_tick() {
        let theme = Theme::default();
        let weather = settings();
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        WeatherCard::new(None, &theme, &weather)
            .tick(3)
            .render(area, &mut buf);
        let all: String = (0..5)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .map(|pos| buf.cell(pos).unwrap().symbol().to_string())
            .collect();
        assert!(all.contains(SPINNER[3]));
    }

    #[test]
    fn test_populated_header_and_link() {
        let snapshot = sample_snapshot();
        let rows = render_to_text(Some(&snapshot), 50, 8);
        assert!(rows[0].contains("68° in San Diego"));
        assert!(rows[1].contains("Sunny"));
        assert!(rows[7].contains("Surf Report »"));
    }

    #[test]
    fn test_populated_forecast_order() {
        let snapshot = sample_snapshot();
        let rows = render_to_text(Some(&snapshot), 50, 8);
        let day_row = &rows[3];
        let positions: Vec<usize> = ["Mon", "Tue", "Wed", "Thu", "Fri"]
            .iter()
            .map(|label| day_row.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_back_to_loading_after_populated() {
        let snapshot = sample_snapshot();
        render_to_text(Some(&snapshot), 50, 8);
        // Snapshot withdrawn: the next render is simply the loading state.
        let rows = render_to_text(None, 50, 8);
        let all: String = rows.join("\n");
        assert!(all.contains(SPINNER[0]));
        assert!(!all.contains("Surf Report"));
    }

    #[test]
    fn test_current_icon_url_convention() {
        let theme = Theme::default();
        let weather = settings();
        let snapshot = sample_snapshot();
        let card = WeatherCard::new(Some(&snapshot), &theme, &weather);
        assert_eq!(
            card.current_icon_url().unwrap(),
            "https://assets.example.edu/icons/clear-day.png"
        );

        let loading = WeatherCard::new(None, &theme, &weather);
        assert!(loading.current_icon_url().is_none());
    }

    #[test]
    fn test_height_per_state() {
        let theme = Theme::default();
        let weather = settings();
        let snapshot = sample_snapshot();
        let metrics = DeviceMetrics::new(80, 24);

        let populated = WeatherCard::new(Some(&snapshot), &theme, &weather);
        assert_eq!(populated.height(&metrics), POPULATED_HEIGHT);

        let loading = WeatherCard::new(None, &theme, &weather);
        assert_eq!(loading.height(&metrics), LOADING_HEIGHT);
    }

    #[test]
    fn test_render_state_derivation() {
        let snapshot = sample_snapshot();
        assert!(RenderState::of(None).is_loading());
        assert!(!RenderState::of(Some(&snapshot)).is_loading());
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let snapshot = sample_snapshot();
        render_to_text(Some(&snapshot), 0, 0);
        render_to_text(Some(&snapshot), 3, 2);
        render_to_text(None, 1, 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 1), "…");
    }
}
