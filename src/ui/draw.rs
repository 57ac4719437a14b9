//! Top-level drawing functions.
//!
//! Composes the dashboard: background, the titled card chrome, the weather
//! card content, the graphics icon overlay, and a key-hint bar. Also the
//! minimal surf-report destination screen the navigation callback lands on.

use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use ratatui_image::{Resize, StatefulImage};

use crate::app::App;
use crate::icons::IconStore;

use super::card::Card;
use super::layout::DeviceMetrics;
use super::weather_card::{RenderState, WeatherCard};

/// Cells reserved for the graphics icon overlay in the card header.
const ICON_OVERLAY_WIDTH: u16 = 6;

/// Draw the dashboard screen.
pub fn draw(f: &mut Frame, app: &App, icons: Option<&Arc<Mutex<IconStore>>>) {
    let area = f.area();
    let theme = app.theme();

    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let metrics = DeviceMetrics::of(area);
    let card_width = metrics.max_card_width();
    if card_width < 10 || area.height < 5 {
        return;
    }

    let widget = WeatherCard::new(app.snapshot(), theme, &app.config().weather)
        .pressed(app.is_pressed())
        .tick(app.tick());

    // +2 for the chrome border, clipped to leave the hint bar visible
    let outer_height = (widget.height(&metrics) + 2).min(area.height - 1);
    let outer = Rect::new(
        area.x + (area.width - card_width) / 2,
        area.y + 1,
        card_width,
        outer_height,
    );

    let chrome = Card::new("weather", "Weather", theme);
    let inner = chrome.inner(outer);
    f.render_widget(chrome, outer);
    f.render_widget(widget, inner);

    if let Some(store) = icons {
        render_icon_overlay(f, app, inner, store);
    }

    draw_hint_bar(f, app, area);
}

/// Overlay the current-conditions icon over the header when the terminal
/// has a graphics protocol. Cache-only: never blocks rendering on a load.
fn render_icon_overlay(f: &mut Frame, app: &App, inner: Rect, store: &Arc<Mutex<IconStore>>) {
    let RenderState::Populated(snapshot) = app.render_state() else {
        return;
    };
    if inner.width <= ICON_OVERLAY_WIDTH + 2 || inner.height < 2 {
        return;
    }

    let protocol = {
        let store = store.lock();
        if !store.supports_graphics() {
            return;
        }
        store.get_cached(&snapshot.current.icon_key)
    };

    if let Some(protocol) = protocol {
        let icon_area = Rect {
            x: inner.x + inner.width - ICON_OVERLAY_WIDTH - 1,
            y: inner.y,
            width: ICON_OVERLAY_WIDTH,
            height: 2,
        };
        let image = StatefulImage::new(None).resize(Resize::Fit(None));
        let mut proto = protocol.lock();
        f.render_stateful_widget(image, icon_area, &mut *proto);
    }
}

/// Key hints at the bottom of the screen.
fn draw_hint_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let hints = if app.render_state().is_loading() {
        " waiting for weather data | q: quit"
    } else {
        " Enter: surf report | q: quit"
    };

    let bar = Paragraph::new(hints).style(Style::default().fg(theme.dimmed_alt).bg(theme.background));
    let bottom = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    f.render_widget(bar, bottom);
}

/// Draw the surf-report destination screen.
///
/// The card only invokes its navigation callback; this is where the shell
/// chose to point it. Report content comes from the campus feed and is not
/// rendered by the dashboard core.
pub fn draw_surf_report(f: &mut Frame, app: &App) {
    let area = f.area();
    let theme = app.theme();

    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let block = Block::bordered()
        .border_style(Style::default().fg(theme.accent))
        .title_style(
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )
        .title(" Surf Report ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("Swell outlook for {}", app.config().weather.location_label),
            Style::default().fg(theme.foreground),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Esc: back to dashboard",
            Style::default().fg(theme.dimmed_alt),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
