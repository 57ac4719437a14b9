//! Application state for the dashboard.
//!
//! Holds the externally-fetched snapshot, the injected surf-report
//! navigation capability, and the small amount of interaction state the
//! card needs (press feedback, spinner tick). Rendering itself is in
//! `ui::weather_card`; this is the seam where user activation meets the
//! callback.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::ui::theme::Theme;
use crate::ui::weather_card::RenderState;
use crate::weather::WeatherSnapshot;

/// How long the navigation control stays highlighted after activation.
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(200);

/// Application state
pub struct App {
    /// Latest snapshot from the fetcher, replaced wholesale, never edited
    snapshot: Option<WeatherSnapshot>,
    /// Configuration
    config: Config,
    /// Resolved campus theme
    theme: Theme,
    /// Injected navigation capability; where it goes is the caller's business
    goto_surf_report: Box<dyn FnMut()>,
    /// When the navigation control was last activated
    pressed_at: Option<Instant>,
    /// Tick counter driving the loading spinner
    tick: u64,
}

impl App {
    pub fn new(config: Config, goto_surf_report: Box<dyn FnMut()>) -> Self {
        let theme = config.resolve_theme();
        Self {
            snapshot: None,
            config,
            theme,
            goto_surf_report,
            pressed_at: None,
            tick: 0,
        }
    }

    /// Replace the snapshot. `None` is valid at any time - including after
    /// data was present - and simply puts the card back in its loading
    /// state.
    pub fn set_snapshot(&mut self, snapshot: Option<WeatherSnapshot>) {
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    /// The card's render state for the current input.
    pub fn render_state(&self) -> RenderState<'_> {
        RenderState::of(self.snapshot.as_ref())
    }

    /// User activated the surf-report control.
    ///
    /// Invokes the injected callback exactly once per activation. While the
    /// card is loading the control is not rendered, so activation is a
    /// no-op. Repeated activations are each forwarded; there is no
    /// debouncing here.
    pub fn activate_surf_report(&mut self) {
        if self.render_state().is_loading() {
            return;
        }
        self.pressed_at = Some(Instant::now());
        (self.goto_surf_report)();
    }

    /// Whether press feedback on the navigation control is still visible.
    pub fn is_pressed(&self) -> bool {
        self.pressed_at
            .is_some_and(|at| at.elapsed() < PRESS_FEEDBACK)
    }

    /// Advance the tick: spinner animation and press-feedback expiry.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Some(at) = self.pressed_at {
            if at.elapsed() >= PRESS_FEEDBACK {
                self.pressed_at = None;
            }
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
