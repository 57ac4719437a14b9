//! Responsive sizing for the dashboard card.
//!
//! Design sizes are authored against an 80-column reference terminal and
//! scaled to whatever the user actually runs, so the card reads the same in
//! a phone-width SSH session and a fullscreen terminal. The card width is
//! additionally capped so text lines stay readable on very wide screens.

use ratatui::layout::Rect;

/// Design reference width, in columns. Sizes passed to [`DeviceMetrics::scale`]
/// mean "this many cells on an 80-column terminal".
pub const REFERENCE_COLS: u16 = 80;

/// Hard cap on card width, in columns.
pub const CARD_MAX_WIDTH: u16 = 64;

/// Fixed side margin between card and screen edge.
pub const CARD_MARGIN: u16 = 1;

/// Design height of the loading placeholder, in reference rows. Keeps the
/// card occupying stable space while data is pending.
pub const LOADING_HEIGHT: u16 = 8;

/// Ambient device metrics for one draw pass.
///
/// Captured from the frame area on every draw, never cached across draws:
/// a terminal resize simply produces different metrics on the next pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceMetrics {
    /// Terminal width in columns
    pub cols: u16,
    /// Terminal height in rows
    pub rows: u16,
}

impl DeviceMetrics {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Capture metrics from the area being drawn into.
    pub fn of(area: Rect) -> Self {
        Self {
            cols: area.width,
            rows: area.height,
        }
    }

    /// Scale a design-reference size to this terminal.
    ///
    /// Pure and deterministic for fixed metrics; monotonic non-decreasing in
    /// `base`, with `scale(0) == 0`. Rounds half up.
    pub fn scale(&self, base: u16) -> u16 {
        let scaled = (u32::from(base) * u32::from(self.cols) + u32::from(REFERENCE_COLS) / 2)
            / u32::from(REFERENCE_COLS);
        scaled.min(u32::from(u16::MAX)) as u16
    }

    /// Widest the card may be on this terminal.
    ///
    /// The lesser of the usable width (columns minus fixed margins) and
    /// [`CARD_MAX_WIDTH`]: fills narrow screens edge-to-edge, stays readable
    /// on wide ones.
    pub fn max_card_width(&self) -> u16 {
        self.cols.saturating_sub(CARD_MARGIN * 2).min(CARD_MAX_WIDTH)
    }
}
