//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw.rs` - Top-level draw functions per screen
//! - `card.rs` - Generic titled card container
//! - `weather_card.rs` - The weather card widget and its render states
//! - `forecast.rs` - Five-day forecast strip
//! - `layout.rs` - Responsive sizing
//! - `theme.rs` - Campus themes

mod draw;

pub mod card;
pub mod forecast;
pub mod layout;
pub mod theme;
pub mod weather_card;

// Re-export main draw functions
pub use draw::{draw, draw_surf_report};

// Re-export commonly used types
pub use layout::DeviceMetrics;
pub use theme::Theme;
pub use weather_card::{RenderState, WeatherCard};
