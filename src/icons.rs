//! Condition icon support.
//!
//! Three layers, loosely coupled:
//! - the icon *source convention*: `{base}{key}.png`, composed here and never
//!   validated
//! - cell glyphs: the terminal-native rendering of a condition key
//! - the graphics store: real PNG icons over Kitty/Sixel/iTerm2 protocols
//!   when the terminal supports one
//!
//! The graphics path loads whatever the configured base resolves to locally.
//! A remote `http(s)` base belongs to whichever process mirrors the assets;
//! we skip it. Load failures render nothing - no substitute image.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;

/// Compose the source for an icon asset: `{base}{key}.png`.
///
/// The base comes from process-wide configuration; the result is handed to
/// the loading layer as-is.
pub fn icon_url(base: &str, key: &str) -> String {
    format!("{base}{key}.png")
}

/// Cell glyph for a condition key.
///
/// Keys follow the forecast feed's vocabulary. Unknown keys get a neutral
/// dot rather than failing.
pub fn glyph(key: &str) -> &'static str {
    match key {
        "clear-day" => "\u{2600}",           // ☀
        "clear-night" => "\u{263D}",         // ☽
        "partly-cloudy-day" => "\u{26C5}",   // ⛅
        "partly-cloudy-night" => "\u{2601}", // ☁
        "cloudy" => "\u{2601}",              // ☁
        "rain" => "\u{2602}",                // ☂
        "sleet" => "\u{2614}",               // ☔
        "snow" => "\u{2744}",                // ❄
        "wind" => "\u{2248}",                // ≈
        "fog" => "\u{2261}",                 // ≡
        _ => "\u{00B7}",                     // ·
    }
}

/// Icon store - loads and caches graphics-protocol icons.
///
/// Must be created once at startup before entering raw mode, because the
/// protocol query talks to the terminal over stdio.
pub struct IconStore {
    /// The picker determines the graphics protocol and font size
    picker: Option<Picker>,
    /// Cache of loaded icon protocols by icon key
    cache: HashMap<String, Arc<Mutex<StatefulProtocol>>>,
    /// Whether graphics are supported
    graphics_supported: bool,
}

impl IconStore {
    /// Create a new icon store by querying the terminal.
    /// MUST be called before entering raw mode / alternate screen.
    pub fn new() -> Self {
        let picker = match Picker::from_query_stdio() {
            Ok(p) => {
                tracing::info!("Graphics protocol detected: {:?}", p.protocol_type());
                Some(p)
            }
            Err(e) => {
                tracing::debug!("No graphics protocol available: {}", e);
                None
            }
        };

        let graphics_supported = picker.is_some();

        Self {
            picker,
            cache: HashMap::new(),
            graphics_supported,
        }
    }

    /// A store that never loads anything (`--no-graphics`, tests).
    pub fn disabled() -> Self {
        Self {
            picker: None,
            cache: HashMap::new(),
            graphics_supported: false,
        }
    }

    /// Check if graphics icons are supported
    pub fn supports_graphics(&self) -> bool {
        self.graphics_supported
    }

    /// Load the icon for a condition key, returning a cached protocol if
    /// available.
    ///
    /// The source is composed with [`icon_url`]; only locally resolvable
    /// bases are loaded. Returns `None` on any failure - the caller renders
    /// without an image and never learns why.
    pub fn load(&mut self, base: &str, key: &str) -> Option<Arc<Mutex<StatefulProtocol>>> {
        if let Some(cached) = self.cache.get(key) {
            return Some(cached.clone());
        }

        let picker = self.picker.as_mut()?;

        let source = icon_url(base, key);
        let path = local_icon_path(&source)?;

        let dyn_img = match image::open(&path) {
            Ok(img) => img,
            Err(e) => {
                tracing::debug!("Failed to load icon {}: {}", path.display(), e);
                return None;
            }
        };

        let protocol = picker.new_resize_protocol(dyn_img);
        let arc = Arc::new(Mutex::new(protocol));

        self.cache.insert(key.to_string(), arc.clone());

        Some(arc)
    }

    /// Get a cached icon protocol
    pub fn get_cached(&self, key: &str) -> Option<Arc<Mutex<StatefulProtocol>>> {
        self.cache.get(key).cloned()
    }

    /// Clear the icon cache
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for IconStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve an icon source to a local filesystem path.
///
/// `http(s)` sources are not fetched here; `file://` prefixes and `~` are
/// expanded.
fn local_icon_path(source: &str) -> Option<PathBuf> {
    if source.starts_with("http://") || source.starts_with("https://") {
        tracing::debug!("Skipping remote icon source {source}");
        return None;
    }

    let stripped = source.strip_prefix("file://").unwrap_or(source);
    let expanded = shellexpand::tilde(stripped);
    Some(PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url_composition() {
        assert_eq!(
            icon_url("https://assets.example.edu/weather-icons/", "clear-day"),
            "https://assets.example.edu/weather-icons/clear-day.png"
        );
        assert_eq!(
            icon_url("/var/cache/icons/", "rain"),
            "/var/cache/icons/rain.png"
        );
    }

    #[test]
    fn test_icon_url_is_not_validated() {
        // Garbage in, garbage out - validation belongs to the loader.
        assert_eq!(icon_url("", ""), ".png");
        assert_eq!(icon_url("base", "week end"), "baseweek end.png");
    }

    #[test]
    fn test_glyph_known_keys() {
        assert_eq!(glyph("clear-day"), "\u{2600}");
        assert_eq!(glyph("rain"), "\u{2602}");
        assert_eq!(glyph("fog"), "\u{2261}");
    }

    #[test]
    fn test_glyph_unknown_key_falls_back() {
        assert_eq!(glyph("volcanic-ash"), "\u{00B7}");
        assert_eq!(glyph(""), "\u{00B7}");
    }

    #[test]
    fn test_local_icon_path_rejects_remote() {
        assert!(local_icon_path("https://example.edu/x.png").is_none());
        assert!(local_icon_path("http://example.edu/x.png").is_none());
    }

    #[test]
    fn test_local_icon_path_strips_file_scheme() {
        let path = local_icon_path("file:///var/cache/icons/rain.png").unwrap();
        assert_eq!(path, PathBuf::from("/var/cache/icons/rain.png"));
    }

    #[test]
    fn test_disabled_store_loads_nothing() {
        let mut store = IconStore::disabled();
        assert!(!store.supports_graphics());
        assert!(store.load("/tmp/", "clear-day").is_none());
        assert!(store.get_cached("clear-day").is_none());
    }
}
