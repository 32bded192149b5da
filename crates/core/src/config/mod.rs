use serde::{Deserialize, Serialize};

/// Column count used when the terminal cannot report its size.
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Largest accepted scale. A unit is at most this many columns wide.
pub const MAX_SCALE: usize = 64;

/// Top-level configuration structure for a song run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Horizontal scale factor, always at least 1.
    pub scale: usize,
    pub show_header: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scale: 1,
            show_header: true,
        }
    }
}

impl AppConfig {
    /// Builds a configuration from raw user input, clamping the scale to
    /// `1..=MAX_SCALE`.
    pub fn new(raw_scale: i64, show_header: bool) -> Self {
        let scale = if raw_scale < 1 {
            tracing::warn!(raw_scale, "scale below 1, using 1");
            1
        } else if raw_scale > MAX_SCALE as i64 {
            tracing::warn!(raw_scale, max = MAX_SCALE, "scale too large, using maximum");
            MAX_SCALE
        } else {
            raw_scale as usize
        };

        Self { scale, show_header }
    }

    pub fn default_terminal_width() -> u16 {
        DEFAULT_TERMINAL_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_non_positive_scale() {
        assert_eq!(AppConfig::new(-4, true).scale, 1);
        assert_eq!(AppConfig::new(0, false).scale, 1);
        assert_eq!(AppConfig::new(3, false).scale, 3);
    }

    #[test]
    fn clamps_oversized_scale() {
        assert_eq!(AppConfig::new(i64::MAX, false).scale, MAX_SCALE);
        assert_eq!(AppConfig::new(MAX_SCALE as i64 + 1, true).scale, MAX_SCALE);
        assert_eq!(AppConfig::new(MAX_SCALE as i64, true).scale, MAX_SCALE);
    }

    #[test]
    fn defaults_show_header_at_unit_scale() {
        let config = AppConfig::default();
        assert_eq!(config.scale, 1);
        assert!(config.show_header);
    }
}
