use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::AppConfig;

/// What the process learned about its standard output at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleProfile {
    /// Whether ANSI styling should be emitted.
    pub styled: bool,
    /// Terminal width in columns.
    pub width: u16,
}

impl ConsoleProfile {
    /// Probes stdout once per process and returns the cached result.
    ///
    /// Never fails: an unknown width falls back to the default and styling
    /// is dropped when stdout is not a terminal or `NO_COLOR` is set.
    pub fn detect() -> Self {
        static PROFILE: OnceLock<ConsoleProfile> = OnceLock::new();
        *PROFILE.get_or_init(Self::probe)
    }

    fn probe() -> Self {
        let styled = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        let width = terminal_width();
        tracing::debug!(styled, width, "detected console");
        Self { styled, width }
    }
}

/// Current terminal width, or the default when it cannot be queried.
pub fn terminal_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => columns,
        Ok(_) => AppConfig::default_terminal_width(),
        Err(error) => {
            tracing::debug!(%error, "terminal size unavailable, using default width");
            AppConfig::default_terminal_width()
        }
    }
}
