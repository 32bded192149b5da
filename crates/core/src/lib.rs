//! Core library for the Lyric Singer terminal animation.
//!
//! Lines of lyrics are split into base + combining mark clusters, optionally
//! padded to look larger, and typed out concurrently onto one shared output.
//! Each module owns one step of that pipeline; [`Conductor`] ties them
//! together.

pub mod animate;
pub mod cluster;
pub mod conductor;
pub mod config;
pub mod console;
pub mod error;
pub mod header;
pub mod lyrics;
pub mod output;
pub mod units;

pub use animate::animate;
pub use cluster::{is_combining, segment};
pub use conductor::{sing_lines, Conductor};
pub use config::{AppConfig, DEFAULT_TERMINAL_WIDTH, MAX_SCALE};
pub use console::{terminal_width, ConsoleProfile};
pub use error::{Result, SingError};
pub use header::{format_header, left_padding, render_header};
pub use lyrics::{LyricLine, LyricSheet, BUILTIN_BANNER};
pub use output::{BufferSink, SharedOutput};
pub use units::{build_units, is_complex_script};
