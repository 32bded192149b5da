use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lyric_singer_core::{AppConfig, Conductor, LyricSheet};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("lyric-singer: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> lyric_singer_core::Result<()> {
    let config = AppConfig::new(cli.scale, !cli.no_header);
    let sheet = match &cli.lyrics {
        Some(path) => LyricSheet::load(path)?,
        None => LyricSheet::builtin(),
    };

    tracing::info!(scale = config.scale, lines = sheet.lines.len(), "singing");
    Conductor::new(sheet, config).run()
}

// Logs go to stderr; stdout carries the animation.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Sing song lyrics in the terminal", long_about = None)]
struct Cli {
    /// Pad each character horizontally to simulate larger text.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    scale: i64,
    /// Do not print the ASCII header.
    #[arg(long)]
    no_header: bool,
    /// JSON lyric sheet to sing instead of the built-in song.
    #[arg(short, long)]
    lyrics: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_song() {
        let cli = Cli::parse_from(["lyric-singer"]);
        assert_eq!(cli.scale, 1);
        assert!(!cli.no_header);
        assert!(cli.lyrics.is_none());
    }

    #[test]
    fn accepts_negative_scale() {
        let cli = Cli::parse_from(["lyric-singer", "--scale", "-2", "--no-header"]);
        let config = AppConfig::new(cli.scale, !cli.no_header);
        assert_eq!(config.scale, 1);
        assert!(!config.show_header);
    }
}
