use std::thread;

use crate::{
    animate, render_header, AppConfig, ConsoleProfile, LyricLine, LyricSheet, Result,
    SharedOutput, SingError,
};

/// Runs a whole song: optional header first, then every line concurrently.
#[derive(Debug)]
pub struct Conductor {
    sheet: LyricSheet,
    config: AppConfig,
    console: ConsoleProfile,
    output: SharedOutput,
}

impl Conductor {
    /// Creates a conductor writing to stdout with the detected console profile.
    pub fn new(sheet: LyricSheet, config: AppConfig) -> Self {
        Self {
            sheet,
            config,
            console: ConsoleProfile::detect(),
            output: SharedOutput::stdout(),
        }
    }

    pub fn with_output(mut self, output: SharedOutput) -> Self {
        self.output = output;
        self
    }

    pub fn with_console(mut self, console: ConsoleProfile) -> Self {
        self.console = console;
        self
    }

    /// Blocks until every line has finished animating.
    pub fn run(&self) -> Result<()> {
        if self.config.show_header {
            render_header(
                self.sheet.banner.as_slice(),
                self.console.width,
                self.console.styled,
                &self.output,
            )?;
        }

        sing_lines(&self.sheet.lines, self.config.scale, &self.output)
    }
}

/// Animates each line on its own thread and joins them all.
///
/// Threads are started in input order. A failed or panicked line does not
/// stop its siblings; once all have finished, the failures are reported as
/// [`SingError::Jobs`].
pub fn sing_lines(lines: &[LyricLine], scale: usize, output: &SharedOutput) -> Result<()> {
    let total = lines.len();
    tracing::debug!(total, scale, "starting song");

    let failures: Vec<SingError> = thread::scope(|scope| {
        let jobs: Vec<_> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let spawned = thread::Builder::new()
                    .name(format!("lyric-{index}"))
                    .spawn_scoped(scope, move || animate(line, scale, output));
                (index, spawned)
            })
            .collect();

        jobs.into_iter()
            .filter_map(|(index, spawned)| {
                let outcome = match spawned {
                    Ok(handle) => handle
                        .join()
                        .unwrap_or_else(|_| Err(SingError::msg("animation thread panicked"))),
                    Err(error) => Err(error.into()),
                };
                outcome.err().map(|error| {
                    tracing::warn!(line = index, %error, "line failed");
                    SingError::for_line(index, error)
                })
            })
            .collect()
    });

    let failed = failures.len();
    match failures.into_iter().next() {
        None => {
            tracing::debug!(total, "song finished");
            Ok(())
        }
        Some(first) => Err(SingError::Jobs {
            failed,
            total,
            first: Box::new(first),
        }),
    }
}
