use std::thread;

use crate::{build_units, is_complex_script, segment, LyricLine, Result, SharedOutput};

/// Types out one lyric line, a display unit at a time.
///
/// Sleeps for the line's start delay, then writes and flushes each unit
/// under the output guard and sleeps for the char delay outside of it. The
/// trailing newline is not followed by a delay. The first failed write
/// aborts the line.
pub fn animate(line: &LyricLine, scale: usize, output: &SharedOutput) -> Result<()> {
    thread::sleep(line.start_delay);

    let clusters = segment(&line.text);
    let units = build_units(&clusters, scale, is_complex_script(&line.text));
    tracing::debug!(units = units.len(), "line started");

    for unit in &units {
        output.write_unit(unit)?;
        thread::sleep(line.char_delay);
    }

    output.finish_line()?;
    tracing::debug!("line finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::BufferSink;

    #[test]
    fn writes_scaled_units_and_newline() {
        let buffer = BufferSink::new();
        let output = SharedOutput::new(buffer.clone());
        let line = LyricLine::new("a b", Duration::ZERO, Duration::ZERO);

        animate(&line, 2, &output).unwrap();

        assert_eq!(buffer.contents(), "a  b \n");
    }

    #[test]
    fn myanmar_text_is_written_verbatim() {
        let buffer = BufferSink::new();
        let output = SharedOutput::new(buffer.clone());
        let text = "\u{1019}\u{103A} \u{1075}";
        let line = LyricLine::new(text, Duration::ZERO, Duration::ZERO);

        animate(&line, 4, &output).unwrap();

        assert_eq!(buffer.contents(), format!("{text}\n"));
    }

    #[test]
    fn logs_line_start_and_finish() {
        let logs = BufferSink::new();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let output = SharedOutput::new(BufferSink::new());
        let line = LyricLine::new("ab", Duration::ZERO, Duration::ZERO);

        tracing::subscriber::with_default(subscriber, || animate(&line, 1, &output)).unwrap();

        let logs = logs.contents();
        assert!(logs.contains("line started"), "missing start event in {logs:?}");
        assert!(logs.contains("units=2"));
        assert!(logs.contains("line finished"), "missing finish event in {logs:?}");
    }

    #[test]
    fn waits_for_start_and_per_unit_delays() {
        let output = SharedOutput::new(BufferSink::new());
        let line = LyricLine::new("abc", Duration::from_millis(30), Duration::from_millis(10));

        let started = Instant::now();
        animate(&line, 1, &output).unwrap();

        assert!(started.elapsed() >= Duration::from_millis(60));
    }
}
