use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::Result;

type Sink = Box<dyn Write + Send>;

/// Output stream shared by every animation job.
///
/// The sink and its guard travel together; each method holds the lock for
/// exactly one write followed by a flush. A job that panics mid-write does
/// not lock the others out.
#[derive(Clone)]
pub struct SharedOutput {
    sink: Arc<Mutex<Sink>>,
}

impl SharedOutput {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Shared handle over process standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Writes one display unit and flushes it before releasing the guard.
    pub fn write_unit(&self, unit: &str) -> Result<()> {
        self.write_flushed(unit)
    }

    /// Terminates the calling job's line.
    pub fn finish_line(&self) -> Result<()> {
        self.write_flushed("\n")
    }

    /// Writes a pre-rendered block, such as the header, in one critical section.
    pub fn write_block(&self, block: &str) -> Result<()> {
        self.write_flushed(block)
    }

    fn write_flushed(&self, text: &str) -> Result<()> {
        let mut sink = self.lock();
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SharedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedOutput").finish()
    }
}

/// Cloneable in-memory sink. Every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, replacing invalid UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .bytes
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "buffer sink poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::SingError;

    /// Sink that panics on `!` and otherwise forwards to a buffer.
    struct PanicOnBang(BufferSink);

    impl Write for PanicOnBang {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf == b"!" {
                panic!("sink exploded");
            }
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.0.flush()
        }
    }

    #[test]
    fn clones_share_one_sink() {
        let buffer = BufferSink::new();
        let output = SharedOutput::new(buffer.clone());
        let other = output.clone();

        output.write_unit("a").unwrap();
        other.write_unit("b").unwrap();
        output.finish_line().unwrap();

        assert_eq!(buffer.contents(), "ab\n");
    }

    #[test]
    fn keeps_writing_after_a_writer_panics() {
        let buffer = BufferSink::new();
        let output = SharedOutput::new(PanicOnBang(buffer.clone()));

        let crashed = {
            let output = output.clone();
            thread::spawn(move || output.write_unit("!")).join()
        };
        assert!(crashed.is_err());

        output.write_unit("ok").unwrap();
        output.finish_line().unwrap();
        assert_eq!(buffer.contents(), "ok\n");
    }

    #[test]
    fn surfaces_sink_errors() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let output = SharedOutput::new(Closed);
        let err = output.write_unit("x").unwrap_err();
        assert!(matches!(err, SingError::Io(ref io) if io.kind() == io::ErrorKind::BrokenPipe));
    }
}
