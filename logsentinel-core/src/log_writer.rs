use std::{
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

/// Destination for formatted log lines.
///
/// `out` receives INFO and WARNING lines, `err` receives ERROR lines.
/// Implementations append the line terminator themselves and swallow write failures.
pub trait LogWriter: Send {
    fn out(&mut self, line: &str);
    fn err(&mut self, line: &str);
    fn flush(&mut self);
}

impl<W: LogWriter + ?Sized> LogWriter for Box<W> {
    fn out(&mut self, line: &str) {
        (**self).out(line)
    }

    fn err(&mut self, line: &str) {
        (**self).err(line)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

/// Writes to the process' standard output and standard error.
#[derive(Default, Debug, Clone, Copy)]
pub struct StdStreams;

impl LogWriter for StdStreams {
    fn out(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();
    }

    fn err(&mut self, line: &str) {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{line}").ok();
        stderr.flush().ok();
    }

    fn flush(&mut self) {
        std::io::stdout().flush().ok();
        std::io::stderr().flush().ok();
    }
}

/// In-memory capture of both streams. Clones share the same buffers.
#[derive(Default, Debug, Clone)]
pub struct MemoryWriter {
    stdout: Arc<Mutex<Vec<u8>>>,
    stderr: Arc<Mutex<Vec<u8>>>,
}

fn read_buffer(buffer: &Mutex<Vec<u8>>) -> String {
    let buffer = buffer.lock().unwrap_or_else(PoisonError::into_inner);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn append_line(buffer: &Mutex<Vec<u8>>, line: &str) {
    let mut buffer = buffer.lock().unwrap_or_else(PoisonError::into_inner);
    writeln!(buffer, "{line}").ok();
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to the stdout side so far.
    pub fn stdout(&self) -> String {
        read_buffer(&self.stdout)
    }

    /// Everything written to the stderr side so far.
    pub fn stderr(&self) -> String {
        read_buffer(&self.stderr)
    }

    pub fn clear(&self) {
        self.stdout
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.stderr
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogWriter for MemoryWriter {
    fn out(&mut self, line: &str) {
        append_line(&self.stdout, line);
    }

    fn err(&mut self, line: &str) {
        append_line(&self.stderr, line);
    }

    fn flush(&mut self) {}
}

#[test]
fn test_memory_writer() {
    let capture = MemoryWriter::new();
    let mut writer = capture.clone();
    writer.out("Hello, world!");
    writer.err("rust is awesome !");
    writer.out("test");
    assert_eq!(capture.stdout(), "Hello, world!\ntest\n");
    assert_eq!(capture.stderr(), "rust is awesome !\n");
    capture.clear();
    assert_eq!(capture.stdout(), "");
    assert_eq!(capture.stderr(), "");
}
