use ansi_term::Color::{Red, Yellow};
use ansi_term::Style as AnsiTermStyle;
use std::io::{Cursor, StderrLock, StdoutLock, Write};

pub enum OutputType {
    Standard,
    Error,
}

/// Output for writing to stdout/stderr, useful for regular CLI use
pub struct RegularOutput<'a> {
    pub stdout_lock: StdoutLock<'a>,
    pub stderr_lock: StderrLock<'a>,
}

/// Output for writing to cursors, useful for tests
#[derive(Default)]
pub struct CursorOutput {
    pub standard_cursor: Cursor<Vec<u8>>,
    pub error_cursor: Cursor<Vec<u8>>,
}

impl CursorOutput {
    pub fn new() -> CursorOutput {
        CursorOutput {
            standard_cursor: Cursor::new(Vec::new()),
            error_cursor: Cursor::new(Vec::new()),
        }
    }

    pub fn standard_as_string(&self) -> String {
        String::from_utf8_lossy(self.standard_cursor.get_ref()).into_owned()
    }

    pub fn error_as_string(&self) -> String {
        String::from_utf8_lossy(self.error_cursor.get_ref()).into_owned()
    }
}

pub trait CliWriter {
    fn nl(&mut self, output_type: OutputType);
    fn write(&mut self, s: impl ToString, output_type: OutputType);
    fn writeln(&mut self, s: impl ToString, output_type: OutputType);
}

#[derive(Clone)]
pub struct Style;

impl Style {
    pub fn warning(s: impl ToString) -> String {
        Yellow.normal().paint(s.to_string()).to_string()
    }

    pub fn error(s: impl ToString) -> String {
        Red.normal().paint(s.to_string()).to_string()
    }

    pub fn bold(s: impl ToString) -> String {
        AnsiTermStyle::new().bold().paint(s.to_string()).to_string()
    }
}

// A broken stdout/stderr pipe leaves nowhere to report to, so write errors are dropped.
fn write_flush(out: &mut impl Write, bytes: &[u8]) {
    let _ = out.write_all(bytes).and_then(|_| out.flush());
}

impl<'a> CliWriter for RegularOutput<'a> {
    fn nl(&mut self, output_type: OutputType) {
        self.write("\n", output_type);
    }

    fn write(&mut self, s: impl ToString, output_type: OutputType) {
        match output_type {
            OutputType::Standard => write_flush(&mut self.stdout_lock, s.to_string().as_bytes()),
            OutputType::Error => write_flush(&mut self.stderr_lock, s.to_string().as_bytes()),
        }
    }

    fn writeln(&mut self, s: impl ToString, output_type: OutputType) {
        self.write(format!("{}\n", s.to_string()), output_type);
    }
}

impl CliWriter for CursorOutput {
    fn nl(&mut self, output_type: OutputType) {
        self.write("\n", output_type);
    }

    fn write(&mut self, s: impl ToString, output_type: OutputType) {
        match output_type {
            OutputType::Standard => {
                write_flush(&mut self.standard_cursor, s.to_string().as_bytes())
            }
            OutputType::Error => write_flush(&mut self.error_cursor, s.to_string().as_bytes()),
        }
    }

    fn writeln(&mut self, s: impl ToString, output_type: OutputType) {
        self.write(format!("{}\n", s.to_string()), output_type);
    }
}
