//! Line oriented user I/O.
//!
//! Every message shown to the user is mirrored into the [`Journal`], a plain text log
//! that is truncated each time the program starts.

use crate::error::ConsoleError;
use std::{
    fs::File,
    io::{self, BufRead, Write},
    path::Path,
};

pub type ConsoleResult<T> = Result<T, ConsoleError>;

pub struct Journal {
    sink: Box<dyn Write>,
    failed: bool,
}

impl Journal {
    pub const HEADER: &'static str = "=== Image Processing Log ===";

    /// Truncates `path` and writes the header line.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let mut file = File::create(path.as_ref())?;
        writeln!(file, "{}", Self::HEADER)?;
        Ok(Self::new(Box::new(file)))
    }

    pub fn new(sink: Box<dyn Write>) -> Self {
        Self {
            sink,
            failed: false,
        }
    }

    /// A journal that drops everything.
    pub fn disabled() -> Self {
        Self::new(Box::new(io::sink()))
    }

    pub fn append(&mut self, line: &str) {
        if let Err(e) = writeln!(self.sink, "{line}") {
            // Only report the first failure, the session carries on without a journal
            if !self.failed {
                log::warn!("journal write failed: {e}");
                self.failed = true;
            }
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    journal: Journal,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, journal: Journal) -> Self {
        Self {
            input,
            output,
            journal,
        }
    }

    /// Prints a message and records it in the journal.
    pub fn say(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{message}")?;
        self.journal.append(message);
        Ok(())
    }

    /// Prints `text` and reads one line of input without its line terminator.
    pub fn prompt(&mut self, text: &str) -> ConsoleResult<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Cursor};

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Journal::disabled(),
        )
    }

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut console = console("first\r\nsecond\nthird");
        assert_eq!(console.prompt("> ").unwrap(), "first");
        assert_eq!(console.prompt("> ").unwrap(), "second");
        assert_eq!(console.prompt("> ").unwrap(), "third");
        assert!(matches!(console.prompt("> "), Err(ConsoleError::Closed)));
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace() {
        let mut console = console("  a b  \n");
        assert_eq!(console.prompt("> ").unwrap(), "  a b  ");
    }

    #[test]
    fn test_say_writes_output() {
        let mut console = console("");
        console.say("hello").unwrap();
        console.prompt("name: ").unwrap_err();

        let output = String::from_utf8(console.output().clone()).unwrap();
        assert_eq!(output, "hello\nname: ");
    }

    #[test]
    fn test_journal_create_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        fs::write(&path, "stale content\n").unwrap();

        {
            let mut journal = Journal::create(&path).unwrap();
            journal.append("one");
            journal.append("two");
        }

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("{}\none\ntwo\n", Journal::HEADER));
    }

    #[test]
    fn test_say_is_journaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");

        let mut console = Console::new(
            Cursor::new(Vec::new()),
            Vec::new(),
            Journal::create(&path).unwrap(),
        );
        console.say("menu line").unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("menu line\n"));
    }
}
