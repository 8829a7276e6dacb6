use crate::error::ConsoleError;
use std::fmt::Display;
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// Line-oriented terminal: one input stream, an output stream for prompts and
/// results, and an error stream for diagnostics.
pub struct Terminal<R, W, E> {
    input: R,
    out: W,
    err: E,
}

/// The terminal of a real process.
pub type StdTerminal = Terminal<StdinLock<'static>, Stdout, Stderr>;

/// Builds a terminal over the process's standard streams.
pub fn stdio() -> StdTerminal {
    Terminal::new(io::stdin().lock(), io::stdout(), io::stderr())
}

impl<R: BufRead, W: Write, E: Write> Terminal<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Prints `label` without a newline and reads the answer.
    pub fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Reads one raw line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a bad byte
    /// reaches the caller as ordinary (malformed) input. Returns
    /// `ConsoleError::InputClosed` at end of input.
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    /// Writes one diagnostic line to the error stream.
    pub fn warn(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.err, "{message}")?;
        self.err.flush()?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    #[test]
    fn lines_keep_their_spaces_but_lose_terminators() {
        let mut term = terminal(" padded \r\nplain\nlast");
        assert_eq!(term.read_line().unwrap(), " padded ");
        assert_eq!(term.read_line().unwrap(), "plain");
        assert_eq!(term.read_line().unwrap(), "last");
        assert!(matches!(term.read_line(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn an_empty_line_is_not_end_of_input() {
        let mut term = terminal("\n");
        assert_eq!(term.read_line().unwrap(), "");
        assert!(matches!(term.read_line(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn invalid_utf8_is_replaced_instead_of_failing() {
        let mut term = Terminal::new(
            Cursor::new(b"J\xf6rg\r\n\xff\xfe\nnext\n".to_vec()),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(term.read_line().unwrap(), "J\u{FFFD}rg");
        assert_eq!(term.read_line().unwrap(), "\u{FFFD}\u{FFFD}");
        assert_eq!(term.read_line().unwrap(), "next");
    }

    #[test]
    fn prompts_go_to_output_and_warnings_to_error() {
        let mut term = terminal("houston\n");
        assert_eq!(term.prompt("Username: ").unwrap(), "houston");
        term.say("done").unwrap();
        term.warn("Database error: boom").unwrap();

        let (_, out, err) = term.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Username: done\n");
        assert_eq!(String::from_utf8(err).unwrap(), "Database error: boom\n");
    }
}
