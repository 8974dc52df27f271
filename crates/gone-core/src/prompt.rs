//! Yes/no confirmation for deleting the checked-out branch.

use std::io::{self, BufRead, Write};

/// Asks the user whether a checked-out gone branch may be deleted.
pub trait Confirm {
    /// Returns `true` to delete `branch`, `false` to keep it.
    ///
    /// Blocks until a definitive answer is given.
    fn confirm_delete_checked_out(&mut self, branch: &str) -> io::Result<bool>;
}

impl<T: Confirm + ?Sized> Confirm for &mut T {
    fn confirm_delete_checked_out(&mut self, branch: &str) -> io::Result<bool> {
        (**self).confirm_delete_checked_out(branch)
    }
}

/// Text shown when asking about `branch`.
pub fn checked_out_prompt(branch: &str) -> String {
    format!(
        "the {branch} branch has been deleted from the remote, but is checked out locally. \
         Would you like to delete the branch? (y/n) "
    )
}

/// Interpret a response: `Some(true)` for y/yes, `Some(false)` for n/no.
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Line-oriented confirmation over any reader/writer pair.
///
/// Re-prompts until the reader yields a recognized answer. End of input is
/// reported as `UnexpectedEof`.
pub struct LineConfirm<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl LineConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Confirm on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm_delete_checked_out(&mut self, branch: &str) -> io::Result<bool> {
        let prompt = checked_out_prompt(branch);
        let mut line = String::new();
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before an answer was given",
                ));
            }

            if let Some(answer) = parse_answer(&line) {
                return Ok(answer);
            }
            writeln!(self.writer, "Please answer y or n.")?;
        }
    }
}
