use std::io::{BufRead, ErrorKind, Write};

/// Asks the user a yes/no question.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationPrompt {
    /// Shows `question` and returns whether the answer was affirmative.
    fn confirm(&mut self, question: &str) -> std::io::Result<bool>;
}

/// Prompts on a writer and reads the answer as one line from a reader,
/// normally the terminal's stdout and stdin.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmationPrompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> std::io::Result<bool> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "no answer given",
            ));
        }
        Ok(is_affirmative(&answer))
    }
}

/// Confirms everything; backs `delete --yes`.
pub struct AssumeYes;

impl ConfirmationPrompt for AssumeYes {
    fn confirm(&mut self, _question: &str) -> std::io::Result<bool> {
        Ok(true)
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
