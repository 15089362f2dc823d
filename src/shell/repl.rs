//! Read-evaluate-print loop.

use std::io::{BufRead, Write};

use crate::config::ShellConfig;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::session::SessionState;
use crate::ui::ShellTheme;

/// Input that ends the loop, compared case-insensitively.
pub const EXIT_COMMAND: &str = "exit";

/// Interactive host around an [`Evaluator`].
///
/// Holds the committed session state. A line's new state is committed only
/// when the whole evaluation succeeds.
pub struct Shell {
    evaluator: Evaluator,
    state: SessionState,
    config: ShellConfig,
    theme: ShellTheme,
}

impl Shell {
    pub fn new(
        evaluator: Evaluator,
        state: SessionState,
        config: ShellConfig,
        theme: ShellTheme,
    ) -> Self {
        Self {
            evaluator,
            state,
            config,
            theme,
        }
    }

    /// The committed session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Evaluate one line and commit its state on success.
    pub fn execute_line(&mut self, line: &str) -> Result<String> {
        let evaluation = self.evaluator.evaluate(line, &self.state)?;
        self.state = evaluation.state;
        Ok(evaluation.output)
    }

    /// The prompt for the current state.
    pub fn prompt(&self) -> String {
        let cwd = self.state.cwd().display().to_string();
        let cwd = self.config.show_cwd.then_some(cwd.as_str());
        self.theme.format_prompt(&self.config.prompt, cwd)
    }

    /// Run until `exit` or end of input.
    ///
    /// Command errors are printed and the loop continues; only I/O errors on
    /// `input` or `output` end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let mut lines = input.lines();

        loop {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;
            let line = line.trim();

            if line.eq_ignore_ascii_case(EXIT_COMMAND) {
                break;
            }

            match self.execute_line(line) {
                Ok(text) if text.is_empty() => {}
                Ok(text) => writeln!(output, "{}", text)?,
                Err(e) => {
                    tracing::debug!("command failed: {:?}", e);
                    writeln!(output, "{}", self.theme.format_error(&e.to_string()))?;
                }
            }
        }

        Ok(())
    }
}
