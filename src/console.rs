// Console abstraction used by the controller.
//
// `Terminal` talks to the real terminal: `dialoguer::Input` reads a line,
// `crossterm` clears the screen and sets the window title. `ScriptedConsole`
// (tests and the `test-support` feature only) replays canned answers and
// records everything printed, so the whole menu loop runs without a TTY.

use anyhow::Result;
use crossterm::{cursor::MoveTo, execute, terminal};
use dialoguer::console::Term;
use dialoguer::Input;
use std::io::{self, Write};

/// Line-oriented terminal I/O.
pub trait Console {
    /// Show `prompt` and return the raw line the user typed. Empty input is
    /// allowed; validation is the caller's job.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print one line of output.
    fn print(&mut self, line: &str) -> Result<()>;

    /// Clear the screen before drawing a new page.
    fn clear(&mut self) -> Result<()>;

    /// Show `message` as-is and wait for Enter. Whatever is typed is
    /// discarded.
    fn pause(&mut self, message: &str) -> Result<()> {
        self.read_line(message)?;
        Ok(())
    }
}

/// Interactive console backed by stdin/stdout.
#[derive(Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Terminal
    }

    /// Set the terminal window title. Not every terminal supports it, so a
    /// failure here is only logged.
    pub fn set_title(&mut self, title: &str) {
        if let Err(e) = execute!(io::stdout(), terminal::SetTitle(title)) {
            log::debug!("could not set terminal title: {}", e);
        }
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        // `interact_text` renders "<prompt>: " and returns the typed line.
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn print(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            MoveTo(0, 0)
        )?;
        Ok(())
    }

    fn pause(&mut self, message: &str) -> Result<()> {
        // No dialoguer prompt here: it would append ": " to the message.
        let term = Term::stdout();
        term.write_str(message)?;
        term.read_line()?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use scripted::ScriptedConsole;

#[cfg(any(test, feature = "test-support"))]
mod scripted {
    use super::Console;
    use anyhow::{bail, Result};
    use std::collections::VecDeque;

    /// Console that answers prompts from a fixed script.
    ///
    /// Reading past the end of the script is an error, so a test that forgets
    /// an answer fails instead of looping on a re-prompt.
    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        inputs: VecDeque<String>,
        output: Vec<String>,
        prompts: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new<I, S>(inputs: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            ScriptedConsole {
                inputs: inputs.into_iter().map(Into::into).collect(),
                output: Vec::new(),
                prompts: Vec::new(),
            }
        }

        /// Every line printed so far.
        pub fn output(&self) -> &[String] {
            &self.output
        }

        /// Every prompt shown so far, in order.
        pub fn prompts(&self) -> &[String] {
            &self.prompts
        }

        /// Number of scripted answers not yet consumed.
        pub fn remaining(&self) -> usize {
            self.inputs.len()
        }

        /// True if any printed line contains `needle`.
        pub fn printed(&self, needle: &str) -> bool {
            self.output.iter().any(|l| l.contains(needle))
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            match self.inputs.pop_front() {
                Some(line) => Ok(line),
                None => bail!("scripted input exhausted at prompt '{}'", prompt),
            }
        }

        fn print(&mut self, line: &str) -> Result<()> {
            self.output.push(line.to_string());
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_and_records() {
        let mut console = ScriptedConsole::new(["first", ""]);
        assert_eq!(console.read_line("A").unwrap(), "first");
        assert_eq!(console.read_line("B").unwrap(), "");
        console.print("hello").unwrap();
        assert_eq!(console.prompts(), ["A", "B"]);
        assert!(console.printed("hell"));
        assert_eq!(console.remaining(), 0);
        assert!(console.read_line("C").is_err());
    }
}
