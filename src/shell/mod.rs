pub mod render;

use crate::app::App;
use crate::app::actions::Action;
use crate::app::events::Outcome;
use crate::input::{self, Input};
use anyhow::Context;
use std::io::{BufRead, Write};

/// Where commands come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A person at a prompt; search results offer to play a match.
    Interactive,
    /// A script file; no prompt, `//` lines are comments.
    Script,
}

/// Reads commands line by line, dispatches them and prints the results.
pub struct Shell<R, W> {
    app: App,
    input: R,
    out: W,
    mode: Mode,
    prompt: String,
    json: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(app: App, input: R, out: W, mode: Mode) -> Self {
        Self {
            app,
            input,
            out,
            mode,
            prompt: "> ".to_string(),
            json: false,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Print one JSON object per result instead of text.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.interactive() {
            writeln!(self.out, "Welcome to reel, what would you like to do?")?;
            writeln!(
                self.out,
                "Enter HELP for list of available commands or EXIT to terminate."
            )?;
        }

        while let Some(line) = self.read_line(true)? {
            if self.mode == Mode::Script && line.trim_start().starts_with("//") {
                continue;
            }

            match input::parse_line(&line) {
                Ok(None) => {}
                Ok(Some(Input::Exit)) => break,
                Ok(Some(Input::Help)) => writeln!(self.out, "{}", input::HELP_TEXT)?,
                Ok(Some(Input::Action(action))) => self.execute(action)?,
                Err(e) => {
                    tracing::debug!(error = %e, line = %line.trim(), "bad input");
                    writeln!(self.out, "{e}")?;
                }
            }
        }

        if self.interactive() {
            writeln!(
                self.out,
                "reel has now terminated its execution. Thank you and goodbye!"
            )?;
        }
        self.out.flush().context("flush output")?;
        Ok(())
    }

    fn execute(&mut self, action: Action) -> anyhow::Result<()> {
        let result = self.app.dispatch(action.clone());

        if self.json {
            let value = match &result {
                Ok(outcome) => serde_json::json!({ "ok": true, "result": outcome }),
                Err(e) => serde_json::json!({
                    "ok": false,
                    "error": e,
                    "message": render::error(&action, e),
                }),
            };
            writeln!(self.out, "{}", serde_json::to_string(&value)?)?;
            return Ok(());
        }

        match &result {
            Ok(outcome) => {
                for line in render::outcome(outcome) {
                    writeln!(self.out, "{line}")?;
                }
            }
            Err(e) => writeln!(self.out, "{}", render::error(&action, e))?,
        }

        if let Ok(Outcome::SearchResults { videos, .. }) = &result
            && self.interactive()
        {
            writeln!(
                self.out,
                "Would you like to play any of the above? If yes, specify the number of the video."
            )?;
            writeln!(
                self.out,
                "If your answer is not a valid number, we will assume it's a no."
            )?;
            let answer = self.read_line(false)?.unwrap_or_default();
            let chosen = answer
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| videos.get(i));
            if let Some(video) = chosen {
                self.execute(Action::Play(video.id.clone()))?;
            }
        }

        Ok(())
    }

    fn interactive(&self) -> bool {
        self.mode == Mode::Interactive
    }

    /// Next input line, or `None` at end of input.
    fn read_line(&mut self, show_prompt: bool) -> anyhow::Result<Option<String>> {
        if show_prompt && self.interactive() {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush().context("flush prompt")?;
        }

        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("read input")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
