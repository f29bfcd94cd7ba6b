// Fake terminal that types a command, lets it sit, then moves on to the next
// one, round and round.

use crate::{dom, schedule};
use wasm_bindgen::JsValue;
use web_sys::Document;

pub const DEFAULT_COMMANDS: &[&str] = &[
    "npm run build",
    "cargo test --release",
    "docker compose up -d",
    "git push origin main",
];
pub const TICK_MS: i32 = 60;
pub const HOLD_TICKS: u32 = 40;

pub struct TerminalTyper {
    commands: Vec<String>,
    current: usize,
    typed: usize,
    held: u32,
}

impl TerminalTyper {
    pub fn new(commands: Vec<String>) -> Self {
        let commands = if commands.is_empty() {
            DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect()
        } else {
            commands
        };
        TerminalTyper {
            commands,
            current: 0,
            typed: 0,
            held: 0,
        }
    }

    // `data-commands="ls -la|make deploy"`
    pub fn parse_commands(raw: Option<&str>) -> Vec<String> {
        raw.map(|raw| {
            raw.split('|')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
    }

    pub fn current_command(&self) -> &str {
        &self.commands[self.current]
    }

    /// Advances one tick and returns the text the terminal line should show.
    pub fn tick(&mut self) -> &str {
        let command = &self.commands[self.current];
        if let Some(c) = command[self.typed..].chars().next() {
            self.typed += c.len_utf8();
        } else if self.held < HOLD_TICKS {
            self.held += 1;
        } else {
            self.current = (self.current + 1) % self.commands.len();
            self.typed = 0;
            self.held = 0;
        }
        &self.commands[self.current][..self.typed]
    }
}

pub fn attach(document: &Document) -> Result<(), JsValue> {
    for element in dom::select_all(document, ".terminal-text") {
        let commands = TerminalTyper::parse_commands(element.get_attribute("data-commands").as_deref());
        let mut typer = TerminalTyper::new(commands);
        schedule::every(TICK_MS, move || {
            element.set_text_content(Some(typer.tick()));
            true
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typer(commands: &[&str]) -> TerminalTyper {
        TerminalTyper::new(commands.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn types_holds_then_moves_on() {
        let mut t = typer(&["ab", "c"]);
        assert_eq!(t.tick(), "a");
        assert_eq!(t.tick(), "ab");
        for _ in 0..HOLD_TICKS {
            assert_eq!(t.tick(), "ab");
        }
        assert_eq!(t.tick(), "");
        assert_eq!(t.current_command(), "c");
        assert_eq!(t.tick(), "c");
    }

    #[test]
    fn wraps_back_to_first_command() {
        let mut t = typer(&["x", "y"]);
        let per_command = 1 + HOLD_TICKS as usize + 1;
        for _ in 0..(per_command * 2) {
            t.tick();
        }
        assert_eq!(t.current_command(), "x");
    }

    #[test]
    fn empty_list_falls_back_to_defaults() {
        let t = TerminalTyper::new(Vec::new());
        assert_eq!(t.current_command(), DEFAULT_COMMANDS[0]);
    }

    #[test]
    fn parses_pipe_separated_commands() {
        assert_eq!(
            TerminalTyper::parse_commands(Some(" ls -la | | make deploy ")),
            vec!["ls -la".to_string(), "make deploy".to_string()]
        );
        assert!(TerminalTyper::parse_commands(None).is_empty());
    }
}
