use crate::domain::model::{SelectorEvent, SelectorSnapshot};
use crate::domain::ports::{EventSource, SelectionView};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "Commands: 'min on|off', 'max on|off', 'min <value>', 'max <value>', \
'min-scale <0-1000>', 'max-scale <0-1000>', 'ok', 'cancel'";

/// Translate one input line into a selector event. Returns `None` for lines
/// that do not form a valid command.
pub fn parse_command(line: &str) -> Option<SelectorEvent> {
    let trimmed = line.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match (command, rest) {
        ("ok", "") => Some(SelectorEvent::Confirm),
        ("cancel", "") | ("quit", "") => Some(SelectorEvent::Cancel),
        ("min", "on") => Some(SelectorEvent::SetLowerEnabled(true)),
        ("min", "off") => Some(SelectorEvent::SetLowerEnabled(false)),
        ("max", "on") => Some(SelectorEvent::SetUpperEnabled(true)),
        ("max", "off") => Some(SelectorEvent::SetUpperEnabled(false)),
        // Raw text goes through unparsed; the selector owns numeric
        // validation and reports malformed input as a warning.
        ("min", text) if !text.is_empty() => Some(SelectorEvent::LowerText(text.to_string())),
        ("max", text) if !text.is_empty() => Some(SelectorEvent::UpperText(text.to_string())),
        ("min-scale", pos) => pos.parse().ok().map(SelectorEvent::LowerScale),
        ("max-scale", pos) => pos.parse().ok().map(SelectorEvent::UpperScale),
        _ => None,
    }
}

/// Reads selector commands line by line from an input stream.
pub struct ConsoleEvents<R: BufRead> {
    input: R,
}

impl<R: BufRead> ConsoleEvents<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> EventSource for ConsoleEvents<R> {
    fn next_event(&mut self) -> Result<Option<SelectorEvent>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Some(event) => return Ok(Some(event)),
                None => {
                    tracing::warn!("Unrecognized command: {}", line.trim());
                    println!("{}", HELP);
                }
            }
        }
    }
}

/// Renders selector state onto an output stream, one status line per
/// mutation, the way the dialog keeps its text fields and scales in sync.
pub struct ConsoleView<W: Write> {
    output: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

pub fn format_snapshot(snapshot: &SelectorSnapshot) -> String {
    format!(
        "Min [{}] {:>6.2} (pos {:>4})  |  Max [{}] {:>6.2} (pos {:>4})",
        if snapshot.lower_enabled { 'x' } else { ' ' },
        snapshot.lower_value,
        snapshot.lower_position,
        if snapshot.upper_enabled { 'x' } else { ' ' },
        snapshot.upper_value,
        snapshot.upper_position,
    )
}

impl<W: Write> SelectionView for ConsoleView<W> {
    fn render(&mut self, snapshot: &SelectorSnapshot) {
        // A failed status write is not worth aborting the session over.
        let _ = writeln!(self.output, "{}", format_snapshot(snapshot));
    }

    fn warn(&mut self, message: &str) {
        let _ = writeln!(self.output, "⚠️  {}", message);
    }
}
