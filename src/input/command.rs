//! Caller-facing operations and the line-based replay script format.
//!
//! Each [`Command`] corresponds to one public operation on a
//! [`Whiteboard`](super::Whiteboard). Scripts hold one command per line:
//!
//! ```text
//! # comment
//! color 0 0 1
//! size 4
//! begin 10 10 0.5
//! point 20 12
//! end
//! render
//! ```

use crate::draw::Color;
use std::str::FromStr;
use thiserror::Error;

/// Pressure used when a pointer event does not report one.
pub const DEFAULT_PRESSURE: f32 = 1.0;

/// Alpha used when `color` is given three components.
pub const DEFAULT_ALPHA: f32 = 1.0;

/// One operation on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Start a new stroke, discarding any unfinished one
    BeginStroke { x: f32, y: f32, pressure: f32 },
    /// Extend the stroke being drawn
    AddPoint { x: f32, y: f32, pressure: f32 },
    /// Commit the stroke being drawn
    EndStroke,
    /// Change the pen color for subsequent samples
    SetColor(Color),
    /// Change the brush size for subsequent samples
    SetBrushSize(f32),
    /// Drop every stroke and all history
    Clear,
    Undo,
    Redo,
    /// Produce a frame
    Render,
}

/// Errors produced while parsing a single command line.
#[derive(Debug, Error, PartialEq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' takes {expected} arguments, got {found}")]
    Arity {
        command: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

/// A command parse failure annotated with its script line.
#[derive(Debug, Error, PartialEq)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    #[source]
    pub source: CommandParseError,
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandParseError::Empty)?;
        let args = words.map(parse_number).collect::<Result<Vec<f32>, _>>()?;

        match name.to_ascii_lowercase().as_str() {
            "begin" => {
                let (x, y, pressure) = position_args("begin", &args)?;
                Ok(Command::BeginStroke { x, y, pressure })
            }
            "point" => {
                let (x, y, pressure) = position_args("point", &args)?;
                Ok(Command::AddPoint { x, y, pressure })
            }
            "color" => match args[..] {
                [r, g, b] => Ok(Command::SetColor(Color::new(r, g, b, DEFAULT_ALPHA))),
                [r, g, b, a] => Ok(Command::SetColor(Color::new(r, g, b, a))),
                _ => Err(arity("color", "3 or 4", args.len())),
            },
            "size" => match args[..] {
                [size] => Ok(Command::SetBrushSize(size)),
                _ => Err(arity("size", "1", args.len())),
            },
            "end" => no_args(Command::EndStroke, "end", &args),
            "clear" => no_args(Command::Clear, "clear", &args),
            "undo" => no_args(Command::Undo, "undo", &args),
            "redo" => no_args(Command::Redo, "redo", &args),
            "render" => no_args(Command::Render, "render", &args),
            _ => Err(CommandParseError::Unknown(name.to_string())),
        }
    }
}

/// Parses a whole script, skipping blank lines and `#` comments.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| {
            line.parse().map_err(|source| ScriptError {
                line: index + 1,
                source,
            })
        })
        .collect()
}

fn parse_number(word: &str) -> Result<f32, CommandParseError> {
    word.parse()
        .map_err(|_| CommandParseError::InvalidNumber(word.to_string()))
}

fn position_args(
    command: &'static str,
    args: &[f32],
) -> Result<(f32, f32, f32), CommandParseError> {
    match *args {
        [x, y] => Ok((x, y, DEFAULT_PRESSURE)),
        [x, y, pressure] => Ok((x, y, pressure)),
        _ => Err(arity(command, "2 or 3", args.len())),
    }
}

fn no_args(
    command: Command,
    name: &'static str,
    args: &[f32],
) -> Result<Command, CommandParseError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(arity(name, "0", args.len()))
    }
}

fn arity(command: &'static str, expected: &'static str, found: usize) -> CommandParseError {
    CommandParseError::Arity {
        command,
        expected,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_defaults_to_one() {
        assert_eq!(
            "begin 1 2".parse::<Command>().unwrap(),
            Command::BeginStroke {
                x: 1.0,
                y: 2.0,
                pressure: 1.0
            }
        );
        assert_eq!(
            "point 3.5 -4 0.25".parse::<Command>().unwrap(),
            Command::AddPoint {
                x: 3.5,
                y: -4.0,
                pressure: 0.25
            }
        );
    }

    #[test]
    fn color_alpha_is_optional() {
        assert_eq!(
            "color 0 1 0".parse::<Command>().unwrap(),
            Command::SetColor(Color::new(0.0, 1.0, 0.0, 1.0))
        );
        assert_eq!(
            "COLOR 0 1 0 0.5".parse::<Command>().unwrap(),
            Command::SetColor(Color::new(0.0, 1.0, 0.0, 0.5))
        );
    }

    #[test]
    fn bare_commands_reject_arguments() {
        assert_eq!("undo".parse::<Command>().unwrap(), Command::Undo);
        assert!(matches!(
            "undo 3".parse::<Command>(),
            Err(CommandParseError::Arity { command: "undo", .. })
        ));
    }

    #[test]
    fn rejects_unknown_and_malformed() {
        assert_eq!(
            "erase".parse::<Command>(),
            Err(CommandParseError::Unknown("erase".into()))
        );
        assert_eq!(
            "size big".parse::<Command>(),
            Err(CommandParseError::InvalidNumber("big".into()))
        );
        assert_eq!("   ".parse::<Command>(), Err(CommandParseError::Empty));
    }

    #[test]
    fn script_skips_comments_and_reports_lines() {
        let commands = parse_script("# header\n\nbegin 0 0\npoint 1 1\nend\n").unwrap();
        assert_eq!(commands.len(), 3);

        let err = parse_script("begin 0 0\n\nwobble\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.to_string(), "line 3: Unknown command 'wobble'");
    }
}
