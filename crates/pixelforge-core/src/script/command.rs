//! Line-oriented command language.
//!
//! One command per line, arguments separated by whitespace. A token that
//! starts with `#` comments out the rest of its line. Commands that support
//! a split preview accept a trailing `split <percent>`.

use std::path::PathBuf;
use std::str::FromStr;

use super::ScriptError;
use crate::channel::DerivedChannel;
use crate::flip::FlipAxis;
use crate::grid::Channel;
use crate::operation::Operation;

/// A parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `load <path> <name>`
    Load { path: PathBuf, name: String },
    /// `save <path> <name>`
    Save { path: PathBuf, name: String },
    /// Any single-image transform, e.g. `blur <src> <dst> [split <p>]`.
    Apply {
        operation: Operation,
        source: String,
        dest: String,
        split: f64,
    },
    /// `rgb-split <src> <red> <green> <blue>`
    RgbSplit {
        source: String,
        red: String,
        green: String,
        blue: String,
    },
    /// `rgb-combine <dst> <red> <green> <blue>`
    RgbCombine {
        dest: String,
        red: String,
        green: String,
        blue: String,
    },
    /// `histogram <src> <dst>`
    Histogram { source: String, dest: String },
    /// `run <script-file>`
    Run { path: PathBuf },
    /// `quit` or `q`
    Quit,
}

/// Parse a whole script. Blank and comment-only lines are skipped.
///
/// # Errors
///
/// Returns `ScriptError::Parse` with the 1-based line number of the first
/// malformed command.
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let parsed = parse_line(line).map_err(|message| ScriptError::Parse {
            line: index + 1,
            message,
        })?;
        commands.extend(parsed);
    }
    Ok(commands)
}

fn component(channel: Channel) -> Operation {
    Operation::Component { channel }
}

fn derive(mode: DerivedChannel) -> Operation {
    Operation::Derive { mode }
}

fn flip(axis: FlipAxis) -> Operation {
    Operation::Flip { axis }
}

/// Parse one line; `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let mut tokens = Tokens::new(line);
    let Some(keyword) = tokens.next_token() else {
        return Ok(None);
    };

    let command = match keyword {
        "load" => Command::Load {
            path: tokens.word("path")?.into(),
            name: tokens.word("image name")?.to_string(),
        },
        "save" => Command::Save {
            path: tokens.word("path")?.into(),
            name: tokens.word("image name")?.to_string(),
        },
        "red-component" => tokens.apply(component(Channel::Red), false)?,
        "green-component" => tokens.apply(component(Channel::Green), false)?,
        "blue-component" => tokens.apply(component(Channel::Blue), false)?,
        "value-component" => tokens.apply(derive(DerivedChannel::Value), true)?,
        "luma-component" => tokens.apply(derive(DerivedChannel::Luma), true)?,
        "intensity-component" => tokens.apply(derive(DerivedChannel::Intensity), true)?,
        "horizontal-flip" => tokens.apply(flip(FlipAxis::Horizontal), false)?,
        "vertical-flip" => tokens.apply(flip(FlipAxis::Vertical), false)?,
        "brighten" => {
            let delta = tokens.number("brightness delta")?;
            tokens.apply(Operation::Brightness { delta }, false)?
        }
        "blur" => tokens.apply(Operation::Blur, true)?,
        "sharpen" => tokens.apply(Operation::Sharpen, true)?,
        "sepia" => tokens.apply(Operation::Sepia, true)?,
        "greyscale" => tokens.apply(Operation::Greyscale, true)?,
        "color-correct" => tokens.apply(Operation::ColorCorrect, true)?,
        "levels-adjust" => {
            let shadow = tokens.number("shadow level")?;
            let mid = tokens.number("mid level")?;
            let highlight = tokens.number("highlight level")?;
            tokens.apply(
                Operation::Levels {
                    shadow,
                    mid,
                    highlight,
                },
                true,
            )?
        }
        "compress" => {
            let percent = tokens.number("compression percent")?;
            tokens.apply(Operation::Compress { percent }, false)?
        }
        "rgb-split" => Command::RgbSplit {
            source: tokens.word("source image")?.to_string(),
            red: tokens.word("red image")?.to_string(),
            green: tokens.word("green image")?.to_string(),
            blue: tokens.word("blue image")?.to_string(),
        },
        "rgb-combine" => Command::RgbCombine {
            dest: tokens.word("destination image")?.to_string(),
            red: tokens.word("red image")?.to_string(),
            green: tokens.word("green image")?.to_string(),
            blue: tokens.word("blue image")?.to_string(),
        },
        "histogram" => Command::Histogram {
            source: tokens.word("source image")?.to_string(),
            dest: tokens.word("destination image")?.to_string(),
        },
        "run" => Command::Run {
            path: tokens.word("script path")?.into(),
        },
        "quit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}'")),
    };

    tokens.finish()?;
    Ok(Some(command))
}

/// Whitespace tokenizer that stops at the first `#` token.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    done: bool,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
            done: false,
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(token) if token.starts_with('#') => {
                self.done = true;
                None
            }
            other => other,
        }
    }

    fn word(&mut self, what: &str) -> Result<&'a str, String> {
        self.next_token().ok_or_else(|| format!("missing {what}"))
    }

    fn number<T: FromStr>(&mut self, what: &str) -> Result<T, String> {
        let token = self.word(what)?;
        token
            .parse()
            .map_err(|_| format!("invalid {what} '{token}'"))
    }

    /// `<src> <dst>` plus an optional `split <percent>` when allowed.
    fn apply(&mut self, operation: Operation, splittable: bool) -> Result<Command, String> {
        let source = self.word("source image")?.to_string();
        let dest = self.word("destination image")?.to_string();
        let mut split = 100.0;
        if splittable {
            match self.next_token() {
                Some("split") => split = self.number("split percent")?,
                Some(token) => return Err(format!("unexpected token '{token}'")),
                None => {}
            }
        }
        Ok(Command::Apply {
            operation,
            source,
            dest,
            split,
        })
    }

    fn finish(&mut self) -> Result<(), String> {
        match self.next_token() {
            Some(token) => Err(format!("unexpected token '{token}'")),
            None => Ok(()),
        }
    }
}
