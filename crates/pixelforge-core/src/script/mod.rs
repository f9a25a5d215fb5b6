//! Scripted editing sessions.
//!
//! A session owns a set of named images and executes commands that load,
//! transform and save them:
//!
//! ```text
//! load res/koala.ppm koala
//! brighten 10 koala koala-bright
//! blur koala-bright koala-soft split 50
//! save res/koala-soft.png koala-soft
//! ```

mod command;
mod session;
mod store;

pub use command::{parse_line, parse_script, Command};
pub use session::{Flow, Session, MAX_RUN_DEPTH};
pub use store::ImageStore;

use thiserror::Error;

use crate::codec::CodecError;
use crate::error::EditError;

/// Errors raised while parsing or executing a script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// A line could not be parsed.
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A command referred to an image that was never created.
    #[error("Unknown image: {0}")]
    UnknownImage(String),

    /// A script file could not be read.
    #[error("Cannot read script {path}: {message}")]
    ScriptFile { path: String, message: String },

    /// `run` commands nested past [`MAX_RUN_DEPTH`].
    #[error("Scripts nested deeper than {0} levels")]
    TooDeep(usize),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}
