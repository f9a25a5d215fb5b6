//! Command execution against an image store.

use std::fs;
use std::path::Path;

use log::{debug, info};

use super::{parse_script, Command, ImageStore, ScriptError};
use crate::codec;
use crate::component::{combine_rgb, split_rgb};
use crate::grid::PixelGrid;
use crate::histogram::render_histogram;

/// Maximum nesting of `run` commands.
pub const MAX_RUN_DEPTH: usize = 16;

/// Whether execution should go on after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An editing session: a store of named images plus a command interpreter.
#[derive(Debug, Default)]
pub struct Session {
    store: ImageStore,
    depth: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &ImageStore {
        &self.store
    }

    pub fn images_mut(&mut self) -> &mut ImageStore {
        &mut self.store
    }

    fn image(&self, name: &str) -> Result<&PixelGrid, ScriptError> {
        self.store
            .get(name)
            .ok_or_else(|| ScriptError::UnknownImage(name.to_string()))
    }

    /// Execute a single command.
    ///
    /// # Errors
    ///
    /// Fails on unknown image names and propagates engine, codec and
    /// nested-script errors. The store is left untouched on failure.
    pub fn execute(&mut self, command: &Command) -> Result<Flow, ScriptError> {
        debug!("executing {:?}", command);
        match command {
            Command::Load { path, name } => {
                let grid = codec::load(path)?;
                info!(
                    "loaded {} as '{}' ({}x{})",
                    path.display(),
                    name,
                    grid.width(),
                    grid.height()
                );
                self.store.insert(name.clone(), grid);
            }
            Command::Save { path, name } => {
                codec::save(self.image(name)?, path)?;
                info!("saved '{}' to {}", name, path.display());
            }
            Command::Apply {
                operation,
                source,
                dest,
                split,
            } => {
                let out = operation.apply_with_preview(self.image(source)?, *split)?;
                self.store.insert(dest.clone(), out);
            }
            Command::RgbSplit {
                source,
                red,
                green,
                blue,
            } => {
                let (r, g, b) = split_rgb(self.image(source)?);
                self.store.insert(red.clone(), r);
                self.store.insert(green.clone(), g);
                self.store.insert(blue.clone(), b);
            }
            Command::RgbCombine {
                dest,
                red,
                green,
                blue,
            } => {
                let out = combine_rgb(self.image(red)?, self.image(green)?, self.image(blue)?)?;
                self.store.insert(dest.clone(), out);
            }
            Command::Histogram { source, dest } => {
                let out = render_histogram(self.image(source)?);
                self.store.insert(dest.clone(), out);
            }
            Command::Run { path } => return self.run_file(path),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parse `text` and execute its commands in order.
    ///
    /// Nothing runs if any line fails to parse. Execution stops at the
    /// first failing command or at `quit`.
    pub fn run_script(&mut self, text: &str) -> Result<Flow, ScriptError> {
        for command in parse_script(text)? {
            if self.execute(&command)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Read and run a script file in this session.
    pub fn run_file(&mut self, path: &Path) -> Result<Flow, ScriptError> {
        if self.depth >= MAX_RUN_DEPTH {
            return Err(ScriptError::TooDeep(MAX_RUN_DEPTH));
        }
        let text = fs::read_to_string(path).map_err(|e| ScriptError::ScriptFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("running script {}", path.display());

        self.depth += 1;
        let result = self.run_script(&text);
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{load, save};
    use crate::error::EditError;
    use crate::flip::{flip, FlipAxis};

    fn sample() -> PixelGrid {
        PixelGrid::from_raw(
            2,
            2,
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120],
        )
        .unwrap()
    }

    fn session_with_sample() -> Session {
        let mut session = Session::new();
        session.images_mut().insert("img", sample());
        session
    }

    #[test]
    fn test_apply_stores_result() {
        let mut session = session_with_sample();
        let flow = session.run_script("horizontal-flip img flipped").unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            session.images().get("flipped"),
            Some(&flip(&sample(), FlipAxis::Horizontal))
        );
        assert_eq!(session.images().get("img"), Some(&sample()));
    }

    #[test]
    fn test_unknown_image() {
        let mut session = Session::new();
        assert_eq!(
            session.run_script("blur ghost out"),
            Err(ScriptError::UnknownImage("ghost".to_string()))
        );
        assert!(session.images().is_empty());
    }

    #[test]
    fn test_engine_errors_propagate() {
        let mut session = session_with_sample();
        let err = session.run_script("compress 240 img out").unwrap_err();
        assert!(matches!(err, ScriptError::Edit(EditError::InvalidArgument(_))));
        assert!(!session.images().contains("out"));
    }

    #[test]
    fn test_split_on_unsupported_operation_is_rejected_at_parse() {
        let mut session = session_with_sample();
        assert!(matches!(
            session.run_script("brighten 10 img out split 50"),
            Err(ScriptError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_split_preview() {
        let mut session = session_with_sample();
        session.run_script("sepia img half split 50").unwrap();
        assert_eq!(session.images().get("half").map(PixelGrid::width), Some(1 + 3 + 1));
    }

    #[test]
    fn test_rgb_split_then_combine_restores_image() {
        let mut session = session_with_sample();
        session
            .run_script("rgb-split img r g b\nrgb-combine back r g b\n")
            .unwrap();
        assert_eq!(session.images().len(), 5);
        assert_eq!(session.images().get("back"), Some(&sample()));
    }

    #[test]
    fn test_histogram_command() {
        let mut session = session_with_sample();
        session.run_script("histogram img hist").unwrap();
        let hist = session.images().get("hist").unwrap();
        assert_eq!((hist.width(), hist.height()), (256, 256));
    }

    #[test]
    fn test_quit_stops_execution() {
        let mut session = session_with_sample();
        let flow = session
            .run_script("vertical-flip img a\nq\nvertical-flip img b\n")
            .unwrap();
        assert_eq!(flow, Flow::Quit);
        assert!(session.images().contains("a"));
        assert!(!session.images().contains("b"));
    }

    #[test]
    fn test_parse_error_runs_nothing() {
        let mut session = session_with_sample();
        assert!(session.run_script("vertical-flip img a\nbogus\n").is_err());
        assert!(!session.images().contains("a"));
    }

    #[test]
    fn test_load_transform_save() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.ppm");
        save(&sample(), &input).unwrap();

        let script = format!(
            "# brighten and save\nload {} img\nbrighten 10 img bright\nsave {} bright\n",
            input.display(),
            output.display()
        );
        let mut session = Session::new();
        session.run_script(&script).unwrap();

        let saved = load(&output).unwrap();
        assert_eq!(saved.pixel(0, 0), [20, 30, 40]);
        assert_eq!(saved.pixel(1, 1), [110, 120, 130]);
    }

    #[test]
    fn test_run_nested_script() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested.txt");
        fs::write(&nested, "vertical-flip img from-nested\n").unwrap();

        let mut session = session_with_sample();
        let script = format!("run {}\nluma-component from-nested done\n", nested.display());
        session.run_script(&script).unwrap();
        assert!(session.images().contains("from-nested"));
        assert!(session.images().contains("done"));
    }

    #[test]
    fn test_run_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        let script = format!("run {}\n", dir.path().join("missing.txt").display());
        assert!(matches!(
            session.run_script(&script),
            Err(ScriptError::ScriptFile { .. })
        ));
    }

    #[test]
    fn test_run_recursion_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let looping = dir.path().join("loop.txt");
        fs::write(&looping, format!("run {}\n", looping.display())).unwrap();

        let mut session = Session::new();
        assert_eq!(
            session.run_file(&looping),
            Err(ScriptError::TooDeep(MAX_RUN_DEPTH))
        );
        assert_eq!(session.depth, 0);
    }
}
