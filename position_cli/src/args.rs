//! Command-line arguments
//!
//! ```text
//! position_cli [--mode <mode>] [--top <px>] [--left <px>] [--config <file>] [--print]
//! ```

use std::path::PathBuf;

use position_core::offsets::parse_offset;
use position_core::{Axis, PositionMode, UiState, VisualizerError, VisualizerResult};

pub const USAGE: &str = "\
Usage: position_cli [OPTIONS]

Options:
  --mode <MODE>     static, relative, absolute, fixed or sticky [default: static]
  --top <PX>        top offset, -50..=50 [default: 0]
  --left <PX>       left offset, -50..=50 [default: 0]
  --config <FILE>   JSON presentation config (overrides POSITION_VISUALIZER_CONFIG)
  --print           print the style, explanation and preview once, then exit
  -h, --help        show this help

Keys: Up/Down mode, Tab axis, Left/Right offset (Shift: x10), r reset, q quit";

/// Parsed arguments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub mode: Option<PositionMode>,
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub config: Option<PathBuf>,
    pub print: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name)
    pub fn parse<I, S>(args: I) -> VisualizerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = CliArgs::default();
        let mut iter = args.into_iter().map(Into::into);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--mode" => {
                    let value = expect_value(&arg, iter.next())?;
                    parsed.mode = Some(PositionMode::from_str_flexible(&value)?);
                }
                "--top" => {
                    let value = expect_value(&arg, iter.next())?;
                    parsed.top = Some(parse_offset(Axis::Top, &value)?);
                }
                "--left" => {
                    let value = expect_value(&arg, iter.next())?;
                    parsed.left = Some(parse_offset(Axis::Left, &value)?);
                }
                "--config" => {
                    let value = expect_value(&arg, iter.next())?;
                    parsed.config = Some(PathBuf::from(value));
                }
                "--print" => parsed.print = true,
                "-h" | "--help" => parsed.help = true,
                other => {
                    return Err(VisualizerError::invalid_argument(other, "unrecognised option"));
                }
            }
        }

        Ok(parsed)
    }

    /// Starting state for this run
    pub fn initial_state(&self) -> UiState {
        let mut state = UiState::new();
        if let Some(mode) = self.mode {
            state.set_mode(mode);
        }
        if let Some(top) = self.top {
            state.set_offset(Axis::Top, top);
        }
        if let Some(left) = self.left {
            state.set_offset(Axis::Left, left);
        }
        state
    }
}

fn expect_value(flag: &str, value: Option<String>) -> VisualizerResult<String> {
    value
        .filter(|v| !v.starts_with("--"))
        .ok_or_else(|| VisualizerError::invalid_argument(flag, "missing value"))
}
