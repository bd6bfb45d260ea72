//! CLI argument parsing via clap.

use clap::{ArgAction, Parser};
use shelly::build_info;
use shelly::prompt::Mode;

/// Usage text printed when no mode is given.
pub const USAGE_TEXT: &str = "\
Shelly - Your terminal command assistant

Usage:
  shelly --init                              Initialize with API key
  <command> | shelly -d \"description\"        Debug a command
  shelly -c \"what you want to do\"            Generate command suggestions
  shelly -q \"your question\"                  Ask a question

Flags:
  -d, --debug     Debug mode: analyze and fix a command
  -c, --command   Command mode: generate command suggestions
  -q, --question  Question mode: answer a question
  --init          Initialize shelly with your API key";

/// A terminal assistant that debugs commands, suggests commands, and answers
/// questions using an OpenRouter model.
#[derive(Debug, Parser)]
#[command(
    name = "shelly",
    version = build_info::VERSION,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Initialize shelly with your API key.
    #[arg(long = "init")]
    pub init: bool,

    /// Debug mode: analyze and fix a command piped on stdin.
    #[arg(
        short = 'd',
        long = "debug",
        value_name = "DESCRIPTION",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub debug: Vec<String>,

    /// Command mode: generate command suggestions.
    #[arg(
        short = 'c',
        long = "command",
        value_name = "TASK",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,

    /// Question mode: answer a question, using piped stdin as context.
    #[arg(
        short = 'q',
        long = "question",
        value_name = "QUESTION",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub question: Vec<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// What a parsed command line asks shelly to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Init,
    Run(Mode),
}

/// Command lines that parse but do not name exactly one action.
#[derive(Debug, PartialEq, Eq)]
pub enum UsageError {
    NoMode,
    MultipleModes,
}

impl Args {
    /// Resolve flags to a single action.
    ///
    /// `--init` wins over everything else. Flags given an empty value count as
    /// absent. A flag repeated (`-d a --debug b`) takes its first non-empty
    /// value.
    pub fn invocation(&self) -> Result<Invocation, UsageError> {
        if self.init {
            return Ok(Invocation::Init);
        }

        let mut modes = [
            first_given(&self.debug).map(Mode::Debug),
            first_given(&self.command).map(Mode::Command),
            first_given(&self.question).map(Mode::Question),
        ]
        .into_iter()
        .flatten();

        match (modes.next(), modes.next()) {
            (None, _) => Err(UsageError::NoMode),
            (Some(mode), None) => Ok(Invocation::Run(mode)),
            (Some(_), Some(_)) => Err(UsageError::MultipleModes),
        }
    }
}

fn first_given(values: &[String]) -> Option<String> {
    values.iter().find(|value| !value.is_empty()).cloned()
}
