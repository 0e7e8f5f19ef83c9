//! Command dispatch and handler modules.

mod inputs;
mod resolve;
mod run;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Command::Run) => run::exec(cli.inputs),
        Some(Command::Inputs { reveal }) => inputs::exec(cli.inputs, reveal),
        Some(Command::Resolve { version, fallback }) => {
            resolve::exec(version.as_deref(), fallback.as_deref())
        }
    }
}
