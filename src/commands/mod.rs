//! CLI command implementations
//!
//! Command objects for the CLI binary, selected and built by the factory
//! from the parsed argument set.

pub mod command_traits;
pub mod inspect_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use extract_command::ExtractCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::crop::errors::CropResult;

/// Factory selecting the command a CLI invocation runs
///
/// Examines the parsed arguments and builds the matching command:
/// extraction when requested, payload inspection otherwise.
pub struct CropkitCommandFactory;

impl CropkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CropkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CropkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> CropResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else {
            // Default to inspect command
            Ok(Box::new(InspectCommand::new(args, logger)?))
        }
    }
}
