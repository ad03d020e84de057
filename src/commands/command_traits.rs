//! Command pattern interfaces
//!
//! Defines the Command abstraction the CLI binary runs through: each
//! operation is a self-contained command, built from the parsed argument
//! set by a factory.

use crate::utils::logger::Logger;
use crate::crop::errors::CropResult;

/// An executable CLI operation
///
/// Commands capture their settings at construction time and run as a
/// unit, keeping argument handling apart from the work itself.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> CropResult<()>;
}

/// Builds the command matching a set of parsed CLI arguments
pub trait CommandFactory<'a> {
    /// Create the command an invocation asks for
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A boxed command ready to execute, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> CropResult<Box<dyn Command + 'a>>;
}
