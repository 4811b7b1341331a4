use pet_core::responses::TextResponse;

use crate::cli::{Commands, OutputFormat};
use crate::output::output;

/// Answer an operation that is part of the API surface but not implemented.
/// The store is never opened.
pub fn run(command: &Commands, format: OutputFormat) -> anyhow::Result<()> {
    tracing::debug!(?command, "stub command");
    output(&TextResponse::not_implemented(), format)
}
