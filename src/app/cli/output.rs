//! Outcome rendering for the CLI.

use serde::Serialize;

use crate::app::commands::{CreateOutcome, PruneOutcome};
use crate::domain::AppError;

/// Serialize an outcome to compact single-line JSON.
pub fn to_json_line<T: Serialize>(outcome: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(outcome)
        .map_err(|e| AppError::Output(format!("Failed to serialize outcome: {}", e)))?;
    debug_assert!(!json.contains('\n'), "outcome JSON must be single-line");
    Ok(json)
}

pub fn render_create(outcome: &CreateOutcome) -> String {
    format!("Made {} folder", outcome.name)
}

pub fn render_prune(outcome: &PruneOutcome) -> String {
    if !outcome.dry_run {
        return format!("Removed {} folders", outcome.count);
    }

    let mut text = format!("Would remove {} folders", outcome.count);
    for name in &outcome.removed {
        text.push_str("\n  ");
        text.push_str(name);
    }
    text
}
