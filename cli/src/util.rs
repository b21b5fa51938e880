use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliError;

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Reject an empty or whitespace-only vertex argument.
pub fn require_name<'a>(value: &'a str, param_name: &'static str) -> Result<&'a str, CliError> {
    if value.trim().is_empty() {
        return Err(CliError::InvalidSetting {
            name: param_name,
            value: value.to_string(),
            reason: "both actors must be given".into(),
        });
    }
    Ok(value)
}

pub fn join_path(path: &[String], separator: &str) -> String {
    path.join(separator)
}

pub fn missing_origin_notice(origin: &str) -> String {
    format!("Vertex '{}' does not exist in the graph.", origin)
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
