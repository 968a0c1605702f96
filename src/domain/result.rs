//! Result type alias for the export agent

use super::errors::AgentError;

/// Result type alias for export agent operations
///
/// # Examples
///
/// ```
/// use export_agent::domain::result::Result;
/// use export_agent::domain::errors::AgentError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AgentError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AgentError>;
