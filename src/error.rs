//! Error types and handling for `TravelAssist` tools

use thiserror::Error;

/// Main error type for the `TravelAssist` tools
#[derive(Error, Debug)]
pub enum TravelAssistError {
    /// A lookup provider returned zero results for the query
    #[error("{message}")]
    NotFound { query: String, message: String },

    /// Network failure or non-success HTTP status
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Response body did not have the expected JSON shape
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// No tool is registered under the requested id
    #[error("Unknown tool: {id}")]
    UnknownTool { id: String },

    /// The agent is not configured with the requested tool
    #[error("Agent '{agent}' cannot use tool '{tool}'")]
    ToolNotAllowed { agent: String, tool: String },
}

impl TravelAssistError {
    /// Create a not-found error for a geocoding query
    pub fn location_not_found<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        Self::NotFound {
            message: format!("Location '{query}' not found"),
            query,
        }
    }

    /// Create a not-found error for a station query
    pub fn station_not_found<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        Self::NotFound {
            message: format!("駅名 '{query}' が見つかりませんでした。"),
            query,
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from a provider answering with zero results
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { message, .. } => message.clone(),
            Self::Transport { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            Self::Parse { .. } => {
                "An external service returned data in an unexpected format.".to_string()
            }
            Self::Validation { message } => format!("Invalid input: {message}"),
            Self::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            Self::UnknownTool { id } => format!("No tool named '{id}' is available."),
            Self::ToolNotAllowed { agent, tool } => {
                format!("The agent '{agent}' is not allowed to call '{tool}'.")
            }
        }
    }
}
