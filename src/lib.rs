//! `TravelAssist` - weather and Japan rail station tools for conversational agents
//!
//! This library provides the tool adapters a hosted language model calls to
//! answer weather and train-station questions, together with the two agent
//! definitions that use them.

pub mod agents;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod stations;
pub mod tools;
pub mod weather;

// Re-export core types for public API
pub use agents::{AgentDefinition, Assistant};
pub use config::TravelAssistConfig;
pub use error::TravelAssistError;
pub use http::{HttpTransport, ReqwestTransport};
pub use models::{Location, StationRecord, StationResult, WeatherObservation};
pub use stations::{NearbyStationClient, StationLookupClient};
pub use tools::{JapanTrainTool, Tool, ToolDefinition, ToolRegistry, WeatherTool};
pub use weather::{GeocodingClient, WeatherClient, weather_code_to_description};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelAssistError>;
