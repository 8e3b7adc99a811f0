//! Tool definitions and execution
//!
//! A tool is a named operation with a JSON input schema and a JSON output
//! schema. A model runtime receives the [`ToolDefinition`]s, picks a tool and
//! sends back arguments, which [`ToolRegistry::execute`] dispatches.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::TravelAssistConfig;
use crate::http::HttpTransport;
use crate::{Result, TravelAssistError};

pub mod train;
pub mod weather;

pub use train::JapanTrainTool;
pub use weather::WeatherTool;

/// What a model runtime needs to know to call a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    pub output: Value,
}

/// A callable operation exposed to an agent runtime
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable identifier the model uses to call the tool
    fn id(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema of the arguments
    fn input_schema(&self) -> Value;

    /// JSON schema of a successful result
    fn output_schema(&self) -> Value;

    /// Run the tool with JSON arguments
    async fn execute(&self, args: Value) -> Result<Value>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.id().to_string(),
            description: self.description().to_string(),
            parameters: self.input_schema(),
            output: self.output_schema(),
        }
    }
}

/// Schema for tool arguments; closed to extra properties
pub(crate) fn input_schema<T: JsonSchema>() -> Value {
    let mut schema = schema_for!(T).to_value();
    if let Some(obj) = schema.as_object_mut() {
        obj.insert("additionalProperties".to_string(), Value::Bool(false));
    }
    schema
}

pub(crate) fn output_schema<T: JsonSchema>() -> Value {
    schema_for!(T).to_value()
}

pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T> {
    serde_json::from_value(args)
        .map_err(|e| TravelAssistError::validation(format!("invalid arguments for {tool}: {e}")))
}

pub(crate) fn to_output<T: Serialize>(output: &T) -> Result<Value> {
    serde_json::to_value(output)
        .map_err(|e| TravelAssistError::parse(format!("Failed to serialize tool output: {e}")))
}

/// Reject blank free-text queries, returning the query untouched otherwise
pub(crate) fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(TravelAssistError::validation(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(value)
}

/// Tools keyed by id, in registration order
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: IndexMap<&'static str, Arc<dyn Tool>>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the weather and Japan train tools
    #[must_use]
    pub fn with_default_tools(
        transport: Arc<dyn HttpTransport>,
        config: &TravelAssistConfig,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(WeatherTool::from_config(transport.clone(), config));
        registry.register(JapanTrainTool::from_config(transport, config));
        registry
    }

    /// Add a tool, replacing any tool with the same id
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.id(), Arc::new(tool));
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(id).cloned()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.keys().copied()
    }

    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    /// Dispatch a call by tool id
    pub async fn execute(&self, id: &str, args: Value) -> Result<Value> {
        let tool = self
            .get(id)
            .ok_or_else(|| TravelAssistError::UnknownTool { id: id.to_string() })?;
        tool.execute(args).await
    }
}
