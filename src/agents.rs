//! Agent definitions handed to the hosted model runtime
//!
//! An agent is a name, a system prompt, a model identifier and the tools it
//! may call. The model itself runs elsewhere; [`Assistant`] only owns the
//! definitions and performs the tool calls the runtime asks for.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{info, instrument};

use crate::config::TravelAssistConfig;
use crate::http::HttpTransport;
use crate::tools::{JapanTrainTool, ToolDefinition, ToolRegistry, WeatherTool};
use crate::{Result, TravelAssistError};

/// Registry key of the weather agent
pub const WEATHER_AGENT: &str = "weatherAgent";
/// Registry key of the Japan train agent
pub const JAPAN_TRAIN_AGENT: &str = "japanTrainAgent";

const WEATHER_INSTRUCTIONS: &str = "
      You are a helpful weather assistant that provides accurate weather information.

      Your primary function is to help users get weather details for specific locations. When responding:
      - Always ask for a location if none is provided
      - If the location name isn't in English, please translate it
      - If giving a location with multiple parts (e.g. \"New York, NY\"), use the most relevant part (e.g. \"New York\")
      - Include relevant details like humidity, wind conditions, and precipitation
      - Keep responses concise but informative

      Use the weatherTool to fetch current weather data.
";

const JAPAN_TRAIN_INSTRUCTIONS: &str = "
      あなたは日本の駅や路線に関する情報を提供する丁寧なアシスタントです。

      主な役割は、ユーザーが指定した駅の情報を提供することです。応答する際は：
      - 駅名が提供されていない場合は、必ず駅名を尋ねてください
      - 駅名は日本語で入力されることを前提としてください
      - 駅に関する情報（路線名、所在地、近隣駅など）を含めてください
      - 回答は簡潔かつ丁寧な日本語で提供してください
      - ユーザーが乗り換えや観光情報などの追加質問をした場合は、可能な限りお役に立てるよう努力してください

      japanTrainToolを使用して駅の情報を取得してください。
";

/// A conversational agent configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDefinition {
    /// Display name
    pub name: String,
    /// System prompt
    pub instructions: String,
    /// Model identifier understood by the hosted runtime
    pub model: String,
    /// Ids of the tools this agent may call
    pub tools: Vec<String>,
}

impl AgentDefinition {
    #[must_use]
    pub fn can_use(&self, tool_id: &str) -> bool {
        self.tools.iter().any(|id| id == tool_id)
    }
}

/// Weather assistant backed by `get-weather`
#[must_use]
pub fn weather_agent(model: &str) -> AgentDefinition {
    AgentDefinition {
        name: "Weather Agent".to_string(),
        instructions: WEATHER_INSTRUCTIONS.to_string(),
        model: model.to_string(),
        tools: vec![WeatherTool::ID.to_string()],
    }
}

/// Station assistant backed by `japan-train-info`
#[must_use]
pub fn japan_train_agent(model: &str) -> AgentDefinition {
    AgentDefinition {
        name: "日本駅情報アシスタント".to_string(),
        instructions: JAPAN_TRAIN_INSTRUCTIONS.to_string(),
        model: model.to_string(),
        tools: vec![JapanTrainTool::ID.to_string()],
    }
}

/// Agents plus the tools they call
#[derive(Clone)]
pub struct Assistant {
    agents: IndexMap<String, AgentDefinition>,
    tools: ToolRegistry,
}

impl Assistant {
    /// Both agents wired to the default tools
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, config: &TravelAssistConfig) -> Self {
        let mut assistant = Self::with_tools(ToolRegistry::with_default_tools(transport, config));
        assistant.register(WEATHER_AGENT, weather_agent(&config.agents.model));
        assistant.register(JAPAN_TRAIN_AGENT, japan_train_agent(&config.agents.model));
        assistant
    }

    /// No agents yet, using the given tools
    #[must_use]
    pub fn with_tools(tools: ToolRegistry) -> Self {
        Self {
            agents: IndexMap::new(),
            tools,
        }
    }

    pub fn register(&mut self, key: impl Into<String>, agent: AgentDefinition) {
        self.agents.insert(key.into(), agent);
    }

    #[must_use]
    pub fn agent(&self, key: &str) -> Option<&AgentDefinition> {
        self.agents.get(key)
    }

    pub fn agents(&self) -> impl Iterator<Item = (&str, &AgentDefinition)> {
        self.agents.iter().map(|(key, agent)| (key.as_str(), agent))
    }

    #[must_use]
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Definitions of the tools `agent_key` may call, for the model request
    pub fn tool_definitions(&self, agent_key: &str) -> Result<Vec<ToolDefinition>> {
        let agent = self.require_agent(agent_key)?;
        Ok(self
            .tools
            .definitions()
            .into_iter()
            .filter(|definition| agent.can_use(&definition.name))
            .collect())
    }

    /// Run a tool call requested on behalf of `agent_key`
    #[instrument(skip(self, args))]
    pub async fn call_tool(&self, agent_key: &str, tool_id: &str, args: Value) -> Result<Value> {
        let agent = self.require_agent(agent_key)?;
        if !agent.can_use(tool_id) {
            return Err(TravelAssistError::ToolNotAllowed {
                agent: agent.name.clone(),
                tool: tool_id.to_string(),
            });
        }

        info!("{} calls {}", agent.name, tool_id);
        self.tools.execute(tool_id, args).await
    }

    fn require_agent(&self, key: &str) -> Result<&AgentDefinition> {
        self.agents
            .get(key)
            .ok_or_else(|| TravelAssistError::validation(format!("unknown agent '{key}'")))
    }
}
