use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub whatsapp_connected: bool,
    pub calendar_connected: bool,
    pub configuration: Value,
    pub created_at: String,
    pub updated_at: String,
}

impl Agent {
    pub fn parsed_configuration(&self) -> AgentConfiguration {
        serde_json::from_value(self.configuration.clone()).unwrap_or_default()
    }
}

/// Model settings the dashboard saves on the agent row. All fields optional;
/// absent values fall back to the service defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentConfiguration {
    pub model: String,
    pub system_prompt: String,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

impl AgentConfiguration {
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-mini";
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;

    pub fn model_or_default(&self) -> &str {
        let model = self.model.trim();
        if model.is_empty() {
            Self::DEFAULT_MODEL
        } else {
            model
        }
    }

    pub fn temperature_or_default(&self) -> f64 {
        self.temperature.unwrap_or(Self::DEFAULT_TEMPERATURE)
    }

    pub fn max_tokens_or_default(&self) -> u32 {
        self.max_tokens.unwrap_or(Self::DEFAULT_MAX_TOKENS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppConnection {
    pub id: String,
    pub agent_id: String,
    pub phone_number: String,
    pub webhook_url: String,
    pub api_key: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConnection {
    pub id: String,
    pub agent_id: String,
    pub calendar_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    pub id: String,
    pub agent_id: String,
    pub contact_id: String,
    pub platform: String,
    pub last_message: String,
    pub message_count: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Raw webhook envelope pushed by the messaging gateway. `data` stays untyped
/// here; each event kind decodes its own payload and tolerates any shape.
#[derive(Debug, Deserialize)]
pub struct WebhookEnvelope {
    #[serde(default)]
    pub instance: Option<String>,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessagesUpsertData {
    pub messages: Vec<InboundMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InboundMessage {
    pub key: MessageKey,
    pub message: Option<MessageContent>,
    pub from_me: bool,
    pub message_stub_type: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageKey {
    pub remote_jid: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageContent {
    pub conversation: String,
    pub extended_text_message: Option<ExtendedTextMessage>,
}

impl MessageContent {
    /// Text body in either the plain or the extended variant.
    pub fn text(&self) -> &str {
        if !self.conversation.is_empty() {
            return &self.conversation;
        }
        self.extended_text_message
            .as_ref()
            .map(|ext| ext.text.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtendedTextMessage {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionUpdateData {
    pub state: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_base_url: String,
    pub openai_api_key: String,
    pub evolution_base_url: String,
    pub evolution_api_key: String,
    pub google_base_url: String,
    pub google_token_url: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub public_base_url: String,
}

pub struct AppState {
    pub db: PgPool,
    pub http: reqwest::Client,
    pub config: AppConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgentBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub configuration: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceBody {
    pub phone_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestModelBody {
    pub model: Option<String>,
    pub system_prompt: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub test_message: Option<String>,
}
