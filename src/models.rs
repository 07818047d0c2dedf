/// Payloads exchanged with the job backend
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Body of `POST /scrape`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrapeRequest {
    pub url: String,
    pub titles: Vec<String>,
    pub page_html: String,
}

/// A job on the current page that matched one of the wanted titles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobMatch {
    pub title: String,
    pub relevance: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrapeResponse {
    pub matches: Vec<JobMatch>,
}

/// A company whose career page is being tracked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub career_url: String,
    #[serde(default)]
    pub last_checked_at: Option<String>,
}

/// Body of `POST /companies`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyCreate {
    pub name: String,
    pub career_url: String,
}

/// A posting found by a surveillance check that was not seen before
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurveillanceResponse {
    pub new_jobs: Vec<NewJob>,
}

/// Stored resume record returned by `POST /resume`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeOut {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub filename: Option<String>,
}

/// A stored job scored against the resume
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedJob {
    #[serde(default)]
    pub job_id: i64,
    pub title: String,
    pub company: String,
    pub score: f64,
    pub combined_score: f64,
    pub reason: String,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// LLM backends the server knows how to drive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Ollama,
    Gemini,
    Claude,
    Openai,
}

impl LlmProvider {
    pub const ALL: [LlmProvider; 4] = [
        LlmProvider::Ollama,
        LlmProvider::Gemini,
        LlmProvider::Claude,
        LlmProvider::Openai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Ollama => "ollama",
            LlmProvider::Gemini => "gemini",
            LlmProvider::Claude => "claude",
            LlmProvider::Openai => "openai",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LlmProvider::Ollama => "Ollama (local)",
            LlmProvider::Gemini => "Google Gemini",
            LlmProvider::Claude => "Anthropic Claude",
            LlmProvider::Openai => "OpenAI",
        }
    }

    /// Hosted providers need an API key
    pub fn is_hosted(&self) -> bool {
        !matches!(self, LlmProvider::Ollama)
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LlmProvider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown LLM provider: {}", s))
    }
}

/// Body of `PUT /settings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsUpdate {
    pub llm_provider: LlmProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ollama_model: Option<String>,
}

/// Current settings from `GET /settings`, or the ack of `PUT /settings`.
/// The provider stays a string so an unfamiliar value does not fail the load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsOut {
    pub llm_provider: String,
    #[serde(default)]
    pub ollama_model: Option<String>,
}

impl SettingsOut {
    pub fn provider(&self) -> LlmProvider {
        self.llm_provider.parse().unwrap_or_default()
    }
}
