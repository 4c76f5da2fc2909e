use std::time::Duration;

/// Sampling parameters forwarded to the hosted model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 800
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Product name the assistant introduces itself with.
    pub assistant_name: String,
    pub model: String,
    pub generation: GenerationConfig,
    /// Most recent current-month transactions kept in the snapshot.
    pub recent_limit: usize,
    /// Recent transactions quoted in the prompt.
    pub recent_shown: usize,
    pub top_categories: usize,
    pub request_timeout: Duration
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            assistant_name: "SmartSaver".to_string(),
            model: "gemini-1.5-flash".to_string(),
            generation: GenerationConfig::default(),
            recent_limit: 50,
            recent_shown: 5,
            top_categories: 3,
            request_timeout: Duration::from_secs(30)
        }
    }
}
