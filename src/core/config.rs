use std::env;

pub const DEFAULT_API_HOSTNAME: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a friendly conversationalist.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_hostname: String,
    pub model: String,
    pub system_message: String,
    pub static_dir: String,
}

impl AppConfig {
    /// Read configuration from the environment. Only the process
    /// bootstrap calls this, everything below it receives the value.
    pub fn from_env() -> Self {
        let api_hostname =
            env::var("VICTORIA_LLM_HOST").unwrap_or_else(|_| DEFAULT_API_HOSTNAME.to_string());
        let model = env::var("VICTORIA_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let system_message = env::var("VICTORIA_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_MESSAGE.to_string());
        let static_dir = env::var("VICTORIA_STATIC_DIR").unwrap_or("./web".to_string());

        Self {
            api_hostname,
            model,
            system_message,
            static_dir,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_hostname: DEFAULT_API_HOSTNAME.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_message: DEFAULT_SYSTEM_MESSAGE.to_string(),
            static_dir: String::from("./web"),
        }
    }
}
