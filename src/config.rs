use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        search_api_url: get_env_or_default("SEARCH_API_URL", "http://localhost:5000"),
        bind_addr: get_env_or_default("BOOKALYTIC_BIND", "127.0.0.1:3000"),
        log_level: get_env_or_default("LOG_LEVEL", "info"),
    }
});

pub struct Config {
    /// Base URL of the search collaborator, without the `/api/search` path.
    pub search_api_url: String,
    pub bind_addr: String,
    pub log_level: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
