use serde::Deserialize;

use crate::client::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    device: String,
    access_token: String,
    api_url: Option<String>,
    log_level: Option<String>,
}
impl Config {
    pub fn device(&self) -> &str {
        self.device.as_str()
    }
    pub fn access_token(&self) -> &str {
        self.access_token.as_str()
    }
    pub fn api_url(&self) -> &str {
        match &self.api_url {
            Some(s) => s,
            None => DEFAULT_ENDPOINT,
        }
    }
    pub fn log_level(&self) -> &str {
        match &self.log_level {
            Some(s) => s,
            None => "info",
        }
    }
}
