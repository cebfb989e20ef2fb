//! Blocking REST transport for iControl-style APIs.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::error::TransportError;
use super::transport::Transport;
use crate::config::RestConfig;

/// Fetches REST resources such as `/mgmt/tm/sys/snmp` and returns the body.
pub struct RestTransport {
    client: Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl RestTransport {
    /// Build a transport from the `[rest]` configuration section.
    pub fn from_config(config: &RestConfig) -> Result<Self, TransportError> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| TransportError::MissingConfig("rest.base_url".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}

impl Transport for RestTransport {
    fn execute(&self, command: &str) -> Result<String, TransportError> {
        let url = self.url_for(command);
        debug!(%url, "GET");

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request
            .send()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(TransportError::Status {
                command: command.to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_base_url() {
        let err = RestTransport::from_config(&RestConfig::default()).err().unwrap();
        assert!(matches!(err, TransportError::MissingConfig(_)));
    }

    #[test]
    fn test_url_joining() {
        let config = RestConfig {
            base_url: Some("https://bigip.example.net/".to_string()),
            ..RestConfig::default()
        };
        let transport = RestTransport::from_config(&config).unwrap();
        assert_eq!(
            transport.url_for("/mgmt/tm/sys/snmp"),
            "https://bigip.example.net/mgmt/tm/sys/snmp"
        );
    }
}
