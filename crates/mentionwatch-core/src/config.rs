//! Workflow configuration schema and YAML loading.
//!
//! Config keys are camelCase (`windowMinutes`, `apiEndpoint`, ...) to stay
//! wire-compatible with existing deployment configs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Which search backend the fetcher talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKind {
    /// Synthetic counts; one descriptive request, no credential required.
    Mock,
    /// X/Twitter recent-search API; requires a bearer token.
    Twitter,
}

impl std::fmt::Display for ApiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKind::Mock => write!(f, "mock"),
            ApiKind::Twitter => write!(f, "twitter"),
        }
    }
}

/// Search spec: what to look for, how far back, and against which backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Terms to count mentions of. Order is preserved through the whole run.
    pub terms: Vec<String>,
    /// Look-back window in minutes.
    pub window_minutes: u32,
    /// Base URL of the search API.
    pub api_endpoint: String,
    pub api_type: ApiKind,
    /// Inline bearer token for local testing. Production runs should leave
    /// this unset and rely on the `TWITTER_BEARER_TOKEN` secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
}

/// Optional on-chain reporting target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmConfig {
    pub enabled: bool,
    /// Human-readable chain selector name, e.g. `ethereum-testnet-sepolia`.
    pub chain_selector_name: String,
    /// Address of the mention registry contract (`0x` + 40 hex chars).
    pub contract_address: String,
    pub gas_limit: u64,
}

/// One immutable configuration snapshot for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowConfig {
    /// Cron trigger spec, consumed by the scheduler only — opaque to the
    /// pipeline itself.
    pub schedule: String,
    pub search: SearchConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm: Option<EvmConfig>,
}

impl WorkflowConfig {
    /// Semantic validation beyond what serde enforces.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` when the term list is empty or
    /// contains a blank term, the window is zero, or an enabled EVM target
    /// has a malformed contract address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.terms.is_empty() {
            return Err(ConfigError::Validation(
                "search.terms must contain at least one term".to_string(),
            ));
        }
        if self.search.terms.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "search.terms must not contain blank entries".to_string(),
            ));
        }
        if self.search.window_minutes == 0 {
            return Err(ConfigError::Validation(
                "search.windowMinutes must be positive".to_string(),
            ));
        }
        if let Some(evm) = &self.evm {
            if evm.enabled && !is_evm_address(&evm.contract_address) {
                return Err(ConfigError::Validation(format!(
                    "evm.contractAddress '{}' is not a 0x-prefixed 20-byte hex address",
                    evm.contract_address
                )));
            }
        }
        Ok(())
    }
}

fn is_evm_address(addr: &str) -> bool {
    addr.len() == 42
        && addr.starts_with("0x")
        && addr[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Load and validate the workflow configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_workflow_config(path: &Path) -> Result<WorkflowConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: WorkflowConfig = serde_yaml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> WorkflowConfig {
        serde_yaml::from_str(yaml).expect("config yaml should parse")
    }

    const FULL_YAML: &str = r#"
schedule: "0 */5 * * * *"
search:
  terms: ["chainlink", "LINK", "$LINK"]
  windowMinutes: 60
  apiEndpoint: "https://api.twitter.com/2/tweets/search/recent"
  apiType: twitter
evm:
  enabled: true
  chainSelectorName: ethereum-testnet-sepolia
  contractAddress: "0x1111111111111111111111111111111111111111"
  gasLimit: 500000
"#;

    #[test]
    fn parses_full_config() {
        let config = parse(FULL_YAML);
        assert_eq!(config.schedule, "0 */5 * * * *");
        assert_eq!(config.search.terms, vec!["chainlink", "LINK", "$LINK"]);
        assert_eq!(config.search.window_minutes, 60);
        assert_eq!(config.search.api_type, ApiKind::Twitter);
        assert!(config.search.bearer_token.is_none());
        let evm = config.evm.expect("evm block should be present");
        assert!(evm.enabled);
        assert_eq!(evm.chain_selector_name, "ethereum-testnet-sepolia");
        assert_eq!(evm.gas_limit, 500_000);
    }

    #[test]
    fn parses_minimal_mock_config() {
        let config = parse(
            r#"
schedule: "0 0 * * * *"
search:
  terms: ["hello"]
  windowMinutes: 15
  apiEndpoint: "http://localhost:8080/search"
  apiType: mock
"#,
        );
        assert_eq!(config.search.api_type, ApiKind::Mock);
        assert!(config.evm.is_none());
        config.validate().expect("minimal config should validate");
    }

    #[test]
    fn validate_rejects_empty_terms() {
        let mut config = parse(FULL_YAML);
        config.search.terms.clear();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(ref m) if m.contains("at least one term")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn validate_rejects_blank_term() {
        let mut config = parse(FULL_YAML);
        config.search.terms.push("   ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_window() {
        let mut config = parse(FULL_YAML);
        config.search.window_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_contract_address_when_enabled() {
        let mut config = parse(FULL_YAML);
        config.evm.as_mut().unwrap().contract_address = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_ignores_bad_contract_address_when_disabled() {
        let mut config = parse(FULL_YAML);
        let evm = config.evm.as_mut().unwrap();
        evm.enabled = false;
        evm.contract_address = "not-an-address".to_string();
        config
            .validate()
            .expect("disabled evm block should not be validated");
    }

    #[test]
    fn unknown_api_type_fails_to_parse() {
        let result: Result<WorkflowConfig, _> = serde_yaml::from_str(
            r#"
schedule: "0 0 * * * *"
search:
  terms: ["a"]
  windowMinutes: 5
  apiEndpoint: "http://localhost/search"
  apiType: carrier-pigeon
"#,
        );
        assert!(result.is_err());
    }
}
