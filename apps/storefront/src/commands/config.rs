//! # Config Commands
//!
//! Commands for retrieving application configuration.

use serde::Serialize;
use tracing::debug;

use crate::state::ConfigState;

/// The renderer-facing part of the configuration.
///
/// The catalog path is a host concern and stays out of the response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub store_name: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub hot_deals_limit: usize,
}

impl From<&ConfigState> for ConfigResponse {
    fn from(config: &ConfigState) -> Self {
        ConfigResponse {
            store_name: config.store_name.clone(),
            currency_code: config.currency_code.clone(),
            currency_symbol: config.currency_symbol.clone(),
            hot_deals_limit: config.hot_deals_limit,
        }
    }
}

/// Gets the current application configuration.
///
/// ## When Used
/// - Renderer startup (store name in the header)
/// - Price formatting (currency symbol)
pub fn get_config(config: &ConfigState) -> ConfigResponse {
    debug!("get_config command");
    ConfigResponse::from(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_response_is_camel_case() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["storeName"], "Only");
        assert_eq!(json["hotDealsLimit"], 8);
        assert!(json.get("catalogPath").is_none());
    }
}
