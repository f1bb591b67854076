use alloy::primitives::Address;
use serde::Deserialize;

use crate::constants::CONFIG_FILE_PATH;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub rpc_url: String,
    pub contract_address: Address,
    pub verification_api_url: String,
    pub mint_quantity: u64,
    pub gas_limit: u64,
    pub max_fee_per_gas: u64,
    pub max_priority_fee_per_gas: u64,
}

impl Config {
    pub async fn read_default() -> Config {
        let contents = tokio::fs::read_to_string(CONFIG_FILE_PATH)
            .await
            .expect("Config file to be present");

        toml::from_str(&contents).expect("Config file to be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        rpc_url = "https://mainnet.base.org"
        contract_address = "0xb06C68C8f9DE60107eAbda0D7567743967113360"
        verification_api_url = "https://referralapi.layeredge.io/api/task/nft-verification/1"
        mint_quantity = 1
        gas_limit = 189738
        max_fee_per_gas = 3500000
        max_priority_fee_per_gas = 3500000
    "#;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(SAMPLE).unwrap();

        assert_eq!(config.rpc_url, "https://mainnet.base.org");
        assert_eq!(
            config.contract_address,
            "0xb06C68C8f9DE60107eAbda0D7567743967113360"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(config.mint_quantity, 1);
        assert_eq!(config.gas_limit, 0x2e52a);
        assert_eq!(config.max_fee_per_gas, 0x3567e0);
    }

    #[test]
    fn rejects_malformed_address() {
        let broken = SAMPLE.replace("0xb06C", "0xZZZZ");
        assert!(toml::from_str::<Config>(&broken).is_err());
    }
}
