use std::{io::ErrorKind, path::Path};

use alloy::signers::local::PrivateKeySigner;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCredential {
    pub address: String,
    pub private_key: String,
}

impl WalletCredential {
    pub fn signer(&self) -> eyre::Result<PrivateKeySigner> {
        let key = self
            .private_key
            .strip_prefix("0x")
            .unwrap_or(&self.private_key);

        Ok(key.parse()?)
    }
}

/// Reads the credential file. An absent file means "no wallets", not an
/// error; a present but malformed file is.
pub async fn read_wallets(path: impl AsRef<Path>) -> eyre::Result<Vec<WalletCredential>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's first account
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[tokio::test]
    async fn missing_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();

        let wallets = read_wallets(dir.path().join("wallets.json")).await.unwrap();

        assert!(wallets.is_empty());
    }

    #[tokio::test]
    async fn parses_credential_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        tokio::fs::write(
            &path,
            format!(r#"[{{"address":"{TEST_ADDRESS}","privateKey":"0x{TEST_PRIVATE_KEY}"}}]"#),
        )
        .await
        .unwrap();

        let wallets = read_wallets(&path).await.unwrap();

        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].address, TEST_ADDRESS);
        assert_eq!(wallets[0].private_key, format!("0x{TEST_PRIVATE_KEY}"));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        tokio::fs::write(&path, "not a wallet list").await.unwrap();

        assert!(read_wallets(&path).await.is_err());
    }

    #[test]
    fn signer_accepts_prefixed_and_bare_keys() {
        let bare = WalletCredential {
            address: TEST_ADDRESS.to_string(),
            private_key: TEST_PRIVATE_KEY.to_string(),
        };
        let prefixed = WalletCredential {
            address: TEST_ADDRESS.to_string(),
            private_key: format!("0x{TEST_PRIVATE_KEY}"),
        };

        let bare_signer = bare.signer().unwrap();
        let prefixed_signer = prefixed.signer().unwrap();

        assert_eq!(bare_signer.address(), prefixed_signer.address());
        assert_eq!(
            bare_signer.address().to_string().to_lowercase(),
            TEST_ADDRESS.to_lowercase()
        );
    }

    #[test]
    fn invalid_key_is_an_error() {
        let wallet = WalletCredential {
            address: TEST_ADDRESS.to_string(),
            private_key: "not-a-key".to_string(),
        };

        assert!(wallet.signer().is_err());
    }
}
