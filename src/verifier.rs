use std::time::{SystemTime, UNIX_EPOCH};

use alloy::signers::Signer;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Config,
    logger::Logger,
    utils::{
        fetch::{send_http_request, RequestHandler, RequestParams},
        files::WalletCredential,
    },
};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct VerificationPayload {
    wallet_address: String,
    timestamp: u64,
    sign: String,
}

fn claim_message(address: &str, timestamp: u64) -> String {
    format!("I am claiming my SBT verification points for {address} at {timestamp}")
}

/// Signs the timestamped claim and submits it to the verification API.
/// Request failures are logged and reported as `false`; only signing errors
/// propagate.
pub async fn verify_sbt(
    wallet: &WalletCredential,
    config: &Config,
    handler: &RequestHandler,
    logger: &Logger,
) -> eyre::Result<bool> {
    let signer = wallet.signer()?;

    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    let message = claim_message(&wallet.address, timestamp);
    let signature = signer.sign_message(message.as_bytes()).await?;

    let payload = VerificationPayload {
        wallet_address: wallet.address.clone(),
        timestamp,
        sign: format!("0x{}", hex::encode(signature.as_bytes())),
    };

    let params = RequestParams {
        url: &config.verification_api_url,
        method: Method::POST,
        body: Some(&payload),
        headers: None,
    };

    match send_http_request::<Value, _>(handler, params).await {
        Ok(body) if !body.is_null() => {
            logger.success(format!("Verification result: {body}"));
            Ok(true)
        }
        Ok(_) => {
            logger.error("Verification returned an empty response");
            Ok(false)
        }
        Err(e) => {
            logger.error_with("SBT verification failed", e);
            Ok(false)
        }
    }
}
