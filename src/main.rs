use std::sync::Arc;

use config::Config;
use constants::WALLETS_FILE_PATH;
use logger::{Logger, StepStatus};
use utils::{fetch::RequestHandler, files::read_wallets};

mod config;
mod constants;
mod logger;
mod minter;
mod utils;
mod verifier;

const BANNER: &str = r#"
 ◆ ──────────────────────────────────── ◆
       LayerEdge Auto Bot
       SBT mint + verification points
 ◆ ──────────────────────────────────── ◆
"#;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Warn)
        .init();

    println!("{BANNER}");

    let logger = Arc::new(Logger::new(true));
    let config = Config::read_default().await;
    logger.debug(format!("Using contract {}", config.contract_address));

    let wallets = read_wallets(WALLETS_FILE_PATH).await?;
    if wallets.is_empty() {
        logger.info(format!("No wallets found in {WALLETS_FILE_PATH}"));
    }

    let wallet = wallets
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("No wallet available to process"))?;

    let handler = RequestHandler::new(logger.clone())?;

    logger.progress(&wallet.address, "mint", StepStatus::Pending);
    match minter::mint_sbt(&wallet, &config, &logger).await {
        Ok(true) => logger.progress(&wallet.address, "mint", StepStatus::Success),
        Ok(false) => logger.progress(&wallet.address, "mint", StepStatus::Failed),
        Err(e) => {
            logger.error_with("Minting failed", e);
            logger.progress(&wallet.address, "mint", StepStatus::Failed);
        }
    }

    logger.progress(&wallet.address, "verification", StepStatus::Pending);
    match verifier::verify_sbt(&wallet, &config, &handler, &logger).await {
        Ok(true) => logger.progress(&wallet.address, "verification", StepStatus::Success),
        Ok(false) => logger.progress(&wallet.address, "verification", StepStatus::Failed),
        Err(e) => {
            logger.error_with("SBT verification failed", e);
            logger.progress(&wallet.address, "verification", StepStatus::Failed);
        }
    }

    Ok(())
}
