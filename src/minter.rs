use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::ProviderBuilder,
    sol,
};

use crate::{
    config::Config, constants::BASE_EXPLORER_URL, logger::Logger, utils::files::WalletCredential,
};

sol! {
    #[sol(rpc)]
    interface ISbtMinter {
        function mint(uint256 amount, address to) external;
    }
}

/// Submits the mint transaction with the configured gas parameters and waits
/// for the receipt. Gas is fixed by config, not estimated.
pub async fn mint_sbt(
    wallet: &WalletCredential,
    config: &Config,
    logger: &Logger,
) -> eyre::Result<bool> {
    let signer = wallet.signer()?;
    let recipient: Address = wallet.address.parse()?;

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(config.rpc_url.parse()?);

    let contract = ISbtMinter::new(config.contract_address, &provider);

    logger.info(format!(
        "Minting {} SBT to {recipient}",
        config.mint_quantity
    ));

    let pending = contract
        .mint(U256::from(config.mint_quantity), recipient)
        .gas(config.gas_limit)
        .max_fee_per_gas(config.max_fee_per_gas.into())
        .max_priority_fee_per_gas(config.max_priority_fee_per_gas.into())
        .send()
        .await?;

    let tx_hash = *pending.tx_hash();
    logger.info(format!("Transaction sent: {BASE_EXPLORER_URL}/tx/{tx_hash}"));

    let receipt = pending.get_receipt().await?;

    if receipt.status() {
        logger.success("Transaction confirmed");
        return Ok(true);
    }

    logger.warn(format!("Transaction reverted: {tx_hash}"));

    Ok(false)
}
