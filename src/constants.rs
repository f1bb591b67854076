pub const CONFIG_FILE_PATH: &str = "data/config.toml";
pub const WALLETS_FILE_PATH: &str = "data/wallets.json";

pub const BASE_EXPLORER_URL: &str = "https://basescan.org";

pub const MAX_REQUEST_ATTEMPTS: u32 = 30;
pub const INITIAL_BACKOFF_MS: u64 = 2000;
pub const BACKOFF_MULTIPLIER: f64 = 1.5;
pub const RETRY_DELAY_MS: u64 = 2000;
pub const REQUEST_TIMEOUT_SECS: u64 = 60;
