/// Google Ads REST API version used in request paths
pub const DEFAULT_API_VERSION: &str = "v17";
/// Base URL of the Google Ads REST API (without version prefix)
pub const DEFAULT_REST_BASE_URL: &str = "https://googleads.googleapis.com";
/// OAuth2 token endpoint used for the refresh-token grant
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Default per-call timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("gads-client/", env!("CARGO_PKG_VERSION"));
/// Number of micros in one unit of account currency
pub const MICROS_PER_UNIT: f64 = 1_000_000.0;
/// 2^63, the smallest `f64` magnitude that does not fit in an `i64`
pub const I64_F64_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// Default maximum number of API requests per rate limit period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
/// Default rate limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 1;
/// Default number of requests that can be issued back to back
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 20;
/// Update mask used when changing a campaign budget amount
pub const BUDGET_UPDATE_MASK: &str = "amountMicros";
/// Update mask used when changing a campaign bidding strategy
pub const BIDDING_STRATEGY_UPDATE_MASK: &str = "biddingStrategy";
