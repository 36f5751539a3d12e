//! System-wide constants for the FiatRamp gateway.

/// Default per-transaction daily limit, in whole NGN.
pub const DEFAULT_DAILY_LIMIT_NGN: i64 = 10_000_000;

/// AML risk threshold: users with a risk score strictly above this
/// value are rejected by the compliance evaluator.
pub const AML_RISK_THRESHOLD: f64 = 0.7;

/// Licensed partner identifiers used when no explicit set is configured.
pub const DEFAULT_LICENSED_PARTNERS: [&str; 2] = ["vasp_001", "vasp_002"];

/// The fiat currency all wallet balances and amounts are denominated in.
pub const FIAT_CURRENCY: &str = "NGN";

/// Default API listen port.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Environment variable overriding the daily limit.
pub const ENV_DAILY_LIMIT: &str = "FIATRAMP_DAILY_LIMIT";

/// Environment variable overriding the licensed partner set (comma-separated).
pub const ENV_LICENSED_PARTNERS: &str = "FIATRAMP_LICENSED_PARTNERS";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gateway name.
pub const GATEWAY_NAME: &str = "FiatRamp";
