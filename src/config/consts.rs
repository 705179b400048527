/// Processor name used when no config overrides it
pub const DEFAULT_PROCESSOR_NAME: &str = "DemoProcessor";
/// Number of Fibonacci terms printed by the demo
pub const DEFAULT_FIBONACCI_TERMS: i64 = 10;
/// Upper bound (inclusive) for the demo's prime listing
pub const DEFAULT_PRIME_LIMIT: i64 = 30;
/// Label used for items without a `name` field
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";
/// Environment variable naming an optional YAML demo config
pub const CONFIG_ENV_VAR: &str = "SHOWCASE_CONFIG";
/// Tracing filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "showcase=warn";
/// Width of the `=` rules around the demo banner
pub const BANNER_WIDTH: usize = 60;
