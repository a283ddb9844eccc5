// Single source of truth for all default values.

// --- Session ---
pub const DEFAULT_RECORD_COUNT: usize = 10;
pub const DEFAULT_RANDOMIZE: bool = true;
pub const DEFAULT_STRICT_SIZING: bool = false;
pub const DEFAULT_LABELS: [&str; 3] = ["Positive", "Negative", "Neutral"];

// --- Ledger ---
/// Identifier header used when no id column is configured.
pub const DEFAULT_ID_HEADER: &str = "id";
pub const LABEL_HEADER: &str = "label";
pub const ANNOTATED_AT_HEADER: &str = "annotated_at";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Files & environment ---
pub const CONFIG_FILENAME: &str = "tortus.toml";
pub const LOG_ENV_VAR: &str = "TORTUS_LOG";
