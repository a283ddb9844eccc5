//! Configuration for tortus.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod session_config;
pub mod tortus_config;

pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
pub use tortus_config::TortusConfig;
