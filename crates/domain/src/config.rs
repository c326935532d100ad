pub mod errors;
pub mod logging;
pub mod records;
pub mod resolver;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::RecordsConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
