//! One handler per subcommand.

pub mod migrate;
pub mod seed;
pub mod serve;

pub use migrate::MigrateCommandHandler;
pub use seed::SeedCommandHandler;
pub use serve::ServeCommandHandler;
