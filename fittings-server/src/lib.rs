//! QRixAlt API - railway track fittings inventory service
//!
//! Each physical fitting (elastic rail clip, liner, rail pad, sleeper) carries
//! a QR code. This service stores one row per fitting in SQLite and exposes
//! CRUD plus aggregate analytics over HTTP.
//!
//! # Module layout
//!
//! ```text
//! fittings-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── db/            # pool, migrations, repositories
//! ├── api/           # routers and handlers
//! ├── middleware/    # request logging
//! └── utils/         # error mapping, extractors, logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Load `.env` (if present), read the configuration and initialize logging from it
pub fn setup_environment() -> anyhow::Result<Config> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    let config = Config::from_env();
    init_logger(&config)?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ____  ____  _       ___    ____
  / __ \/ __ \(_)  __ /   |  / / /_
 / / / / /_/ / / |/_// /| | / / __/
/ /_/ / _, _/ />  < / ___ |/ / /_
\___\_\_/ |_/_/_/|_|/_/  |_/_/\__/
    "#
    );
}
