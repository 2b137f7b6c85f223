use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database file
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", db_path.display()));

    let pool = DbPool::open(&db_path)?;
    let version = schema_version(&pool.connect()?)?;

    success(format!(
        "Database initialized at {} (schema v{})",
        db_path.display(),
        version
    ));
    Ok(())
}
