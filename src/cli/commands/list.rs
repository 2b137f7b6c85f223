use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_items;
use crate::errors::{AppError, AppResult};
use crate::web::listing;

/// Print every stored item, in the same shape as the `/success` page
/// or as JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let items = pool.with_session(|tx| load_items(tx))?;

        if *json {
            let out = serde_json::to_string_pretty(&items)
                .map_err(|e| AppError::Other(format!("cannot serialize items: {}", e)))?;
            println!("{}", out);
        } else {
            println!("{}", listing::render(&items));
        }
    }

    Ok(())
}
