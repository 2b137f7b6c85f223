use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::forms::csrf::CsrfGuard;
use crate::ui::messages::{info, warning};
use crate::web::{self, AppState};

/// Handle the `serve` command: check configuration, prepare the schema,
/// then block on the HTTP server.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        // Fatal before anything touches the network or the database.
        let secret = Config::secret_key()?;

        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.host = h.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        let pool = DbPool::open(&cfg.database)?;
        let csrf = CsrfGuard::new(secret, cfg.csrf_time_limit_secs, cfg.csrf_enabled);
        if !csrf.enabled() {
            warning("CSRF protection is disabled by configuration");
        }

        let addr = cfg.bind_addr();
        info(format!("Serving on http://{} (database: {})", addr, cfg.database));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(web::serve(AppState::new(pool, csrf), &addr))?;
    }

    Ok(())
}
