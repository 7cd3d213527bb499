pub mod add;
pub mod backup;
pub mod config;
pub mod convert;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod window;
pub mod world;

use crate::errors::{AppError, AppResult};

/// Resolve the world argument of a command, falling back to the configured
/// default world.
pub(crate) fn resolve_world_arg(
    arg: &Option<String>,
    cfg: &crate::config::Config,
) -> AppResult<String> {
    arg.clone()
        .or_else(|| cfg.default_world.clone())
        .ok_or_else(|| {
            AppError::Config(
                "no world given and no default_world configured (see 'config --print')"
                    .to_string(),
            )
        })
}
