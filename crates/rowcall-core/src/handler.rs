//! Slash-command handler bridging HTTP dispatch to the table lookup.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info, warn};

use rowcall_http::dispatch::SlashHandler;
use rowcall_model::{CommandReply, SlashCommand};
use rowcall_upstream::{GridSource, IdentityResolver};

use crate::config::RowcallConfig;
use crate::lookup::lookup;

/// Reply for a search value absent from the spreadsheet.
pub const NOT_IN_SPREADSHEET_REPLY: &str = "You are not in the spreadsheet :(";

/// Reply for a grid whose header row no longer matches the configured
/// column names.
pub const SCHEMA_DRIFT_REPLY: &str =
    "Some of the table columns are changed, please contact the administrator";

/// Handler wiring identity resolution, grid fetching, and lookup.
///
/// Both collaborators sit behind trait objects so tests can substitute
/// in-memory fakes for the network clients.
pub struct RowcallHandler {
    grid_source: Arc<dyn GridSource>,
    identity: Arc<dyn IdentityResolver>,
    config: RowcallConfig,
}

impl std::fmt::Debug for RowcallHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowcallHandler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RowcallHandler {
    /// Create a handler over the given collaborators.
    #[must_use]
    pub fn new(
        grid_source: Arc<dyn GridSource>,
        identity: Arc<dyn IdentityResolver>,
        config: RowcallConfig,
    ) -> Self {
        Self {
            grid_source,
            identity,
            config,
        }
    }
}

impl SlashHandler for RowcallHandler {
    fn handle_command(
        &self,
        cmd: SlashCommand,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<CommandReply>> + Send>> {
        let grid_source = Arc::clone(&self.grid_source);
        let identity = Arc::clone(&self.identity);
        let config = self.config.clone();

        Box::pin(
            async move { run_command(grid_source.as_ref(), identity.as_ref(), &config, &cmd).await },
        )
    }
}

/// Resolve the search value, fetch the grid, and produce the reply.
async fn run_command(
    grid_source: &dyn GridSource,
    identity: &dyn IdentityResolver,
    config: &RowcallConfig,
    cmd: &SlashCommand,
) -> anyhow::Result<CommandReply> {
    // 1. Resolve what to search for: the caller's profile email, or the
    // command text verbatim.
    let search_value = if config.search_by_email {
        identity
            .resolve_email(&cmd.user_id)
            .await
            .context("resolving caller email")?
    } else {
        cmd.text.clone()
    };

    // 2. Fetch the grid fresh; no caching between invocations.
    let range = grid_source
        .fetch_values()
        .await
        .context("fetching spreadsheet values")?;

    // 3. Look the caller up and map the outcome to reply text. Lookup
    // failures are user-visible replies, not errors.
    match lookup(
        &range.values,
        config.header_row_index,
        &config.searching_value_from,
        &config.taking_value_from,
        &search_value,
        config.case_sensitive,
    ) {
        Ok(value) => {
            info!(user_id = %cmd.user_id, "lookup succeeded");
            Ok(CommandReply::new(format!(
                "Hello, {search_value}!\n\n{msg}\n{value}\n",
                msg = config.success_message,
            )))
        }
        Err(e) if e.is_schema_drift() => {
            warn!(error = %e, "table columns do not match configuration");
            Ok(CommandReply::new(SCHEMA_DRIFT_REPLY))
        }
        Err(e) => {
            debug!(user_id = %cmd.user_id, error = %e, "no matching row");
            Ok(CommandReply::new(NOT_IN_SPREADSHEET_REPLY))
        }
    }
}
