//! Slash-command handler trait and dispatch.

use std::future::Future;
use std::pin::Pin;

use rowcall_model::{CommandReply, SlashCommand};

/// Trait the command business logic must implement.
///
/// The handler receives a decoded, signature-verified command and produces
/// the reply text. This trait is the boundary between the HTTP transport and
/// the lookup logic; an `Err` means an internal failure and the transport
/// answers with an error status carrying no detail.
pub trait SlashHandler: Send + Sync + 'static {
    /// Handle one slash-command invocation.
    fn handle_command(
        &self,
        cmd: SlashCommand,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<CommandReply>> + Send>>;
}

/// Dispatch a decoded command to the handler.
pub async fn dispatch_command<H: SlashHandler>(
    handler: &H,
    cmd: SlashCommand,
) -> anyhow::Result<CommandReply> {
    tracing::debug!(command = %cmd.command, user_id = %cmd.user_id, "dispatching slash command");
    handler.handle_command(cmd).await
}
