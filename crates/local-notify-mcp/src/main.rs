//! Local Notify MCP Server - Entry Point
//!
//! Runs the MCP server over stdio for integration with MCP clients.

use anyhow::Result;
use argh::FromArgs;

use local_notify_mcp::dialog::DialogInvoker;
use local_notify_mcp::server::NotifyServer;
use local_notify_mcp::service::StdioService;

/// Local Notify MCP Server - Show native dialogs from AI assistants
#[derive(FromArgs)]
struct Args {
    /// dialog utility to invoke (default: /usr/bin/osascript)
    #[argh(option, default = "String::from(\"/usr/bin/osascript\")")]
    dialog_command: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args: Args = argh::from_env();

    // Initialize logging to stderr (stdout is used for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting local-notify MCP server");
    log::info!("Dialog command: {}", args.dialog_command);

    let server = NotifyServer::new(DialogInvoker::new(&args.dialog_command));
    let mut service = StdioService::new(server);
    service.run().await?;

    Ok(())
}
