use anyhow::Context;
use bookshelf_kernel::settings::Settings;
use clap::{Parser, Subcommand};

/// Book catalogue REST service
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Override the configured listen host
        #[arg(long)]
        host: Option<String>,
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the resolved settings as JSON (database password omitted)
    Settings,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }

            bookshelf_telemetry::init(&settings.telemetry)?;
            tracing::info!(env = ?settings.environment, "bookshelf CLI serving");

            tokio::runtime::Runtime::new()
                .with_context(|| "failed to start async runtime")?
                .block_on(bookshelf_app::run(settings))
        }
        Command::Settings => {
            let rendered = serde_json::to_string_pretty(&settings)
                .with_context(|| "failed to render settings")?;
            println!("{rendered}");
            Ok(())
        }
    }
}
