// weather-tools-client/src/main.rs
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod client;

use client::{parse_param, BoxedError, ToolsClient};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short = 'u', long, default_value = "http://localhost:8000")]
    base_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tools and plugins exposed by the server
    Tools,
    /// Call a tool, e.g. `call get_alerts -p area=TX`
    Call {
        name: String,
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Send raw input text to a plugin
    Plugin { name: String, input: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), BoxedError> {
    let client = ToolsClient::new(&cli.base_url)?;

    match cli.command {
        Commands::Tools => {
            println!("Tools:");
            for tool in client.list_tools().await?.tools {
                println!("  - {}: {}", tool.name, tool.description);
            }
            println!("\nPlugins:");
            for plugin in client.list_plugins().await? {
                println!("  - {}: {}", plugin.name, plugin.description);
            }
        }
        Commands::Call { name, params } => {
            let arguments: Map<String, Value> = params.into_iter().map(|(k, v)| (k, Value::String(v))).collect();
            println!("{}", client.call_tool(&name, arguments).await?);
        }
        Commands::Plugin { name, input } => {
            println!("{}", client.run_plugin(&name, &input).await?);
        }
    }
    Ok(())
}
