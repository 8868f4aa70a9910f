use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use cartfeed_client::api::{parse_arguments, ApiClient};
use cartfeed_client::catalog::{self, ApiCommand};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Sends a command to the Cartfeed vendor API")]
struct Args {
    /// Command name, or "help" to list available commands
    command: Option<String>,

    /// Command arguments as name=value, or "help" for command usage
    args: Vec<String>,

    /// Base URL of the vendor API
    #[clap(long, env = "VENDOR_API_URL")]
    api_url: Option<String>,

    /// Shared secret token for the vendor API
    #[clap(long, env = "VENDOR_API_TOKEN")]
    api_token: Option<String>,
}

fn print_catalog() {
    println!("Usage: cartfeed-client <command> [help | name=value]...");
    println!("  Available commands (vendor API v0.7.2):");
    for command in catalog::COMMANDS {
        println!("    {}", command.name);
    }
}

fn print_command_help(command: &ApiCommand) {
    println!("command: {}", command.name);
    println!("    {}", command.help);
    if !command.required_arguments.is_empty() {
        println!("      Required arguments:");
        for arg in command.required_arguments {
            println!("        {} : {}", arg.name, arg.info);
        }
    }
    if !command.optional_arguments.is_empty() {
        println!("      Optional arguments:");
        for arg in command.optional_arguments {
            println!("        {} : {}", arg.name, arg.info);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    // Parse command-line arguments
    let args = Args::parse();

    let name = match args.command.as_deref() {
        None | Some("help") => {
            print_catalog();
            return Ok(());
        }
        Some(name) => name,
    };

    let Some(command) = catalog::find_command(name) else {
        bail!("command '{}' not found", name);
    };

    if args.args.len() == 1 && args.args[0] == "help" {
        print_command_help(command);
        return Ok(());
    }

    let command_args = parse_arguments(&args.args)?;

    let api_url = args
        .api_url
        .context("--api-url (or VENDOR_API_URL) must be set")?;
    let api_token = args
        .api_token
        .context("--api-token (or VENDOR_API_TOKEN) must be set")?;

    debug!("sending '{}' to {}", command.name, api_url);

    let client = ApiClient::new(&api_url, &api_token);
    let response = client
        .send(command.name, &command_args)
        .await
        .context("Error sending command to vendor API server")?;

    println!("{}", response);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "cartfeed-client",
            "transaction_get",
            "transaction_id=616",
            "--api-url",
            "https://api.example.tld",
            "--api-token",
            "token123",
        ])
        .unwrap();

        assert_eq!(args.command.as_deref(), Some("transaction_get"));
        assert_eq!(args.args, ["transaction_id=616"]);
        assert_eq!(args.api_url.as_deref(), Some("https://api.example.tld"));
        assert_eq!(args.api_token.as_deref(), Some("token123"));
    }
}
