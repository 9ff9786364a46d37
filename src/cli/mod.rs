pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "festify")]
#[command(about = "Festify CLI - developer tools for the Festify API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Mint and inspect Supabase-style access tokens")]
    Token {
        #[command(subcommand)]
        cmd: commands::token::TokenCommands,
    },

    #[command(about = "Show whether a request would need a bearer token")]
    Route {
        #[arg(help = "HTTP method, e.g. GET")]
        method: String,
        #[arg(help = "Request path, e.g. /api/events/upcoming")]
        path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Token { cmd } => commands::token::handle(cmd, output_format),
        Commands::Route { method, path } => commands::route::handle(&method, &path, output_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_issue() {
        let cli = Cli::try_parse_from([
            "festify", "token", "issue", "--sub", "u1", "--role", "organizer", "--json",
        ])
        .unwrap();
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Token { .. }));
    }

    #[test]
    fn parses_route() {
        let cli = Cli::try_parse_from(["festify", "route", "GET", "/api/events"]).unwrap();
        match cli.command {
            Commands::Route { method, path } => {
                assert_eq!(method, "GET");
                assert_eq!(path, "/api/events");
            }
            _ => panic!("expected route command"),
        }
    }
}
