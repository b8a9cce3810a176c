pub mod config;
pub mod list;
pub mod time;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Store backend URL, token, branch and page size")]
    Config(config::ConfigArgs),
    #[command(about = "Show one page of a backend resource", arg_required_else_help = true)]
    List(list::ListArgs),
    #[command(about = "Compute when a session ends", arg_required_else_help = true)]
    EndTime(time::EndTimeArgs),
    #[command(about = "Compute overstay minutes for a session", arg_required_else_help = true)]
    Overstay(time::OverstayArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Config(args) => config::cmd(args),
            Commands::List(args) => list::cmd(args).await,
            Commands::EndTime(args) => time::end_time(args),
            Commands::Overstay(args) => time::overstay(args),
        }
    }
}
