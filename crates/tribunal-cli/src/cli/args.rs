use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tribunal",
    version,
    about = "Evaluate LLM judges at spotting hallucinated summaries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the configured evaluation suite
    Run(RunArgs),
    /// Write a commented sample configuration
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Evaluation configuration file
    #[arg(short, long, default_value = "eval.yaml")]
    pub config: PathBuf,

    /// Override the configured number of dataset rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Override the configured shuffle seed
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the sample configuration
    #[arg(default_value = "eval.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
