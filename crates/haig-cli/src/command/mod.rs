use clap::{Parser, Subcommand};

use self::{
    init::InitArg, questions::QuestionsArg, recommend::RecommendArg, train::TrainArg,
};

mod init;
mod questions;
mod recommend;
mod train;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Create an untrained strategy model
    Init(#[clap(flatten)] InitArg),
    /// Recommend a strategy for a match
    Recommend(#[clap(flatten)] RecommendArg),
    /// Adjust the model with a verdict on its recommendation
    Train(#[clap(flatten)] TrainArg),
    /// List play-style questions and strategies
    Questions(#[clap(flatten)] QuestionsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match args.mode {
        Mode::Init(arg) => init::run(&arg)?,
        Mode::Recommend(arg) => recommend::run(&arg)?,
        Mode::Train(arg) => train::run(&arg)?,
        Mode::Questions(arg) => questions::run(&arg),
    }
    Ok(())
}
