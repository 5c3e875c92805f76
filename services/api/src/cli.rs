use crate::demo::{run_bank_listing, run_demo, run_score, BankArgs, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use disc_assessment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DISC Assessment Service",
    about = "Score forced-choice behavioral assessments from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a CSV of responses and print the profile, validity and description
    Score(ScoreArgs),
    /// Print the questions of a built-in bank
    Bank(BankArgs),
    /// Score a set of synthetic respondents to show how validity reacts to answer patterns
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Bank(args) => run_bank_listing(args),
        Command::Demo(args) => run_demo(args),
    }
}
