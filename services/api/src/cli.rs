use crate::report::{run_analyze, run_options, AnalyzeArgs, OptionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use injury_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Injury Check",
    about = "Score lifting-injury questionnaires over HTTP or from the command line",
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
    /// Score a single questionnaire and print the guidance
    Analyze(AnalyzeArgs),
    /// List the accepted values for each multiple-choice answer
    Options(OptionsArgs),
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
        Command::Analyze(args) => run_analyze(args),
        Command::Options(args) => run_options(args),
    }
}
