use clap::Parser;
use goalflow::cli::{Cli, Commands};
use goalflow::cli_handlers;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Order { file, strict, json } => cli_handlers::handle_order(&file, strict, json),
        Commands::Progress { file, json } => cli_handlers::handle_progress(&file, json),
        Commands::Board { file } => cli_handlers::handle_board(&file),
        Commands::Actions { file, task_id } => cli_handlers::handle_actions(&file, &task_id),
        Commands::DependCheck {
            file,
            task_id,
            on_id,
        } => cli_handlers::handle_depend_check(&file, &task_id, &on_id),
        Commands::Dashboard { file } => cli_handlers::handle_dashboard(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
