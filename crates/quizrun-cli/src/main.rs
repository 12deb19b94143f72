//! quizrun CLI — the terminal front end for the exam engine.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod session;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Terminal quiz and exam runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take an exam interactively
    Take {
        /// Path to a .json question file
        #[arg(long)]
        exam: Option<PathBuf>,

        /// Name of a predefined exam (see `quizrun list`)
        #[arg(long)]
        predefined: Option<String>,

        /// URL of a .json question file
        #[arg(long)]
        url: Option<String>,

        /// Directory to save finished results to
        #[arg(long)]
        output: Option<PathBuf>,

        /// Don't show whether each answer was correct
        #[arg(long)]
        no_feedback: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question files
    Validate {
        /// Path to a question file or directory
        #[arg(long)]
        exam: PathBuf,
    },

    /// List predefined exams
    List {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example exam
    Init,
}

/// `RUST_LOG` plus info-level logging for quizrun itself.
fn log_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("quizrun=info".parse().unwrap())
        .add_directive("quizrun_core=info".parse().unwrap())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            exam,
            predefined,
            url,
            output,
            no_feedback,
            config,
        } => {
            let selector = commands::take::ExamSelector {
                exam,
                predefined,
                url,
            };
            commands::take::execute(selector, config, output, no_feedback).await
        }
        Commands::Validate { exam } => commands::validate::execute(exam),
        Commands::List { config } => commands::list::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_keeps_quizrun_directives() {
        let filter = log_filter().to_string();
        assert!(filter.contains("quizrun=info"));
        assert!(filter.contains("quizrun_core=info"));
    }
}
