//! psikotest CLI: drives a psychometric test session from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "psikotest", version, about = "Digital psychometric assessment")]
struct Cli {
    /// Session storage directory (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and an answer template
    Init,

    /// Register the candidate taking the test
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Age in years (17-65)
        #[arg(long)]
        age: u8,

        /// pria or wanita
        #[arg(long)]
        gender: String,

        /// sma, d3, s1, s2 or s3
        #[arg(long)]
        education: String,

        /// Years of experience: 0, 1-2, 3-5, 6-10 or 10+
        #[arg(long)]
        experience: String,

        /// Field of experience
        #[arg(long)]
        field: String,

        /// City of residence
        #[arg(long)]
        city: String,
    },

    /// List the questions of a module
    Questions {
        /// personality, logic, numeric, verbal, visual or interest
        #[arg(long)]
        module: String,
    },

    /// Record a single answer
    Answer {
        #[arg(long)]
        module: String,

        /// Zero-based question index
        #[arg(long)]
        index: usize,

        /// 1-5 for personality, option index for cognitive modules, A or B for interest
        #[arg(long)]
        value: String,
    },

    /// Import answers from a flat JSON map of "<module>_<index>" keys
    Import {
        #[arg(long)]
        answers: PathBuf,
    },

    /// Score the recorded answers
    Score {
        /// Score even if some questions are unanswered
        #[arg(long)]
        allow_incomplete: bool,
    },

    /// Export reports for the scored session
    Report {
        /// Output format: html, text, json, all (comma-separated)
        #[arg(long)]
        format: Option<String>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show session progress
    Status,

    /// Discard the session so the test can be retaken
    Reset,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("psikotest=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = config::load_config_from(cli.config.as_deref()).and_then(|config| {
        let config = config.with_data_dir(cli.data_dir);
        match cli.command {
            Commands::Init => commands::init::execute(),
            Commands::Register {
                name,
                email,
                phone,
                age,
                gender,
                education,
                experience,
                field,
                city,
            } => commands::register::execute(
                &config,
                psikotest_core::model::Registration {
                    name,
                    email,
                    phone,
                    age,
                    gender,
                    education,
                    experience,
                    field,
                    city,
                },
            ),
            Commands::Questions { module } => commands::questions::execute(&module),
            Commands::Answer {
                module,
                index,
                value,
            } => commands::answer::execute(&config, &module, index, &value),
            Commands::Import { answers } => commands::import::execute(&config, answers),
            Commands::Score { allow_incomplete } => {
                commands::score::execute(&config, allow_incomplete)
            }
            Commands::Report { format, output } => {
                commands::report::execute(&config, format, output)
            }
            Commands::Status => commands::status::execute(&config),
            Commands::Reset => commands::reset::execute(&config),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
