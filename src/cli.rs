use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "NUTRI_LOG";

/// NutriPlan: daily calorie, macro and meal plan calculator.
#[derive(Parser, Debug)]
#[command(name = "nutri-plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub file: PathBuf,

    /// Log at debug level (overrides NUTRI_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute a meal plan for the saved profile.
    Plan {
        /// Generative-model response to use in place of the computed plan
        /// when it contains a valid plan.
        #[arg(short, long)]
        external: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the plan to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Answer the questionnaire interactively and show the plan.
    Ask {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Save the answered profile here without asking.
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            external: None,
            format: OutputFormat::Text,
            output: None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
