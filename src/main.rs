use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nutri_plan_rs::cli::{Cli, Command, LOG_ENV, OutputFormat};
use nutri_plan_rs::error::{NutriError, Result};
use nutri_plan_rs::external::{PlanSource, resolve_plan};
use nutri_plan_rs::interface::{
    collect_profile, display_meal_plan, format_meal_plan, prompt_yes_no, suggest_activity_level,
    write_plan_csv,
};
use nutri_plan_rs::models::{DailyMealPlan, ProfileInput};
use nutri_plan_rs::state::{load_profile, save_plan, save_profile};
use nutri_plan_rs::NutritionAdvisor;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `--verbose` wins over NUTRI_LOG, which wins over "warn".
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            external,
            format,
            output,
        } => cmd_plan(&cli.file, external.as_deref(), format, output.as_deref()),
        Command::Ask { format, save } => cmd_ask(&cli.file, format, save.as_deref()),
    }
}

/// Compute (or adopt) a plan for the saved profile.
fn cmd_plan(
    file: &Path,
    external: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    if !file.exists() {
        eprintln!("Profile file not found: {}", file.display());
        eprintln!("Run 'nutri-plan ask' to create one.");
        return Ok(());
    }

    let input = load_profile(file)?;
    warn_on_unknown_activity(&input);

    let response = external.map(fs::read_to_string).transpose()?;
    let resolved = resolve_plan(&NutritionAdvisor::new(), &input, response.as_deref())?;
    info!(source = %resolved.source, "plan resolved");

    emit(&resolved.plan, resolved.source, format, output)
}

/// Run the questionnaire and show the plan.
///
/// With `--save` the profile is written there directly; otherwise the user
/// is offered to save it to the `--file` path.
fn cmd_ask(file: &Path, format: OutputFormat, save: Option<&Path>) -> Result<()> {
    let input = collect_profile()?;
    let plan = NutritionAdvisor::new().generate_advice(&input)?;

    emit(&plan, PlanSource::Computed, format, None)?;

    let target = match save {
        Some(path) => Some(path),
        None if prompt_yes_no(&format!("Save profile to {}?", file.display()), true)? => {
            Some(file)
        }
        None => None,
    };

    if let Some(path) = target {
        save_profile(path, &input)?;
        println!("Profile saved to {}.", path.display());
    }

    Ok(())
}

fn warn_on_unknown_activity(input: &ProfileInput) {
    let Some(activity) = input.activity_level.as_deref() else {
        return;
    };

    if let Some(level) = suggest_activity_level(activity) {
        warn!(
            activity,
            suggestion = %level,
            "unrecognized activity level, sedentary multiplier will be used"
        );
    }
}

fn emit(
    plan: &DailyMealPlan,
    source: PlanSource,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match (format, output) {
        (OutputFormat::Text, None) => {
            display_meal_plan(plan);
            println!("Source: {}", source);
            return Ok(());
        }
        (OutputFormat::Json, Some(path)) => {
            save_plan(path, plan)?;
            println!("Plan written to {}", path.display());
            return Ok(());
        }
        _ => {}
    }

    let rendered = match format {
        OutputFormat::Text => format_meal_plan(plan),
        OutputFormat::Json => serde_json::to_string_pretty(plan)? + "\n",
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_plan_csv(plan, &mut buf)?;
            String::from_utf8(buf).map_err(|e| NutriError::InvalidInput(e.to_string()))?
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!("Plan written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
