use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use cfl_edges::generate_commands;
use cfl_edges::plan_execution::{self, RunOverrides};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an edge dump, optionally driven by a plan file
    Run {
        #[clap(short, long)]
        plan: Option<PathBuf>,
        /// Edge dump to read (overrides the plan)
        #[clap(short, long)]
        input: Option<PathBuf>,
        /// CSV file to write (overrides the plan)
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Also write a Cypher bulk-load script here
        #[clap(long)]
        load_script: Option<PathBuf>,
    },
    /// Write a default plan file. The default input and output paths are
    /// written as absolute paths under the current directory, because a plan
    /// resolves relative paths against its own directory
    Init {
        #[clap(short, long)]
        plan: PathBuf,
    },
    Generate {
        #[clap(subcommand)]
        command: GenerateCommands,
    },
}

#[derive(Subcommand, Debug)]
enum GenerateCommands {
    Template { name: String },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        None => {
            let summary = plan_execution::execute_default(&RunOverrides::default())?;
            info!("Done: {}", summary);
        }
        Some(Commands::Run {
            plan,
            input,
            output,
            load_script,
        }) => {
            let overrides = RunOverrides {
                input,
                output,
                load_script,
            };
            let summary = match plan {
                Some(plan) => {
                    info!("Running plan: {}", plan.display());
                    plan_execution::execute_plan(&plan, &overrides)?
                }
                None => plan_execution::execute_default(&overrides)?,
            };
            info!("Done: {}", summary);
        }
        Some(Commands::Init { plan }) => {
            generate_commands::init_plan(&plan)?;
        }
        Some(Commands::Generate { command }) => match command {
            GenerateCommands::Template { name } => {
                println!("{}", generate_commands::generate_template(&name)?);
            }
        },
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_deref()
        .unwrap_or("info")
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
