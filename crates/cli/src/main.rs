use app_utils::DEFAULT_POLICY_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "nodl-to-policy")]
#[command(version, about = "Convert NoDL node descriptions into SROS 2 access-control policies", long_about = None)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert NoDL files into a policy, merging into an existing one
    Convert {
        /// NoDL files to convert, in order
        #[arg(short, long = "input", value_name = "NODL_FILE", num_args = 1.., required = true)]
        inputs: Vec<PathBuf>,

        /// Policy file to create or update
        #[arg(short, long, value_name = "POLICY_FILE", default_value = DEFAULT_POLICY_PATH)]
        output: PathBuf,

        /// Also print the resulting policy to stdout
        #[arg(short, long)]
        print: bool,
    },
    /// Summarize a policy file
    Check {
        /// Path to the policy XML file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            inputs,
            output,
            print,
        } => {
            commands::convert::run(&inputs, &output, print)?;
        }
        Commands::Check { file } => {
            commands::policy::check(&file)?;
        }
    }

    Ok(())
}
