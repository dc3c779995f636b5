use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use scm_version::configuration::KEY_VERSION;
use scm_version::{config, logging, ui, VersionPropertyContributor};

#[derive(clap::Parser)]
#[command(
    name = "scm-version",
    about = "Compute a project version from the latest git tag"
)]
struct Args {
    #[arg(
        short = 'C',
        long,
        default_value = ".",
        help = "Directory inside the git repository"
    )]
    directory: PathBuf,

    #[arg(
        short = 'D',
        long = "define",
        value_name = "KEY[=VALUE]",
        help = "Define an option such as scm.next.minor.release (repeatable)"
    )]
    defines: Vec<String>,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print every resulting property as key=value")]
    properties: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(short, long, help = "Only log errors")]
    quiet: bool,

    #[arg(long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("scm-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load settings
    let settings = match config::load_config(args.config.as_deref(), &args.directory) {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&format!("Error loading settings: {}", e));
            std::process::exit(1);
        }
    };

    logging::init_logging(logging::env_filter(
        args.quiet,
        args.verbose,
        &settings.logging,
    ));

    let properties = config::merge_properties(&settings, &args.defines);
    let output = VersionPropertyContributor::git().contribute(&args.directory, &properties);

    let version = match output.get(KEY_VERSION) {
        Some(version) => version,
        None => {
            ui::display_error(&format!(
                "Could not compute {}; rerun with -v for details",
                KEY_VERSION
            ));
            std::process::exit(1);
        }
    };

    if args.properties {
        ui::display_properties(&output);
    } else {
        ui::display_version(version);
    }

    Ok(())
}
