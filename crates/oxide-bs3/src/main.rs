//! oxide-bs3 CLI
//!
//! Installs the Bootstrap 3 asset bundle into a static directory and prints
//! the markup emitted by the `include_bs3` template directive.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_app::App;
use oxide_bs3::{Bs3, Bs3Config};

/// Bootstrap 3 assets and template tags.
#[derive(Parser)]
#[command(name = "oxide-bs3")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the asset bundle into the static directory.
    Install {
        /// Static files directory of the application.
        #[arg(short, long, default_value = "static")]
        static_path: PathBuf,

        /// Directory holding the asset files (bundled copy if not specified).
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },

    /// Print the tags emitted by `{{ include_bs3 }}`.
    Tags,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Bs3Config> {
    match path {
        Some(path) => Bs3Config::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(Bs3Config::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Install {
            static_path,
            assets,
        } => {
            let mut bs3 = Bs3::new(config);
            if let Some(assets) = assets {
                bs3 = bs3.assets_source(assets);
            }

            let mut app = App::new("oxide-bs3", ".").with_static_path(static_path);
            let bs3 = app.use_extension(bs3)?;

            if let Some(report) = bs3.install_report() {
                for asset in &report.copied {
                    println!("copied  {asset}");
                }
                for asset in &report.skipped {
                    println!("present {asset}");
                }
                info!(
                    folder = %report.folder.display(),
                    copied = report.copied.len(),
                    "Installation complete."
                );
            }
        }

        Commands::Tags => {
            let tag = oxide_bs3::Bs3Tag::new(std::sync::Arc::new(config));
            for node in tag.nodes() {
                println!("{}", node.render());
            }
        }
    }

    Ok(())
}
