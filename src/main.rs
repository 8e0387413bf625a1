use anyhow::Context;
use clap::{Parser, Subcommand};
use jointkit::{
    extract_edges, import_file, init_logging, process_design, JointFactory, Model,
    SettingsPersistence, BUILD_DATE, VERSION,
};
use jointkit_settings::KerfSettings;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "jointkit")]
#[command(about = "Joint geometry and kerf-compensated toolpaths for laser-cut panels")]
#[command(version)]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add Original, Processed, Visible and Hidden stages to every face
    Process {
        /// Model JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the processed model
        #[arg(short, long)]
        output: PathBuf,

        /// Kerf width of the visible pass
        #[arg(long)]
        slow_kerf: Option<f64>,

        /// Kerf width of the hidden pass (defaults to 1.2x the slow kerf)
        #[arg(long)]
        fast_kerf: Option<f64>,
    },

    /// Build a model from contour text, one path-data string per line
    Import {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the perimeter edges of a model as JSON
    Edges {
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    info!("jointkit {} (built {})", VERSION, BUILD_DATE);

    let mut settings = SettingsPersistence::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Process {
            input,
            output,
            slow_kerf,
            fast_kerf,
        } => {
            let kerf = &mut settings.config_mut().kerf;
            if let Some(slow) = slow_kerf {
                *kerf = KerfSettings::from_kerf(slow);
            }
            if let Some(fast) = fast_kerf {
                kerf.fast_kerf = fast;
            }
            settings.validate().context("Invalid kerf settings")?;

            let model = Model::load_from_file(&input)
                .with_context(|| format!("Failed to read model {}", input.display()))?;
            let processed = process_design(&model, settings.config(), &JointFactory::default())?;
            processed
                .save_to_file(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {}", output.display());
        }
        Commands::Import { input, output } => {
            let model = import_file(&input, settings.config())
                .with_context(|| format!("Failed to import {}", input.display()))?;
            if let Some(unresolved) = &model.unresolved {
                tracing::warn!("{} paths could not be resolved into faces", unresolved.paths.len());
            }
            model
                .save_to_file(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {}", output.display());
        }
        Commands::Edges { input } => {
            let model = Model::load_from_file(&input)
                .with_context(|| format!("Failed to read model {}", input.display()))?;
            println!("{}", serde_json::to_string_pretty(&extract_edges(&model))?);
        }
    }

    Ok(())
}
