use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bundle_namer::asset_paths::{BundleableAssets, normalise_asset_path};
use bundle_namer::builder::DEFAULT_PREVIEW_LIMIT;
use bundle_namer::config::DEFAULT_CONFIG_FILES;
use bundle_namer::{BundlePlan, BundlePlanner, NamingEngine, ProjectConfig};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bundle-namer")]
#[command(version)]
#[command(
  about = "Assign deterministic bundle names to the assets of a content tree",
  long_about = None
)]
struct Cli {
  /// Configuration file (JSON or YAML); discovered in the project root when omitted
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  /// Project root containing the content tree
  #[arg(short, long, global = true, default_value = ".")]
  root: PathBuf,
  /// Log per-asset naming decisions
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve bundle names for the given asset paths
  Name {
    /// Asset paths, relative to the project root
    #[arg(required = true)]
    paths: Vec<String>,
  },
  /// Show the bundle names of the first assets found in the source folders
  Preview {
    /// Maximum number of assets to list
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
    limit: usize,
  },
  /// Print the full bundle plan
  Plan {
    /// Emit a JSON summary instead of the text report
    #[arg(long)]
    json: bool,
  },
  /// Write the text build report
  Report {
    /// Report destination; defaults to build_report.txt in the output path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Target label recorded in the report
    #[arg(short, long, default_value = "default")]
    target: String,
  },
  /// Write a starter configuration file
  InitConfig {
    /// Destination; defaults to bundle_namer.json in the project root
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
}

/// Project configuration plus whether one was actually found.
struct LoadedConfig {
  project: ProjectConfig,
  configured: bool,
}

impl LoadedConfig {
  fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
    if let Some(path) = explicit {
      let project = ProjectConfig::load_from_path(path)
        .with_context(|| format!("failed to load configuration {}", path.display()))?;
      return Ok(Self {
        project,
        configured: true,
      });
    }

    let discovered = ProjectConfig::discover(root)
      .with_context(|| format!("failed to load configuration from {}", root.display()))?;
    match discovered {
      Some(project) => Ok(Self {
        project,
        configured: true,
      }),
      None => {
        tracing::warn!(
          "no configuration found in {}; naming assets after their folders",
          root.display()
        );
        Ok(Self {
          project: ProjectConfig::default(),
          configured: false,
        })
      }
    }
  }

  fn engine(&self) -> NamingEngine<'_> {
    if self.configured {
      NamingEngine::new(&self.project.naming)
    } else {
      NamingEngine::unconfigured()
    }
  }

  fn plan(&self, root: &Path) -> BundlePlan {
    BundlePlanner::new(root, &self.project)
      .with_engine(self.engine())
      .plan(&BundleableAssets)
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let log_level = if cli.verbose {
    tracing::Level::DEBUG
  } else {
    tracing::Level::INFO
  };
  tracing_subscriber::fmt()
    .with_max_level(log_level)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  let root = cli.root.as_path();
  match cli.command {
    Commands::InitConfig { output } => {
      let path = output.unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILES[0]));
      if path.exists() {
        anyhow::bail!("{} already exists", path.display());
      }
      let json = ProjectConfig::starter().to_json()?;
      fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
      println!("Created {}", path.display());
    }
    Commands::Name { paths } => {
      let loaded = LoadedConfig::load(root, cli.config.as_deref())?;
      let engine = loaded.engine();
      for path in paths {
        let path = normalise_asset_path(&path);
        println!("{path} -> {}", engine.resolve(&path));
      }
    }
    Commands::Preview { limit } => {
      let loaded = LoadedConfig::load(root, cli.config.as_deref())?;
      let plan = loaded.plan(root);
      let preview = plan.preview(limit);
      for assignment in preview.shown {
        println!("{} -> {}", assignment.path, assignment.bundle);
      }
      if preview.remaining > 0 {
        println!(
          "... {} more of {} assets",
          preview.remaining,
          plan.asset_count()
        );
      }
    }
    Commands::Plan { json } => {
      let loaded = LoadedConfig::load(root, cli.config.as_deref())?;
      let plan = loaded.plan(root);
      if json {
        println!("{}", plan.summary_json()?);
      } else {
        print!("{}", plan.render_report("default"));
      }
    }
    Commands::Report { output, target } => {
      let loaded = LoadedConfig::load(root, cli.config.as_deref())?;
      let plan = loaded.plan(root);
      let path = output.unwrap_or_else(|| loaded.project.report_path(root));
      if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      fs::write(&path, plan.render_report(&target))
        .with_context(|| format!("failed to write {}", path.display()))?;
      tracing::info!("build report written to {}", path.display());
    }
  }

  Ok(())
}
