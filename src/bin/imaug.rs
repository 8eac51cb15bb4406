use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "imaug", version, about = "Augment images into a zipped batch of variants")]
struct Cli {
    /// Input images (jpg, jpeg or png), processed in the given order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output archive path.
    #[arg(long, default_value = imaug::ARCHIVE_FILE_NAME)]
    out: PathBuf,

    /// Workspace root for uploads and variants. A temporary directory is used when omitted.
    #[arg(long)]
    workdir: Option<PathBuf>,

    /// Pipeline configuration JSON. Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Log sampled parameters of every step.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    let config = match &cli.config {
        Some(path) => read_config(path)?,
        None => imaug::AugmentConfig::default(),
    };
    let pipeline = imaug::AugmentPipeline::new(config)?;

    let workspace = match &cli.workdir {
        Some(root) => imaug::Workspace::at(root)?,
        None => imaug::Workspace::temporary()?,
    };

    let mut session = imaug::Session::new(&workspace, pipeline)?;
    if let Some(seed) = cli.seed {
        session = session.with_seed(seed);
    }

    for path in &cli.inputs {
        let upload = imaug::Upload::from_path(path)?;
        eprintln!("processing {}", upload.name);
        session
            .process_upload(&upload.name, &upload.bytes)
            .with_context(|| format!("augment '{}'", path.display()))?;
    }

    let batch = session.finish()?;
    batch.write_to(&cli.out)?;

    eprintln!(
        "wrote {} ({} entries)",
        cli.out.display(),
        batch.entries.len()
    );
    Ok(())
}

fn read_config(path: &Path) -> anyhow::Result<imaug::AugmentConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = imaug::AugmentConfig::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}
