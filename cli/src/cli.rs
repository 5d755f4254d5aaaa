use std::path::PathBuf;

/// Tract-level demographic map dashboard
#[derive(clap::Parser, Debug)]
#[command(name = "tractmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run the pipeline once and write the frame as GeoJSON
    Render(RenderArgs),

    /// Read selection events from stdin, one per line, rerunning after each
    Session(SessionArgs),

    /// List the selectable attributes
    Attributes,

    /// List the metro counties
    Counties,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Dashboard data directory
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub data: PathBuf,

    /// Attribute display name, defaults to the first listed attribute
    #[arg(short, long)]
    pub attribute: Option<String>,

    /// County to select, e.g. Davidson
    #[arg(short, long)]
    pub county: Option<String>,

    /// Output GeoJSON file, defaults to "./frame.geojson"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SessionArgs {
    /// Dashboard data directory
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub data: PathBuf,

    /// Write the latest frame here after every rerun
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
