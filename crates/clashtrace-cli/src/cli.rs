use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Charles Mason",
    version,
    about = "clashtrace - Follow discovered residue collisions across a sampled MD trajectory and report the frame at which each collision's existence state changed.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Folder containing one PDB snapshot per frame, named <frameID>.pdb.
    #[arg(short, long, value_name = "DIR", default_value = "trajectory")]
    pub frames: PathBuf,

    /// Two-column frame/RMSD index file.
    #[arg(short, long, value_name = "PATH", default_value = "distances")]
    pub dist: PathBuf,

    /// List of collisions from the clash detection step.
    #[arg(short, long, value_name = "PATH", default_value = "check")]
    pub collisions: PathBuf,

    /// Start of the RMSD range to follow.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.0)]
    pub min: f64,

    /// End of the RMSD range to follow (unbounded when omitted).
    #[arg(long, value_name = "FLOAT")]
    pub max: Option<f64>,

    /// Follow the collisions over the whole trajectory instead of the RMSD range.
    #[arg(long)]
    pub check_all: bool,

    /// Only keep every n-th selected frame.
    #[arg(long, value_name = "INT", default_value_t = 1)]
    pub freq: usize,

    /// Collision threshold in Angstroms.
    #[arg(short = 't', long, value_name = "FLOAT", default_value_t = 4.0)]
    pub thres: f64,

    /// Separate collisions that never exceed this distance into their own plots.
    #[arg(long, value_name = "FLOAT", default_value_t = 10.0)]
    pub minthres: f64,

    /// Output file prefix for gnuplot data and scripts. No plots when omitted.
    #[arg(long, value_name = "PREFIX")]
    pub plotfile: Option<PathBuf>,

    /// Maximum number of collisions per plot.
    #[arg(long, value_name = "INT", default_value_t = 8)]
    pub max_plot: usize,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of worker threads.
    /// Defaults to half of the available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}
