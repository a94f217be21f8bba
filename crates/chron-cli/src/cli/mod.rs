use clap::{Parser, ValueEnum};

use chron_changelog::RangeRequest;
use chron_core::Mode;

/// Top-level CLI parser for the `chronicle` binary.
#[derive(Debug, Parser)]
#[command(
    name = "chronicle",
    version,
    about = "Generate a markdown changelog for a GitHub release"
)]
pub struct Cli {
    /// End commit hash
    #[arg(short, long, conflicts_with = "tag", required_unless_present = "tag")]
    pub end: Option<String>,

    /// End tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Which tags count as releases when deriving the start
    #[arg(short, long, value_enum, default_value_t = ModeArg::Final)]
    pub mode: ModeArg,

    /// GitHub access token (defaults to config github.token)
    #[arg(short, long)]
    pub pat: Option<String>,

    /// Repository as org/name (defaults to config general.repo)
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Start commit hash
    #[arg(short, long, conflicts_with = "start_tag")]
    pub start: Option<String>,

    /// Start tag
    #[arg(long)]
    pub start_tag: Option<String>,

    /// Previous release branch, for a start across a major version
    #[arg(long)]
    pub previous_branch: Option<String>,

    /// Output path (defaults to config general.output)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    Final,
    Beta,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Final => Self::Final,
            ModeArg::Beta => Self::Beta,
        }
    }
}

impl Cli {
    /// Reference flags, for validation by the pipeline.
    #[must_use]
    pub fn range_request(&self) -> RangeRequest {
        RangeRequest {
            mode: self.mode.into(),
            end: self.end.clone(),
            tag: self.tag.clone(),
            start: self.start.clone(),
            start_tag: self.start_tag.clone(),
            previous_branch: self.previous_branch.clone(),
        }
    }
}
