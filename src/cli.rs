use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "animewizard")]
#[command(author, version, long_about = None)]
#[command(about = "Interactively rename anime folders to Title (Year) form using AniList search")]
pub struct Args {
    /// Directory containing the anime folders to rename
    pub target_dir: PathBuf,

    /// Search with the full folder name instead of stripping () and [] spans
    #[arg(short = 'k', long)]
    pub keep_brackets: bool,

    /// Walk and confirm as usual but never touch the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
