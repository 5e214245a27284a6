use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Look up terms on Urban Dictionary and render them as one chat line.
///
/// With a query, answers it and exits; without one, answers each line read
/// from stdin.
#[derive(Parser, Debug)]
#[command(name = "udict", version)]
pub struct Cli {
    /// JSON config profile
    #[arg(long, env = "UDICT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the lookup endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the ceiling and default for --num
    #[arg(long)]
    pub max_definitions: Option<usize>,

    /// Strip colour and formatting codes from replies
    #[arg(long)]
    pub plain: bool,

    /// More logging (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// [--disableexamples | --showvotes | --num # | --showtags] <term>
    #[arg(
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "QUERY"
    )]
    pub query: Vec<String>,
}
