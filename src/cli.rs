use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goat", author, version, about = "Generate source files from Go-style templates", long_about = None)]
pub struct Cli {
    /// Path to input template file. If omitted, reads from stdin.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to output file. If omitted, writes to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON-encoded data for the template
    #[arg(short, long, value_name = "JSON", conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read the template data from a JSON file instead of --data
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Don't add a header to the output
    #[arg(long = "nh", visible_alias = "no-header")]
    pub no_header: bool,

    /// Don't run the formatter on the result
    #[arg(long = "nf", visible_alias = "no-format")]
    pub no_format: bool,

    /// Formatter command; reads source on stdin and prints it on stdout (default: gofmt)
    #[arg(long, value_name = "CMD")]
    pub formatter: Option<String>,

    /// Optional path to a config file (toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Rewrite the output file even if its contents would not change
    #[arg(long)]
    pub force: bool,

    /// Increase diagnostic logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
