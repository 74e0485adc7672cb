//! CLI argument parsing for tricount

use clap::Parser;
use tricount_core::InputSource;

/// Positional arguments only. Every argument, including ones that look like
/// flags, is taken verbatim: the first is ignored and the second names the
/// input file.
#[derive(Parser, Debug)]
#[command(name = "tricount")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(
    about = "Report the most frequent three-word sequences in a text file",
    override_usage = "tricount [MODE PATH]"
)]
pub struct Cli {
    /// `MODE PATH`; MODE is ignored, further arguments are ignored too
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Resolves where the counting pass reads from.
    pub fn input_source(&self) -> InputSource {
        InputSource::from_args(self.args.iter().cloned())
    }
}
