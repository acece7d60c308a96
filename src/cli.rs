use crate::MuxConfig;
use clap::Parser;
use std::ffi::OsString;

const EXAMPLES: &str = "\
Examples:
  filemux *.txt
  filemux -c ./docs
  filemux -f largefile.txt dir/";

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true, after_help = EXAMPLES)]
pub struct CliArgs {
    /// Files, glob patterns or directories to compile
    #[arg(required = true, value_name = "FILE-PATTERNS-OR-DIRS")]
    pub files: Vec<String>,

    /// Copy output to clipboard instead of printing
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Force processing of large files
    #[arg(short = 'f', long)]
    pub force: bool,
}

impl From<&CliArgs> for MuxConfig {
    fn from(args: &CliArgs) -> Self {
        MuxConfig {
            clipboard: args.clipboard,
            force: args.force,
            ..MuxConfig::default()
        }
    }
}

/// Accepts the single-dash long form `-clipboard` alongside `--clipboard`.
/// Arguments after `--` are left untouched.
pub fn normalize_flag_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            if arg == "--" {
                after_terminator = true;
                arg
            } else if arg == "-clipboard" {
                OsString::from("--clipboard")
            } else {
                arg
            }
        })
        .collect()
}
