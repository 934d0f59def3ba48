use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Generate a VLC playlist (_video.xspf) for directories of video files",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Mode selector. A single argument containing "s" (any case, e.g. "s",
    /// "-s" or "subfolders") scans each digit-prefixed subdirectory instead
    /// of the current directory. Anything else falls back to the default.
    /// Every argument is plain data; there are no flags.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
