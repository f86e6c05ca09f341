//! CLI argument definitions using clap derive macros.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Fetch a single HTTP URL and save the response body to a file.
///
/// httpget speaks plain HTTP/1.1: it connects, issues one GET, follows
/// redirects, and retries with Basic credentials when the server asks for
/// them and the URL carries a username.
#[derive(Parser, Debug)]
#[command(name = "httpget")]
#[command(author, version, about)]
pub struct Args {
    /// URL to fetch (http only; scheme may be omitted)
    #[arg(value_name = "URL")]
    pub url: OsString,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory to save the response body into
    #[arg(short = 'O', long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Character encoding of the URL argument (defaults to the locale codeset)
    #[arg(long, value_name = "LABEL")]
    pub input_encoding: Option<String>,
}
