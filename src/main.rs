//! CLI entry point for the httpget tool.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use httpget_core::{Session, Url, config};
use tracing::debug;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs).
    // Usage errors exit 1; --help and --version exit 0.
    let args = Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(i32::from(err.use_stderr()));
    });

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // All progress and diagnostics go to stderr; stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    debug!(?args, "CLI arguments parsed");

    let source_encoding = args
        .input_encoding
        .clone()
        .or_else(config::locale_encoding);
    debug!(?source_encoding, "input encoding resolved");

    let url_bytes = arg_bytes(&args.url);
    let url = Url::parse_bytes(&url_bytes, source_encoding.as_deref())
        .with_context(|| format!("url parse failed: {}", args.url.to_string_lossy()))?;

    let session = Session::new(url, &args.output_dir);
    session.run().await?;

    Ok(())
}

/// The raw bytes of the URL argument. On Unix these are the argv bytes as
/// the shell produced them, which is what charset transcoding needs.
fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(arg.as_bytes())
    }
    #[cfg(not(unix))]
    {
        Cow::Owned(arg.to_string_lossy().into_owned().into_bytes())
    }
}
