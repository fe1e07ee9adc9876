use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use gqlwire::response::write_response;
use gqlwire::{Context, IoSink, Value, wrap_context_marshaler};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gqlwire-cli",
    about = "Re-encode a JSON document through the gqlwire marshalers",
    version
)]
struct Args {
    /// Wrap the output in a GraphQL response envelope ({"data":...,"errors":[...]})
    #[arg(short, long)]
    response: bool,

    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let json: serde_json::Value = serde_json::from_str(&buf).context("input is not valid JSON")?;
    let value = Value::from(json);
    tracing::debug!(kind = value.kind(), bytes = buf.len(), "input parsed");

    let ctx = Context::new();
    let data = wrap_context_marshaler(&ctx, &value);
    let mut sink = IoSink::new(stdout().lock());
    if args.response {
        write_response(&ctx, &data, &mut sink)?;
    } else {
        gqlwire::Marshaler::marshal(&data, &mut sink);
        for err in ctx.take_errors() {
            tracing::warn!(error = %err, "value replaced with null");
        }
    }
    let mut out = sink.finish()?;
    writeln!(out)?;
    Ok(())
}
