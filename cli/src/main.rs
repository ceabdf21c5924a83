use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mixedcase::{exported, unexported};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "convert identifiers to MixedCase and mixedCase")]
struct Args {
    /// identifiers to convert. read one per line from stdin when omitted
    names: Vec<String>,

    #[arg(short, long, value_enum, env("MIXEDCASE_VISIBILITY"), default_value_t = Form::Both)]
    visibility: Form,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Exported,
    Unexported,
    /// input, exported and unexported, tab separated
    Both,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env(/* RUST_LOG env var sets logging level */))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();
    run(&args, io::stdin().lock(), &mut stdout)?;
    stdout.flush().context("flushing stdout")?;

    Ok(())
}

fn run(args: &Args, input: impl BufRead, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut count = 0;

    match args.names.is_empty() {
        true => {
            for line in input.lines() {
                let line = line.context("reading stdin")?;
                let name = line.trim();
                if name.is_empty() {
                    continue;
                }
                write_name(name, args.visibility, out)?;
                count += 1;
            }
        }
        false => {
            for name in &args.names {
                write_name(name, args.visibility, out)?;
                count += 1;
            }
        }
    }

    tracing::info!(count, visibility = ?args.visibility, "converted identifiers");
    Ok(())
}

fn write_name(name: &str, form: Form, out: &mut dyn Write) -> anyhow::Result<()> {
    let exported_name = exported(name);
    if exported_name.is_empty() {
        tracing::warn!(name, "no identifier left after conversion");
    }

    let converted = match form {
        Form::Exported => exported_name,
        Form::Unexported => unexported(name),
        Form::Both => format!("{}\t{}\t{}", name, exported_name, unexported(name)),
    };
    tracing::debug!(name, %converted);

    writeln!(out, "{}", converted).context("writing to stdout")
}
