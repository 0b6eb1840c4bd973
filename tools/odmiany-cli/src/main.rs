use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use odmiany_morph::Conjugator;
use odmiany_protocol::{ParadigmBundle, Target, BUNDLE_VERSION};
use rkyv::ser::{serializers::AllocSerializer, Serializer};

mod check;
mod render;

#[derive(Parser)]
#[command(author, version, about = "Conjugates Polish verbs from the infinitive")]
struct Cli {
    /// Log which layer resolved each request
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Present-tense paradigms
    Present(Request),
    /// Past-tense paradigms
    Past(Request),
    /// Verbal nouns
    Noun(Request),
    /// Measures accuracy against a JSON fixture corpus
    Check {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Mismatches to print per target
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Resolves a newline-separated verb list into an rkyv archive
    Export {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(clap::Args)]
struct Request {
    #[arg(required = true, value_name = "INFINITIVE")]
    infinitives: Vec<String>,

    /// One line per paradigm
    #[arg(short, long)]
    compact: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let conjugator = Conjugator::try_new().map_err(|err| anyhow!("registry is inconsistent: {err}"))?;
    debug!("registry holds {} base verbs", conjugator.registry().len());

    let ok = match cli.command {
        Command::Present(request) => conjugate(&conjugator, Target::Present, &request),
        Command::Past(request) => conjugate(&conjugator, Target::Past, &request),
        Command::Noun(request) => conjugate(&conjugator, Target::VerbalNoun, &request),
        Command::Check { input, limit } => check::run(&conjugator, &input, limit)?,
        Command::Export { input, output } => export(&conjugator, &input, &output)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Prints every requested infinitive; false if any failed to resolve.
fn conjugate(conjugator: &Conjugator, target: Target, request: &Request) -> bool {
    let mut ok = true;

    for infinitive in &request.infinitives {
        let rendered = match target {
            Target::Present => conjugator
                .present(infinitive)
                .map(|paradigms| render::present(&paradigms, request.compact)),
            Target::Past => conjugator
                .past(infinitive)
                .map(|paradigms| render::past(&paradigms, request.compact)),
            Target::VerbalNoun => conjugator
                .verbal_noun(infinitive)
                .map(|nouns| render::nouns(&nouns, request.compact)),
        };

        match rendered {
            Ok(text) => {
                if request.compact {
                    for line in text.lines() {
                        println!("{infinitive}: {line}");
                    }
                } else {
                    println!("{infinitive}\n{text}");
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                ok = false;
            }
        }
    }

    ok
}

fn export(conjugator: &Conjugator, input: &Path, output: &Path) -> anyhow::Result<bool> {
    println!("📖 Reading verbs from {input:?}...");
    let list = fs::read_to_string(input).with_context(|| format!("reading {input:?}"))?;

    let entries: Vec<_> = list
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|infinitive| conjugator.entry(infinitive))
        .collect();

    let unresolved = entries
        .iter()
        .filter(|entry| entry.present.is_empty() && entry.past.is_empty() && entry.nouns.is_empty())
        .count();
    if unresolved > 0 {
        warn!("{unresolved} verbs resolved for no target");
    }

    let bundle = ParadigmBundle { version: BUNDLE_VERSION, entries };
    println!("⚙️  Archiving bundle version {} with {} verbs...", bundle.version, bundle.entries.len());

    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(&bundle)
        .map_err(|err| anyhow!("rkyv serialization failed: {err:?}"))?;
    let bytes = serializer.into_serializer().into_inner();

    rkyv::check_archived_root::<ParadigmBundle>(&bytes)
        .map_err(|err| anyhow!("archive failed validation: {err:?}"))?;
    info!("archive validated ({} bytes)", bytes.len());

    fs::write(output, &bytes).with_context(|| format!("writing {output:?}"))?;

    println!("✅ Success! Archive written to {output:?}");
    Ok(true)
}
