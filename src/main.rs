use std::io::Read;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use simplelog::LevelFilter;

use exhaust_proof::lemma::Lemma;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Lemma to prove (1 or 2). Read from stdin when omitted.
    #[arg(value_name = "INT")]
    lemma: Option<i64>,

    /// Print candidate counters to stderr.
    #[clap(long)]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_lemma_from_stdin() -> color_eyre::Result<i64> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .wrap_err("failed to read lemma number from stdin")?;
    let token = input
        .split_whitespace()
        .next()
        .ok_or_else(|| eyre!("expected a lemma number on stdin"))?;
    token
        .parse()
        .wrap_err_with(|| format!("invalid lemma number {:?}", token))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let index = match args.lemma {
        Some(index) => index,
        None => read_lemma_from_stdin()?,
    };
    let lemma = Lemma::builtin(index)?;

    let proof = lemma.prove_with(|count, _, _| {
        eprintln!("Found abiding matrix #{}", count);
    });
    for eq in &proof.guaranteed {
        println!("Guaranteed edge in formula graph: {}", eq);
    }

    if args.summary {
        eprintln!(
            "{}: {} candidates, {} contradictory, {} excluded, {} abiding, {} guaranteed",
            lemma.name,
            proof.candidates,
            proof.contradictions,
            proof.excluded,
            proof.abiding,
            proof.guaranteed.len()
        );
        eprintln!("Done in {:.3} s", time_total.elapsed().as_secs_f64());
    }

    Ok(())
}
