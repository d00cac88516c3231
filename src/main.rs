use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use gbstrim::Config;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gbstrim")]
#[command(about = "Trim GBS reads of adaptors and reduce over-inflation of allele counts")]
struct Args {
    #[arg(short = 'e', long = "re-site", help = "Restriction site sequence (or enzyme name, e.g. PstI)")]
    re_site: String,

    #[arg(short = 'd', long = "dimer-file", help = "Keep dimers in file")]
    dimer_file: Option<PathBuf>,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose output showing progress")]
    verbose: bool,

    #[arg(help = "Interleaved paired-end FASTQ file (.gz allowed)")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    // 先校验参数，再打开文件
    let config = Config::new(args.input, &args.re_site, args.dimer_file)
        .context("Invalid arguments")?;

    let stdout = io::stdout();
    let out = io::BufWriter::with_capacity(1 << 20, stdout.lock());
    let counters = gbstrim::run(&config, out)
        .with_context(|| format!("Failed to process {}", config.input.display()))?;

    eprintln!("{}", counters);
    Ok(())
}
