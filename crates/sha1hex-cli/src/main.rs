use anyhow::Context;
use clap::Parser;
use sha1hex_batch::{hash_all, hash_all_with_threads, HashedInput};
use sha1hex_core::KNOWN_ANSWERS;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

/// Upper bound for --jobs
const MAX_JOBS: usize = 256;

#[derive(Parser, Debug)]
#[command(
    name = "sha1hex",
    about = "Print the SHA-1 hex digest of each argument",
    after_help = "Everything after the first input is hashed verbatim, including \
                  values starting with '-'. Use `--` to hash a leading one: \
                  sha1hex -- -abc"
)]
struct Args {
    /// Worker threads used when hashing many arguments (default: one per CPU)
    #[arg(short = 'j', long = "jobs")]
    jobs: Option<usize>,

    /// Report built-in self-check results on stderr
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,

    /// Strings to hash; each is hashed as its raw argument bytes
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    inputs: Vec<OsString>,
}

/// Validate the `--jobs` value. `None` means use the global pool.
fn validate_jobs(jobs: Option<usize>) -> Result<Option<usize>, String> {
    match jobs {
        Some(0) => Err("-j/--jobs must be at least 1".to_string()),
        Some(n) if n > MAX_JOBS => Err(format!(
            "-j/--jobs {} exceeds maximum of {}",
            n, MAX_JOBS
        )),
        other => Ok(other),
    }
}

/// Run the known-answer vectors before trusting any output.
fn run_self_check(verbose: bool) -> anyhow::Result<()> {
    sha1hex_digest::self_check().context("built-in self-check failed")?;
    if verbose {
        eprintln!("Self-check: {} known-answer vectors passed", KNOWN_ANSWERS.len());
    }
    Ok(())
}

/// One output line, without the trailing newline.
fn format_line(input: &OsStr, result: &HashedInput) -> String {
    format!("SHA-1 of {}: {}", input.to_string_lossy(), result.hex)
}

fn run<W: Write>(args: &Args, jobs: Option<usize>, out: &mut W) -> anyhow::Result<()> {
    run_self_check(args.verbose)?;

    if args.inputs.is_empty() {
        return Ok(());
    }

    let inputs: Vec<&[u8]> = args.inputs.iter().map(|s| s.as_encoded_bytes()).collect();
    let results = match jobs {
        Some(threads) => hash_all_with_threads(&inputs, threads),
        None => hash_all(&inputs),
    }
    .context("hashing failed")?;

    if args.verbose {
        eprintln!("Hashed {} argument(s)", results.len());
    }

    for (input, result) in args.inputs.iter().zip(&results) {
        writeln!(out, "{}", format_line(input, result)).context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    let jobs = match validate_jobs(args.jobs) {
        Ok(jobs) => jobs,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = run(&args, jobs, &mut out) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
