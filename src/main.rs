use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use pager_sim::error::Result;
use pager_sim::input::Workload;
use pager_sim::sim::{render_report, Policy, Sim, SimResult};
use pager_sim::{generate, sweep};

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_OUTPUT: &str = "output.txt";

/// Page replacement simulator: FIFO, Optimal and LRU over one reference string.
#[derive(Parser, Debug)]
#[command(name = "pager-sim", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print every simulation step to stderr
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a workload and write the trace (the default)
    Run(RunArgs),

    /// Fault counts for a range of frame counts, as CSV
    Sweep {
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        #[arg(long, default_value_t = 1)]
        min_frames: usize,

        /// Defaults to the number of distinct pages requested
        #[arg(long)]
        max_frames: Option<usize>,

        /// Defaults to out/<input stem>-sweep.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a random workload
    Generate {
        #[arg(long)]
        pages: u32,

        #[arg(long)]
        frames: usize,

        #[arg(long)]
        requests: usize,

        #[arg(short, long, default_value = DEFAULT_INPUT)]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Policies to run, in report order; all of them if omitted
    #[arg(short, long = "policy", value_enum)]
    policies: Vec<Policy>,
}

impl Default for RunArgs {
    fn default() -> Self {
        return Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            policies: Vec::new(),
        };
    }
}

// all policies when none were named; repeats collapse to the first mention
fn selected_policies(requested: Vec<Policy>) -> Vec<Policy> {
    if requested.is_empty() {
        return Policy::ALL.to_vec();
    }

    let mut policies: Vec<Policy> = Vec::with_capacity(requested.len());
    for policy in requested {
        if !policies.contains(&policy) {
            policies.push(policy);
        }
    }
    return policies;
}

fn run(args: RunArgs, debug: bool) -> Result<()> {
    let workload = Workload::read(&args.input)?;

    let policies = selected_policies(args.policies);

    if debug {
        eprintln!(
            "{} pages, {} frames, {} requests from {}",
            workload.num_pages,
            workload.num_frames,
            workload.requests.len(),
            args.input.display()
        );
    }

    let results: Vec<SimResult> = policies
        .iter()
        .map(|&policy| Sim::new(policy, workload.num_frames, &workload.requests, debug).run())
        .collect();

    // rendered in full before touching the output file
    let report = render_report(&results);
    fs::write(&args.output, report)?;

    println!(
        "total memory frames: {}\nrequests in trace:   {}",
        workload.num_frames,
        workload.requests.len()
    );
    for result in &results {
        println!("{:<8} {} page faults", result.policy.to_string(), result.faults);
    }
    println!("trace written to {}", args.output.display());

    return Ok(());
}

fn default_sweep_output(input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "trace".to_string());

    let out_dir = Path::new("out");
    if !out_dir.exists() {
        fs::create_dir(out_dir)?;
    }
    return Ok(out_dir.join(format!("{}-sweep.csv", stem)));
}

fn run_sweep(
    input: PathBuf,
    min_frames: usize,
    max_frames: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    let workload = Workload::read(&input)?;
    let max_frames = max_frames.unwrap_or_else(|| {
        let mut pages = workload.requests.clone();
        pages.sort_unstable();
        pages.dedup();
        pages.len().max(min_frames)
    });

    println!(
        "sweeping {} to {} frames over {}",
        min_frames,
        max_frames,
        input.display()
    );
    let rows = sweep::sweep(&workload.requests, min_frames, max_frames)?;

    let path = match output {
        Some(path) => path,
        None => default_sweep_output(&input)?,
    };
    let mut file = fs::File::create(&path)?;
    sweep::write_csv(&mut file, &rows)?;

    for frames in sweep::belady_anomalies(&rows) {
        println!(
            "  FIFO faults rise from {} to {} frames (Belady's anomaly)",
            frames - 1,
            frames
        );
    }
    println!("  stored sweep data to {}", path.display());

    return Ok(());
}

fn run_generate(pages: u32, frames: usize, requests: usize, output: PathBuf) -> Result<()> {
    let workload = generate::generate(pages, frames, requests)?;
    fs::write(&output, workload.to_string())?;
    println!(
        "wrote {} requests over {} pages to {}",
        requests,
        pages,
        output.display()
    );
    return Ok(());
}

fn dispatch(cli: Cli) -> Result<()> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(RunArgs::default()));

    return match command {
        Commands::Run(args) => run(args, cli.debug),
        Commands::Sweep {
            input,
            min_frames,
            max_frames,
            output,
        } => run_sweep(input, min_frames, max_frames, output),
        Commands::Generate {
            pages,
            frames,
            requests,
            output,
        } => run_generate(pages, frames, requests, output),
    };
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    return match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    };
}
