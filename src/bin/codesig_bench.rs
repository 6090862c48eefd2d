use clap::{Parser, Subcommand, ValueEnum};
use codesig_bench::footprint::{footprint, MatrixLayout};
use codesig_bench::runner::{BenchmarkRunner, RunResult};
use codesig_bench::schema::{
    FootprintReport, MatrixBytes, ReportMeta, RunRecord, SeriesReport, SweepReport,
};
use codesig_bench::series;
use codesig_bench::sweep::{self, PairedSweep, VaryK, VaryN};
use codesig_bench::timing;
use codesig_bench::Independent;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceArg {
    Generated,
    Stored,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the fixed parameter pairs, once generating matrices and once
    /// reading pre-computed ones.
    Paired,

    /// Sweep g1's length n over an inclusive stepped range, k and d fixed.
    /// g2's length is always g1's plus 10.
    VaryN {
        #[arg(long, default_value_t = 15)]
        k: u32,

        #[arg(long, default_value_t = 6)]
        d: u32,

        #[arg(long, default_value_t = 40)]
        n_start: u32,

        #[arg(long, default_value_t = 100)]
        n_end: u32,

        #[arg(long, default_value_t = 10)]
        n_step: u32,
    },

    /// Sweep the dimension k over an inclusive stepped range, n and d fixed.
    VaryK {
        #[arg(long, default_value_t = 40)]
        n: u32,

        #[arg(long, default_value_t = 6)]
        d: u32,

        #[arg(long, default_value_t = 10)]
        k_start: u32,

        #[arg(long, default_value_t = 20)]
        k_end: u32,

        #[arg(long, default_value_t = 2)]
        k_step: u32,
    },

    /// Model the bytes allocated for the six scheme matrices at the given
    /// code parameters.
    Footprint {
        #[arg(long, default_value_t = 40)]
        n1: u64,

        #[arg(long, default_value_t = 50)]
        n2: u64,

        #[arg(long, default_value_t = 15)]
        k: u64,

        /// Width of a pointer field, in bytes.
        #[arg(long, default_value_t = 8)]
        pointer_width: u64,

        /// Width of a machine word (and of one matrix element), in bytes.
        #[arg(long, default_value_t = 8)]
        word_width: u64,
    },

    /// Scan a timing-log directory and project one function's timings
    /// against an independent variable.
    Analyze {
        /// Directory holding the timing logs.
        #[arg(long, value_name = "DIR")]
        timing_dir: PathBuf,

        /// Function label to project, as written in the log bodies.
        #[arg(long, default_value = "main()")]
        function: String,

        #[arg(long, value_enum, default_value_t = Independent::G1N)]
        independent: Independent,

        /// Which half of the corpus to project.
        #[arg(long, value_enum, default_value_t = SourceArg::Generated)]
        source: SourceArg,
    },
}

#[derive(Parser, Debug)]
#[command(name = "codesig-bench")]
#[command(about = "Parameter-sweep driver and timing analysis for the signature-scheme executable")]
struct Args {
    /// Path to the external signature-scheme executable.
    #[arg(long, default_value = "./main", global = true)]
    executable: PathBuf,

    /// Where to write the JSON report. If omitted, prints to stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

fn meta(executable: Option<&PathBuf>) -> ReportMeta {
    ReportMeta {
        schema_version: 1,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        executable: executable.map(|p| p.display().to_string()),
    }
}

fn run_records(results: Vec<RunResult>, sets: &[codesig_bench::params::ParameterSet]) -> Vec<RunRecord> {
    sets.iter()
        .zip(results)
        .map(|(params, result)| RunRecord {
            params: *params,
            exit_status: result.exit_status,
            stdout_bytes: result.stdout.len() as u64,
            stderr: result.stderr,
        })
        .collect()
}

fn emit<T: serde::Serialize>(out: &Option<PathBuf>, report: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    if let Some(path) = out {
        fs::write(path, json)?;
    } else {
        println!("{json}");
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let runner = BenchmarkRunner::new(&args.executable);

    match &args.cmd {
        Command::Paired => {
            let cfg = PairedSweep::default();
            let sets = cfg.parameter_sets();
            let results = sweep::run_paired(&runner, &cfg).map_err(io::Error::other)?;
            let report = SweepReport {
                meta: meta(Some(&args.executable)),
                sweep: "paired".to_string(),
                runs: run_records(results, &sets),
            };
            emit(&args.out, &report)?;
        }
        Command::VaryN {
            k,
            d,
            n_start,
            n_end,
            n_step,
        } => {
            let cfg = VaryN {
                k: *k,
                d: *d,
                n_start: *n_start,
                n_end: *n_end,
                n_step: *n_step,
            };
            let sets = cfg.parameter_sets();
            let results = sweep::run_vary_n(&runner, &cfg).map_err(io::Error::other)?;
            let report = SweepReport {
                meta: meta(Some(&args.executable)),
                sweep: "vary-n".to_string(),
                runs: run_records(results, &sets),
            };
            emit(&args.out, &report)?;
        }
        Command::VaryK {
            n,
            d,
            k_start,
            k_end,
            k_step,
        } => {
            let cfg = VaryK {
                n: *n,
                d: *d,
                k_start: *k_start,
                k_end: *k_end,
                k_step: *k_step,
            };
            let sets = cfg.parameter_sets();
            let results = sweep::run_vary_k(&runner, &cfg).map_err(io::Error::other)?;
            let report = SweepReport {
                meta: meta(Some(&args.executable)),
                sweep: "vary-k".to_string(),
                runs: run_records(results, &sets),
            };
            emit(&args.out, &report)?;
        }
        Command::Footprint {
            n1,
            n2,
            k,
            pointer_width,
            word_width,
        } => {
            let layout = MatrixLayout {
                pointer_width: *pointer_width,
                word_width: *word_width,
            };
            let fp = footprint(*n1, *n2, *k, layout);
            let report = FootprintReport {
                meta: meta(None),
                n1: *n1,
                n2: *n2,
                k: *k,
                layout,
                base_overhead: layout.base_overhead(),
                matrices: fp
                    .named()
                    .into_iter()
                    .map(|(name, bytes)| MatrixBytes {
                        name: name.to_string(),
                        bytes,
                    })
                    .collect(),
            };
            emit(&args.out, &report)?;
        }
        Command::Analyze {
            timing_dir,
            function,
            independent,
            source,
        } => {
            let corpus = timing::load_corpus(timing_dir)?;
            let entries = match source {
                SourceArg::Generated => &corpus.generated,
                SourceArg::Stored => &corpus.stored,
            };
            eprintln!(
                "Parsed {} generated and {} stored timing logs from {}",
                corpus.generated.len(),
                corpus.stored.len(),
                timing_dir.display()
            );
            let points = series::project(entries, *independent, function);
            let report = SeriesReport {
                meta: meta(None),
                independent: independent.as_str().to_string(),
                function: function.clone(),
                source: match source {
                    SourceArg::Generated => "generated",
                    SourceArg::Stored => "stored",
                }
                .to_string(),
                entries: entries.len(),
                points,
            };
            emit(&args.out, &report)?;
        }
    }

    Ok(())
}
