//! Compute the LCP array of each file named on the command line.

use std::fs::read;
use std::sync::Arc;

use arrrg::CommandLine;
use indicio::{clue, stdio::StdioEmitter, ALWAYS, INFO};

use lcparray::{check_sentinel, prepare_text, Algorithm, Error, COLLECTOR};

#[derive(Clone, Debug, Eq, PartialEq, arrrg_derive::CommandLine)]
struct Options {
    #[arrrg(optional, "Construction to run:  inverse, phi, or reference.", "ALGORITHM")]
    algorithm: String,
    #[arrrg(optional, "Consider only this many bytes of each file; 0 for the whole file.", "BYTES")]
    prefix_size: u64,
    #[arrrg(flag, "Check the result against every construction.")]
    verify: bool,
    #[arrrg(flag, "Emit clues to stderr.")]
    verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default().to_string(),
            prefix_size: 0,
            verify: false,
            verbose: false,
        }
    }
}

#[derive(Debug)]
enum RunError {
    Io(std::io::Error),
    Lcp(Error),
    Disagree(Algorithm),
}

impl From<std::io::Error> for RunError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<Error> for RunError {
    fn from(err: Error) -> Self {
        Self::Lcp(err)
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Io(err) => write!(fmt, "{err}"),
            RunError::Lcp(err) => write!(fmt, "{err}"),
            RunError::Disagree(algorithm) => write!(fmt, "{algorithm} disagrees"),
        }
    }
}

struct Summary {
    n: usize,
    max_lcp: u32,
    sum_lcp: u64,
}

fn suffix_array(text: &[u8]) -> Result<Vec<u32>, Error> {
    i32::try_from(text.len())?;
    let mut sa = vec![0i32; text.len()];
    divsufsort::sort_in_place(text, &mut sa);
    Ok(sa.into_iter().map(u32::try_from).collect::<Result<Vec<_>, _>>()?)
}

fn run(file: &str, algorithm: Algorithm, prefix_size: Option<usize>, verify: bool) -> Result<Summary, RunError> {
    let text = prepare_text(read(file)?, prefix_size)?;
    if let Err(Error::MissingSentinel { offset }) = check_sentinel(&text) {
        let offset = offset as u64;
        clue!(COLLECTOR, INFO, {
            file: file,
            missing_sentinel: offset,
        });
    }
    let sa = suffix_array(&text)?;
    let lcp = algorithm.compute(&text, &sa)?;
    if verify {
        for other in Algorithm::ALL.iter().filter(|x| **x != algorithm) {
            if other.compute(&text, &sa)? != lcp {
                return Err(RunError::Disagree(*other));
            }
        }
    }
    Ok(Summary {
        n: text.len(),
        max_lcp: lcp.iter().copied().max().unwrap_or_default(),
        sum_lcp: lcp.iter().map(|x| *x as u64).sum(),
    })
}

fn main() {
    let (options, free) = Options::from_command_line("USAGE: lcparray [OPTIONS] <file> ...");
    if free.is_empty() {
        eprintln!("provide at least one file");
        std::process::exit(1);
    }
    if options.verbose {
        COLLECTOR.register(Arc::new(StdioEmitter));
        COLLECTOR.set_verbosity(INFO);
    }
    clue!(COLLECTOR, ALWAYS, {
        new_process: std::env::args().map(String::from).collect::<Vec<_>>(),
    });
    let algorithm: Algorithm = match options.algorithm.parse() {
        Ok(algorithm) => algorithm,
        Err(_) => {
            eprintln!("unknown algorithm {:?}", options.algorithm);
            std::process::exit(1);
        }
    };
    let prefix_size = match options.prefix_size {
        0 => None,
        x => Some(usize::try_from(x).unwrap_or(usize::MAX)),
    };
    for file in free.iter() {
        match run(file, algorithm, prefix_size, options.verify) {
            Ok(summary) => {
                println!(
                    "RESULT file={} algo={} n={} max_lcp={} sum_lcp={}",
                    file, algorithm, summary.n, summary.max_lcp, summary.sum_lcp
                );
            }
            Err(err) => {
                eprintln!("{file}: {err}");
                std::process::exit(1);
            }
        }
    }
}
