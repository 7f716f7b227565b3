// For sampling node values
use rand::{rngs::SmallRng, SeedableRng};

// Needed to write partial lines to the console
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use nodegen::config::read_params;
use nodegen::dataset::write_nodes;
use nodegen::generate::{random_nodes, MAX_VALUE, MIN_VALUE};
use nodegen::GenError;

/// Generate a training set and a test set of uniformly random nodes,
/// one space-separated node per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the training set output file.
    #[arg(short('t'), long, default_value = "dataset.txt")]
    train_file: PathBuf,

    /// Path to the test set output file.
    #[arg(short('e'), long, default_value = "testset.txt")]
    test_file: PathBuf,
}

fn main() -> Result<(), GenError> {
    let args = Args::parse();

    // All three parameters are read before either file is opened
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let params = read_params(&mut input, &mut io::stdout())?;

    // Fresh entropy on every run; there is no seeding control
    let mut rng = SmallRng::from_entropy();

    print!(
        "Writing {} nodes to {}... ",
        params.train_count,
        args.train_file.display()
    );
    let _ = io::stdout().flush();
    let now = Instant::now();
    write_nodes(
        &args.train_file,
        random_nodes(
            params.train_count,
            params.dimensions,
            MIN_VALUE,
            MAX_VALUE,
            &mut rng,
        ),
    )?;
    println!("Done [{}ms]", now.elapsed().as_millis());

    print!(
        "Writing {} test nodes to {}... ",
        params.test_count,
        args.test_file.display()
    );
    let _ = io::stdout().flush();
    let now = Instant::now();
    write_nodes(
        &args.test_file,
        random_nodes(
            params.test_count,
            params.dimensions,
            MIN_VALUE,
            MAX_VALUE,
            &mut rng,
        ),
    )?;
    println!("Done [{}ms]", now.elapsed().as_millis());

    Ok(())
}
