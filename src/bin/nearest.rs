// Needed to write partial lines to the console
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use nodegen::dataset::read_nodes;
use nodegen::search::ProjectionIndex;
use nodegen::GenError;

/// Search a training set of nodes for the nearest neighbour of every test
/// node, restricted to a hypercube of side 2 * epsilon around each query.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the training set file to search.
    #[arg(short('t'), long, default_value = "dataset.txt")]
    train_file: PathBuf,

    /// Path to the test set file of query nodes.
    #[arg(short('e'), long, default_value = "testset.txt")]
    test_file: PathBuf,

    /// Half side length (epsilon) of the search hypercube around each query.
    #[arg(short('p'), long, default_value = "39.4")]
    epsilon: f64,
}

fn main() -> Result<(), GenError> {
    let args = Args::parse();

    print!("Loading training nodes from {}... ", args.train_file.display());
    let _ = io::stdout().flush();
    let now = Instant::now();
    let train_nodes = read_nodes(&args.train_file)?;
    println!(
        "Loaded {} nodes [{}ms]",
        train_nodes.len(),
        now.elapsed().as_millis()
    );

    print!("Building projection index... ");
    let _ = io::stdout().flush();
    let now = Instant::now();
    let index = ProjectionIndex::new(train_nodes);
    println!("Done [{}ms]", now.elapsed().as_millis());

    print!("Loading test nodes from {}... ", args.test_file.display());
    let _ = io::stdout().flush();
    let now = Instant::now();
    let test_nodes = read_nodes(&args.test_file)?;
    println!(
        "Loaded {} nodes [{}ms]",
        test_nodes.len(),
        now.elapsed().as_millis()
    );

    if let Some(node) = test_nodes.first() {
        if !index.is_empty() && node.len() != index.dimensions() {
            return Err(GenError::DimensionMismatch {
                train: index.dimensions(),
                test: node.len(),
            });
        }
    }

    print!("Searching {} test nodes... ", test_nodes.len());
    let _ = io::stdout().flush();
    let now = Instant::now();
    let mut no_neighbour = 0;
    for query in &test_nodes {
        if index.nearest_within(query, args.epsilon).is_none() {
            no_neighbour += 1;
        }
    }
    println!("Done [{}ms]", now.elapsed().as_millis());

    println!(
        "{} of {} test nodes had no neighbour in the hypercube of side length 2e, e = {}",
        no_neighbour,
        test_nodes.len(),
        args.epsilon
    );

    Ok(())
}
