// End-to-end checks on generated dataset files: write with the library,
// read back as plain text, and verify the shape invariants.

use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use nodegen::config::read_params;
use nodegen::dataset::write_nodes;
use nodegen::generate::{random_nodes, MAX_VALUE, MIN_VALUE};

#[test]
fn test_round_trip_preserves_shape_and_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.txt");

    let mut rng = SmallRng::seed_from_u64(0);
    write_nodes(&path, random_nodes(3, 2, MIN_VALUE, MAX_VALUE, &mut rng)).unwrap();

    // Read back the same way the downstream tools do: whitespace-split lines
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(&path)
        .unwrap();
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(records.len(), 3);
    for record in &records {
        assert_eq!(record.len(), 2);
        for field in record {
            let value: f64 = field.parse().unwrap();
            assert!((MIN_VALUE..MAX_VALUE).contains(&value));
        }
    }
}

#[test]
fn test_lines_are_space_separated_and_newline_terminated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.txt");

    let mut rng = SmallRng::seed_from_u64(0);
    write_nodes(&path, random_nodes(4, 3, MIN_VALUE, MAX_VALUE, &mut rng)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with('\n'));
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        assert_eq!(line.split(' ').count(), 3);
        for token in line.split(' ') {
            token.parse::<f64>().unwrap();
        }
    }
}

#[test]
fn test_zero_count_writes_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.txt");

    let mut rng = SmallRng::seed_from_u64(0);
    write_nodes(&path, random_nodes(0, 1, MIN_VALUE, MAX_VALUE, &mut rng)).unwrap();

    assert!(path.exists());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_existing_file_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.txt");
    std::fs::write(&path, "stale contents\nfrom an earlier run\n").unwrap();

    let mut rng = SmallRng::seed_from_u64(0);
    write_nodes(&path, random_nodes(1, 2, MIN_VALUE, MAX_VALUE, &mut rng)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(!contents.contains("stale"));
}

#[test]
fn test_successive_runs_produce_different_values() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.txt");
    let second_path = dir.path().join("second.txt");

    let mut rng = SmallRng::from_entropy();
    write_nodes(
        &first_path,
        random_nodes(5, 4, MIN_VALUE, MAX_VALUE, &mut rng),
    )
    .unwrap();
    write_nodes(
        &second_path,
        random_nodes(5, 4, MIN_VALUE, MAX_VALUE, &mut rng),
    )
    .unwrap();

    let first = std::fs::read_to_string(&first_path).unwrap();
    let second = std::fs::read_to_string(&second_path).unwrap();
    assert_eq!(first.lines().count(), second.lines().count());
    assert_ne!(first, second);
}

#[test]
fn test_bad_input_fails_before_any_file_is_written() {
    let dir = tempfile::tempdir().unwrap();

    // Parameter reading happens before generation, so a bad dimension count
    // must leave the output directory untouched
    let mut input = Cursor::new("not-a-number\n3\n4\n");
    assert!(read_params(&mut input, &mut Vec::new()).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
