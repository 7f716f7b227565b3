use std::io::{BufRead, Write};

use crate::error::GenError;

// The three run parameters, read up front so generation never touches stdin
#[derive(Debug)]
pub struct GenParams {
    pub dimensions: usize,
    pub train_count: usize,
    pub test_count: usize,
}

// Prompts for and reads all run parameters, in order.
// Generic over the reader and writer so tests can drive it with in-memory buffers.
pub fn read_params(input: &mut impl BufRead, output: &mut impl Write) -> Result<GenParams, GenError> {
    let dimensions = prompt_count(input, output, "dimension count", "How many dimensions?")?;
    if dimensions == 0 {
        return Err(GenError::TooSmall {
            what: "dimension count",
        });
    }
    let train_count = prompt_count(input, output, "training node count", "How many nodes?")?;
    let test_count = prompt_count(input, output, "test node count", "How many test nodes?")?;

    Ok(GenParams {
        dimensions,
        train_count,
        test_count,
    })
}

// Asks one question and parses the answer as an unsigned integer.
// Parsing as usize means negative input is rejected rather than wrapping.
fn prompt_count(
    input: &mut impl BufRead,
    output: &mut impl Write,
    what: &'static str,
    question: &str,
) -> Result<usize, GenError> {
    write!(output, "{question} ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let text = line.trim();
    text.parse().map_err(|_| GenError::Input {
        what,
        text: text.to_string(),
    })
}
