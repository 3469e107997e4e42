//! Operator confirmation before large lookup batches

use std::io::{BufRead, Write};
use tracing::debug;

/// Ask a yes/no question and read one line of input
///
/// Only "y" or "yes" (any case, surrounding whitespace ignored) accepts.
/// End of input, read errors and every other answer decline.
pub fn confirm(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    if let Err(e) = write!(output, "{} [y/N]: ", question).and_then(|_| output.flush()) {
        debug!("Failed to show confirmation prompt: {}", e);
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&answer),
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
