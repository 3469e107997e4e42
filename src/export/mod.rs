//! Output of the normalized word list and the run summary

mod summary;

use crate::error::{DictfillError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub use summary::log_summary;

/// Get a writer for the output (file or stdout)
pub fn get_output_writer(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(path).map_err(DictfillError::Io)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Write one word per line
pub fn write_word_list(words: &[String], writer: &mut dyn Write) -> Result<()> {
    for word in words {
        writeln!(writer, "{}", word)?;
    }
    writer.flush()?;
    Ok(())
}
