//! Initial population file reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::warn;

use crate::error::{Result, TspError};
use crate::ga::Tour;

/// Reads initial tours of `size` cities from a file.
///
/// # Errors
/// - [`TspError::FileNotFound`] if the file cannot be opened.
/// - [`TspError::EmptyPopulation`] if no complete row is read.
pub fn read_initial_population(path: impl AsRef<Path>, size: usize) -> Result<Vec<Tour>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| TspError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    parse_initial_population(&text, size)
}

/// Parses whitespace-separated values into rows of `size` city indices.
///
/// Values are read as floating-point numbers and must be non-negative
/// integers (`3` and `3.0` are both city 3). Reading stops at the first
/// value that is not; a trailing incomplete row is dropped.
///
/// # Errors
/// [`TspError::EmptyPopulation`] if no complete row is read.
pub fn parse_initial_population(text: &str, size: usize) -> Result<Vec<Tour>> {
    if size == 0 {
        return Err(TspError::EmptyPopulation);
    }

    let mut rows = Vec::new();
    let mut row = Vec::with_capacity(size);
    for token in text.split_whitespace() {
        let Some(city) = parse_city(token) else {
            warn!("stopped reading initial population at {token:?}");
            break;
        };
        row.push(city);
        if row.len() == size {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(size)));
        }
    }
    if !row.is_empty() {
        warn!(
            "dropped incomplete initial tour with {} of {size} cities",
            row.len()
        );
    }

    if rows.is_empty() {
        return Err(TspError::EmptyPopulation);
    }
    Ok(rows)
}

fn parse_city(token: &str) -> Option<usize> {
    let value: f64 = token.parse().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as usize)
}
