//! Loader for process files.
//!
//! One process per line: `burst arrival priority`, whitespace separated.
//! Blank lines and lines starting with `#` are skipped.

use crate::scheduler::{InvalidInput, ProcessSet, ProcessSpec, Ticks};
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read process file: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}

pub fn load_process_file(path: &Path) -> Result<ProcessSet, LoadError> {
    let contents = fs::read_to_string(path)?;
    let specs = parse_processes(&contents)?;
    log::info!("Loaded {} processes from {}", specs.len(), path.display());
    Ok(ProcessSet::new(specs)?)
}

pub fn parse_processes(contents: &str) -> Result<Vec<ProcessSpec>, LoadError> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| parse_line(text).map_err(|reason| LoadError::Parse { line, reason }))
        .collect()
}

fn parse_line(text: &str) -> Result<ProcessSpec, String> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(format!(
            "expected `burst arrival priority`, found {} fields",
            fields.len()
        ));
    }

    let burst_time: Ticks = parse_field("burst time", fields[0])?;
    let arrival_time: Ticks = parse_field("arrival time", fields[1])?;
    let priority: i32 = parse_field("priority", fields[2])?;

    Ok(ProcessSpec::new(burst_time, arrival_time, priority))
}

fn parse_field<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {}: {:?}", name, value))
}

/// Process set used when no file is given.
pub fn demo_processes() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new(5, 0, 3),
        ProcessSpec::new(3, 1, 1),
        ProcessSpec::new(8, 2, 4),
        ProcessSpec::new(2, 3, 2),
    ]
}
