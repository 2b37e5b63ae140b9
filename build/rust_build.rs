/**
 * Generates the territory metadata bindings and checks the prefix tables
 * embedded into the crate.
 */

use std::{collections::BTreeMap, fs::File, io::{BufRead, BufReader}};

use thiserror::Error;

const PREFIX_TABLES: [&str; 3] = [
    "resources/extended/geocoding.txt",
    "resources/extended/timezones.txt",
    "resources/extended/carriers.txt",
];

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("{path}:{line_num}: line is too long (max is {max_len} bytes)")]
    LineTooLong { path: String, line_num: usize, max_len: usize },

    #[error("{path}:{line_num}: prefix '{prefix}' must contain only ascii digits")]
    InvalidPrefix { path: String, line_num: usize, prefix: String },

    #[error("{path}:{line_num}: prefix '{prefix}' is declared twice")]
    DuplicatePrefix { path: String, line_num: usize, prefix: String },
}

fn check_prefixes(path: &str) -> Result<usize, BuildError> {
    let mut prefixes = BTreeMap::<String, String>::new();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if line_buffer.len() > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                path: path.to_string(),
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((prefix, desc)) = line.split_once('|') {
            if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(BuildError::InvalidPrefix {
                    path: path.to_string(),
                    line_num: line_number,
                    prefix: prefix.to_string(),
                });
            }
            if prefixes.insert(prefix.to_string(), desc.to_string()).is_some() {
                return Err(BuildError::DuplicatePrefix {
                    path: path.to_string(),
                    line_num: line_number,
                    prefix: prefix.to_string(),
                });
            }
        }
    }

    Ok(prefixes.len())
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=resources");
    for table in PREFIX_TABLES {
        check_prefixes(table)?;
    }

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input("resources/territory_metadata.proto")
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
