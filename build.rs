//! Build script to generate embedded level word pools
//!
//! Reads `data/levels/<key>.tsv` files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (file key, const name, description)
const LEVELS: &[(&str, &str, &str)] = &[
    ("jhs1", "JHS1", "JHS Year 1"),
    ("jhs2", "JHS2", "JHS Year 2"),
    ("jhs3", "JHS3", "JHS Year 3"),
    ("eiken5", "EIKEN5", "Eiken 5"),
    ("eiken4", "EIKEN4", "Eiken 4"),
    ("eiken3", "EIKEN3", "Eiken 3"),
    ("eiken-pre2", "EIKEN_PRE2", "Eiken Pre-2"),
    ("eiken2", "EIKEN2", "Eiken 2"),
    ("eiken-pre1", "EIKEN_PRE1", "Eiken Pre-1"),
    ("eiken1", "EIKEN1", "Eiken 1"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("levels.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated level word pools").unwrap();
    writeln!(output).unwrap();

    for &(key, const_name, description) in LEVELS {
        let input_path = format!("data/levels/{key}.tsv");
        generate_level(&mut output, &input_path, const_name, description);

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_level(output: &mut fs::File, input_path: &str, const_name: &str, description: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (word, definition) = line
                .split_once('\t')
                .unwrap_or_else(|| panic!("Missing tab separator in {input_path}: {line}"));
            (word.trim(), definition.trim())
        })
        .collect();

    writeln!(output, "/// {description} word pool ({} words)", entries.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, definition) in entries {
        // Debug formatting yields an escaped string literal
        writeln!(output, "    ({word:?}, {definition:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
