use console::style;
use std::collections::HashMap;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_version(version: &str) {
    println!("{}", version);
}

/// Lines of `key=value`, sorted by key.
pub fn format_properties(properties: &HashMap<String, String>) -> Vec<String> {
    let mut lines: Vec<String> = properties
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    lines.sort();
    lines
}

pub fn display_properties(properties: &HashMap<String, String>) {
    for line in format_properties(properties) {
        println!("{}", line);
    }
}
