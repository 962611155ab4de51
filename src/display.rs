// Console helpers shared by the tour programs.

use std::fmt::Display;

use colored::Colorize;
use itertools::Itertools;

/// Prints a bold `=== title ===` section header.
pub fn banner(title: &str) {
    println!("\n{}\n", format!("=== {} ===", title).bold());
}

/// Joins values with a separator.
pub fn joined<T: Display>(values: impl IntoIterator<Item = T>, separator: &str) -> String {
    values.into_iter().join(separator)
}

/// Prints a labelled sequence on one line.
pub fn show<T: Display>(label: &str, values: impl IntoIterator<Item = T>) {
    println!("{}: {}", label.cyan(), joined(values, " "));
}

/// Prints the numbered takeaways that close every program.
pub fn key_points(points: &[&str]) {
    println!("\n{}", "=== Key Points ===".bold());
    for (i, point) in points.iter().enumerate() {
        println!("{}. {}", i + 1, point);
    }
}
