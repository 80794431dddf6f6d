//! User-facing notices and error display.
//!
//! Informational notices go to stdout, errors to stderr. Notices are not
//! part of the machine-readable output; the ticket list itself is printed
//! by the binary.

use console::style;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print an informational notice in yellow.
pub fn display_important(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the notice listing extracted ticket identifiers.
pub fn display_tickets(tickets: &[String]) {
    display_important(&format!("Additional Issues: {}", tickets.join("\n")));
}

/// Print the notice for an empty or absent log.
pub fn display_no_issues() {
    display_important("No issues found.");
}
