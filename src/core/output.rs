//! Messages printed outside the picker.
//!
//! Menus, prompts and command results go through the picker's output stream. What
//! is printed here goes to stderr so it never mixes with that stream.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }
}
