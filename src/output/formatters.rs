//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a weight as a bar relative to the best weight
#[must_use]
pub fn weight_bar(weight: u64, best_weight: u64, width: usize) -> String {
    create_progress_bar(weight as f64, best_weight as f64, width)
}

/// Pluralize a count: `1 guess`, `2 guesses`
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn weight_bar_relative_to_best() {
        assert_eq!(weight_bar(75, 75, 4), "████");
        assert_eq!(weight_bar(0, 75, 4), "░░░░");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "guess", "guesses"), "1 guess");
        assert_eq!(plural(3, "guess", "guesses"), "3 guesses");
    }
}
