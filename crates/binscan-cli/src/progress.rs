//! Progress bar for directory scans.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

/// Progress bar over the archives of a scan.
///
/// Hidden unless stdout is a terminal and output is not quiet or JSON.
/// Cleared on drop.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// Creates a progress bar for `total` archives.
    pub fn new(total: usize, hidden: bool) -> Self {
        let bar = if hidden || !Self::should_show() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };

        // Template: "Inspecting [████████░░░░] 3/5 geth-1.9-linux-amd64.tar.gz"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("Inspecting [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );

        Self { bar }
    }

    /// Checks if we should show progress (TTY detection).
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    /// Marks `file_name` as the archive being inspected.
    pub fn start(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
    }

    /// Marks the current archive as done.
    pub fn finish_one(&self) {
        self.bar.inc(1);
    }

    /// Prints a line above the bar without corrupting it.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Drop for ScanProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
