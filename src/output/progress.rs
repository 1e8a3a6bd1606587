//! Progress bar utilities for batch analysis.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar over the input files, or `None` when disabled.
///
/// A single file gets no bar; its log lines already tell the story.
pub fn create_file_progress(total_files: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_files < 2 {
        return None;
    }

    let pb = ProgressBar::new(total_files as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} recordings ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

/// Increment a progress bar.
pub fn inc_progress(pb: Option<&ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_progress_is_none() {
        assert!(create_file_progress(10, false).is_none());
        assert!(create_file_progress(1, true).is_none());
    }

    #[test]
    fn test_enabled_progress_counts() {
        let pb = create_file_progress(3, true);
        inc_progress(pb.as_ref());
        assert_eq!(pb.as_ref().map(ProgressBar::position), Some(1));
        finish_progress(pb, "done");
    }
}
