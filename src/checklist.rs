//! Checklist progress tracking
//!
//! Counts checked boxes on the checklist slide and detects the moment the
//! list becomes complete.

/// Shown once each time the checklist becomes complete
pub const COMPLETED_MESSAGE: &str = "¡Excelente! Checklist completado 🎉";
/// Fill background once complete
pub const COMPLETED_FILL: &str = "linear-gradient(90deg, #28a745, #20c997)";

/// Result of a checkbox change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub percentage: u32,
    /// True only on the change that completed the list
    pub just_completed: bool,
    /// True only on the change that un-completed the list
    pub just_reopened: bool,
}

impl ProgressUpdate {
    /// Width for the progress fill
    pub fn fill_width(&self) -> String {
        format!("{}%", self.percentage)
    }

    /// Label for the progress text
    pub fn label(&self) -> String {
        progress_label(self.percentage)
    }
}

pub fn progress_label(percentage: u32) -> String {
    format!("{}% completado", percentage)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistProgress {
    total: usize,
    checked: usize,
    complete: bool,
}

impl ChecklistProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            checked: 0,
            complete: false,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Percentage rounded to the nearest whole number. 100 is reserved for
    /// a fully checked list so the label never claims completion early.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        if self.checked >= self.total {
            return 100;
        }
        let pct = (self.checked as f64 / self.total as f64 * 100.0).round() as u32;
        pct.min(99)
    }

    /// Record the current number of checked boxes
    pub fn update(&mut self, checked: usize) -> ProgressUpdate {
        self.checked = checked.min(self.total);
        let now_complete = self.total > 0 && self.checked == self.total;
        let was_complete = self.complete;
        self.complete = now_complete;

        ProgressUpdate {
            percentage: self.percentage(),
            just_completed: now_complete && !was_complete,
            just_reopened: was_complete && !now_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_progress() {
        let mut progress = ChecklistProgress::new(6);
        let update = progress.update(2);
        assert_eq!(update.percentage, 33);
        assert_eq!(update.label(), "33% completado");
        assert_eq!(update.fill_width(), "33%");
        assert!(!update.just_completed);
    }

    #[test]
    fn test_rounds_half_up() {
        let mut progress = ChecklistProgress::new(8);
        assert_eq!(progress.update(1).percentage, 13); // 12.5
        assert_eq!(progress.update(5).percentage, 63); // 62.5
    }

    #[test]
    fn test_all_checked_completes_once() {
        let mut progress = ChecklistProgress::new(4);
        for n in 1..4 {
            assert!(!progress.update(n).just_completed);
        }
        let done = progress.update(4);
        assert_eq!(done.label(), "100% completado");
        assert!(done.just_completed);

        // Further change events at 100% do not re-announce
        assert!(!progress.update(4).just_completed);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_reopen_then_complete_again() {
        let mut progress = ChecklistProgress::new(3);
        assert!(progress.update(3).just_completed);

        let reopened = progress.update(2);
        assert!(reopened.just_reopened);
        assert_eq!(reopened.percentage, 67);

        assert!(progress.update(3).just_completed);
    }

    #[test]
    fn test_never_reports_100_before_complete() {
        let mut progress = ChecklistProgress::new(200);
        let update = progress.update(199);
        assert_eq!(update.percentage, 99);
        assert!(!update.just_completed);
    }

    #[test]
    fn test_empty_checklist() {
        let mut progress = ChecklistProgress::new(0);
        let update = progress.update(0);
        assert_eq!(update.percentage, 0);
        assert!(!update.just_completed);
    }
}
