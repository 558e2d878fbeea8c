//! Sliding window of recent accept/reject outcomes.

use std::collections::VecDeque;

/// Fixed-size FIFO of move outcomes with an O(1) acceptance count.
#[derive(Debug, Clone)]
pub struct AcceptanceWindow {
    outcomes: VecDeque<bool>,
    capacity: usize,
    accepted: usize,
}

impl AcceptanceWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            outcomes: VecDeque::with_capacity(capacity),
            capacity,
            accepted: 0,
        }
    }

    /// Records one outcome, evicting the oldest once full.
    pub fn record(&mut self, accepted: bool) {
        if self.outcomes.len() == self.capacity {
            if let Some(true) = self.outcomes.pop_front() {
                self.accepted -= 1;
            }
        }
        self.outcomes.push_back(accepted);
        if accepted {
            self.accepted += 1;
        }
    }

    /// Fraction of accepted outcomes, or `None` if nothing was recorded.
    pub fn acceptance_rate(&self) -> Option<f64> {
        if self.outcomes.is_empty() {
            None
        } else {
            Some(self.accepted as f64 / self.outcomes.len() as f64)
        }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_rate() {
        assert_eq!(AcceptanceWindow::new(4).acceptance_rate(), None);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut window = AcceptanceWindow::new(3);
        window.record(true);
        window.record(true);
        window.record(false);
        assert!((window.acceptance_rate().unwrap() - 2.0 / 3.0).abs() < 1e-12);
        window.record(false);
        assert_eq!(window.len(), 3);
        assert!((window.acceptance_rate().unwrap() - 1.0 / 3.0).abs() < 1e-12);
        window.record(false);
        assert_eq!(window.acceptance_rate(), Some(0.0));
    }
}
