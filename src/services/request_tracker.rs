//! Request Tracker
//!
//! Issues monotonically increasing tokens for rows requests. Only the response that
//! carries the latest issued token is accepted; anything older is stale.

use super::query::RowsRange;

/// Sequence number attached to a rows request
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct RequestToken(pub u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tracks the single outstanding rows request
#[derive(Debug, Default)]
pub struct RequestTracker {
    next: u64,
    pending: Option<(RequestToken, RowsRange)>,
}

impl RequestTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request, superseding any pending one
    pub fn issue(&mut self, range: RowsRange) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        self.pending = Some((token, range));
        token
    }

    /// Accept a response; returns the requested range when the token is current
    pub fn complete(&mut self, token: RequestToken) -> Option<RowsRange> {
        match self.pending {
            Some((current, range)) if current == token => {
                self.pending = None;
                Some(range)
            }
            _ => None,
        }
    }

    /// Forget the pending request so that its response is treated as stale
    pub fn invalidate(&mut self) {
        self.pending = None;
    }

    /// Whether a request is awaiting its response
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Range of the pending request
    pub fn pending_range(&self) -> Option<RowsRange> {
        self.pending.map(|(_, range)| range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue(RowsRange::new(0, 20));
        let second = tracker.issue(RowsRange::new(0, 40));
        assert!(first < second);
        assert_eq!(tracker.complete(first), None);
        assert_eq!(tracker.complete(second), Some(RowsRange::new(0, 40)));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn test_invalidate_makes_pending_stale() {
        let mut tracker = RequestTracker::new();
        let token = tracker.issue(RowsRange::new(0, 20));
        tracker.invalidate();
        assert!(!tracker.is_pending());
        assert_eq!(tracker.complete(token), None);
    }

    #[test]
    fn test_response_applies_once() {
        let mut tracker = RequestTracker::new();
        let token = tracker.issue(RowsRange::new(20, 40));
        assert!(tracker.complete(token).is_some());
        assert!(tracker.complete(token).is_none());
    }
}
