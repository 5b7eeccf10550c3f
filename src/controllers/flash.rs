// Short-lived UI indicators ("Copied", "Saved") that clear themselves after a timeout

use std::time::{Duration, Instant};

pub const COPIED_TIMEOUT: Duration = Duration::from_millis(2000);
pub const SAVED_TIMEOUT: Duration = Duration::from_millis(3000);

/// One active indicator keyed by `K`; a new trigger replaces the previous one
#[derive(Debug, Clone)]
pub struct Flash<K> {
    active: Option<(K, Instant)>,
    timeout: Duration,
}

impl<K: PartialEq> Flash<K> {
    pub fn new(timeout: Duration) -> Self {
        Self {
            active: None,
            timeout,
        }
    }

    pub fn trigger(&mut self, key: K, now: Instant) {
        self.active = Some((key, now));
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self, key: &K) -> bool {
        matches!(&self.active, Some((k, _)) if k == key)
    }

    /// True while a tick subscription is needed
    pub fn is_pending(&self) -> bool {
        self.active.is_some()
    }

    // Returns true when the indicator was cleared by this call
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.active {
            Some((_, since)) if now.saturating_duration_since(*since) >= self.timeout => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clears_only_after_timeout() {
        let start = Instant::now();
        let mut flash = Flash::new(COPIED_TIMEOUT);
        flash.trigger("a", start);
        assert!(flash.is_active(&"a"));
        assert!(!flash.is_active(&"b"));

        assert!(!flash.expire(start + Duration::from_millis(1999)));
        assert!(flash.is_pending());
        assert!(flash.expire(start + COPIED_TIMEOUT));
        assert!(!flash.is_active(&"a"));
        assert!(!flash.is_pending());
    }

    #[test]
    fn retrigger_replaces_key_and_restarts_timer() {
        let start = Instant::now();
        let mut flash = Flash::new(SAVED_TIMEOUT);
        flash.trigger(1, start);
        flash.trigger(2, start + Duration::from_secs(2));
        assert!(!flash.is_active(&1));
        assert!(!flash.expire(start + Duration::from_secs(4)));
        assert!(flash.expire(start + Duration::from_secs(5)));
    }
}
