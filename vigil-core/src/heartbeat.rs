//! Heartbeat ticker
//!
//! Toggles the "alive" LED on a fixed sub-count of main loop ticks,
//! independent of controller state. The Sleep arm point turns the LED
//! off directly before halting; the ticker simply resumes toggling from
//! wherever its counter stands once ticks flow again.

use crate::config::HEARTBEAT_TICKS;
use crate::traits::StatusLed;

/// Heartbeat sub-counter, stepped once per tick.
#[derive(Debug, Clone, Copy)]
pub struct Heartbeat {
    ticks: u16,
}

impl Heartbeat {
    /// Create a heartbeat with a full period ahead of the first toggle.
    pub const fn new() -> Self {
        Self {
            ticks: HEARTBEAT_TICKS,
        }
    }

    /// Count one tick, toggling the LED when the period expires.
    pub fn update(&mut self, led: &mut impl StatusLed) {
        if self.ticks == 0 {
            self.ticks = HEARTBEAT_TICKS;
            led.toggle();
        } else {
            self.ticks -= 1;
        }
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockLed {
        on: bool,
        toggles: u32,
    }

    impl StatusLed for MockLed {
        fn set(&mut self, on: bool) {
            self.on = on;
        }

        fn toggle(&mut self) {
            self.on = !self.on;
            self.toggles += 1;
        }
    }

    #[test]
    fn toggles_every_period() {
        let mut hb = Heartbeat::new();
        let mut led = MockLed::default();

        // Full period counts down before the first toggle
        for _ in 0..HEARTBEAT_TICKS {
            hb.update(&mut led);
        }
        assert_eq!(led.toggles, 0);

        hb.update(&mut led);
        assert_eq!(led.toggles, 1);

        // And again, one full period later
        for _ in 0..HEARTBEAT_TICKS {
            hb.update(&mut led);
        }
        assert_eq!(led.toggles, 1);
        hb.update(&mut led);
        assert_eq!(led.toggles, 2);
    }
}
