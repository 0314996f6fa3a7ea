//! Timing constants
//!
//! The main loop runs on a fixed 10 ms tick and every duration in the
//! controller is expressed as a tick count. The microsecond values are
//! the source of truth; the counts are derived so the arithmetic stays
//! visible. There is no runtime configuration surface.

/// Main loop tick period in microseconds.
pub const TICK_PERIOD_US: u32 = 10_000;

const USEC_PER_SEC: u32 = 1_000_000;

/// Ticks per wall-clock second.
pub const TICKS_PER_SECOND: u16 = (USEC_PER_SEC / TICK_PERIOD_US) as u16;

/// Ceiling on a single alert episode (10 s).
pub const ALERT_TICKS: u16 = (10 * USEC_PER_SEC / TICK_PERIOD_US) as u16;

/// Heartbeat LED toggle period (200 ms).
pub const HEARTBEAT_TICKS: u16 = (200_000 / TICK_PERIOD_US) as u16;

/// Alert tone on-phase at the most lenient profile (250 ms).
pub const TONE_ON_TICKS: u16 = (250_000 / TICK_PERIOD_US) as u16;

/// Alert tone off-phase at the most lenient profile (750 ms).
pub const TONE_OFF_TICKS: u16 = (750_000 / TICK_PERIOD_US) as u16;

/// One segment of the power-on announcement (125 ms).
pub const ANNOUNCE_BEEP_TICKS: u16 = (125_000 / TICK_PERIOD_US) as u16;

/// Settle grace before arming the low-power watch (500 ms).
pub const SLEEP_SETTLE_TICKS: u16 = (500_000 / TICK_PERIOD_US) as u16;

/// Number of beeps in the power-on announcement.
pub const NUM_ANNOUNCE_BEEPS: u8 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_derivations() {
        assert_eq!(TICKS_PER_SECOND, 100);
        assert_eq!(ALERT_TICKS, 1000);
        assert_eq!(HEARTBEAT_TICKS, 20);
        assert_eq!(TONE_ON_TICKS, 25);
        assert_eq!(TONE_OFF_TICKS, 75);
        assert_eq!(ANNOUNCE_BEEP_TICKS, 12);
        assert_eq!(SLEEP_SETTLE_TICKS, 50);
    }
}
