//! Controller states and per-state working data

/// Controller states
///
/// `Sleep` is discriminant 0 so the state LEDs are dark while the
/// device is asleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Armed low-power watch; the processor halts here awaiting motion.
    Sleep = 0,
    /// Power-on announcement (three beeps), then quiet.
    Init = 1,
    /// Escalating audible alert, bounded by the alert ceiling.
    Alert = 2,
}

impl State {
    /// 2-bit encoding published on the state output pins.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Per-state working data
///
/// Exactly one variant is live at a time; the variant is replaced on
/// every state entry, so stale counters from a previous sojourn can
/// never leak into a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateData {
    /// Announcement progress.
    Init {
        /// Beeps still to sound.
        beeps_left: u8,
        /// Ticks left in the current tone segment.
        tone_ticks: u16,
    },
    /// Settle countdown before arming the watch.
    Sleep {
        /// Ticks left in the settle grace period.
        settle_ticks: u16,
    },
    /// Alert episode progress.
    Alert {
        /// Ticks left before the episode times out.
        alert_ticks: u16,
        /// Ticks left in the current tone segment.
        tone_ticks: u16,
        /// Current alert profile index; non-decreasing per episode.
        profile: usize,
    },
}
