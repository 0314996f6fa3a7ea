//! Alert profile table and escalation policy
//!
//! The alert cadence is chosen from a ranked table as the remaining
//! alert time shrinks: intermittent beeping gets progressively more
//! urgent the less time remains before the forced timeout. The table is
//! ordered most-lenient first; the final entry has a zero off-duration,
//! which the controller treats as "leave the tone on".

use crate::config::{TICKS_PER_SECOND, TONE_OFF_TICKS, TONE_ON_TICKS};

/// One cadence entry of the alert profile table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertProfile {
    /// Remaining-seconds threshold at or below which the *next* entry
    /// takes over.
    pub range_s: u16,
    /// Tone on-phase duration in ticks.
    pub on_ticks: u16,
    /// Tone off-phase duration in ticks; zero means continuous tone.
    pub off_ticks: u16,
}

/// The alert profile table, most lenient first.
pub const ALERT_PROFILES: [AlertProfile; 3] = [
    AlertProfile {
        range_s: 3,
        on_ticks: TONE_ON_TICKS,
        off_ticks: TONE_OFF_TICKS,
    },
    AlertProfile {
        range_s: 1,
        on_ticks: TONE_ON_TICKS,
        off_ticks: TONE_OFF_TICKS / 3,
    },
    AlertProfile {
        range_s: 0,
        on_ticks: TONE_ON_TICKS * 4,
        off_ticks: 0,
    },
];

/// Whole seconds remaining in the alert episode, rounded up.
///
/// Never returns zero, so the final range-0 entry can never be
/// escalated past.
pub fn seconds_remaining(alert_ticks: u16) -> u16 {
    alert_ticks / TICKS_PER_SECOND + 1
}

/// Advance the profile index by at most one step.
///
/// The index moves forward when the remaining time has dropped to the
/// current entry's range threshold. It never regresses, never skips an
/// entry, and never passes the end of the table.
pub fn escalate(index: usize, seconds_remaining: u16) -> usize {
    if index + 1 < ALERT_PROFILES.len() && seconds_remaining <= ALERT_PROFILES[index].range_s {
        index + 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_is_ranked_most_lenient_first() {
        for pair in ALERT_PROFILES.windows(2) {
            assert!(pair[0].range_s > pair[1].range_s);
            // Cadence only ever tightens: quiet gaps shrink
            assert!(pair[0].off_ticks > pair[1].off_ticks);
        }
        // Final entry is the continuous tone
        let last = ALERT_PROFILES[ALERT_PROFILES.len() - 1];
        assert_eq!(last.range_s, 0);
        assert_eq!(last.off_ticks, 0);
    }

    #[test]
    fn escalates_at_three_and_one_seconds() {
        // Plenty of time left: stay on the first profile
        assert_eq!(escalate(0, 10), 0);
        assert_eq!(escalate(0, 4), 0);

        // Crossing 3 s remaining tightens the cadence
        assert_eq!(escalate(0, 3), 1);
        assert_eq!(escalate(1, 3), 1);
        assert_eq!(escalate(1, 2), 1);

        // Crossing 1 s remaining goes continuous
        assert_eq!(escalate(1, 1), 2);
        assert_eq!(escalate(2, 1), 2);
    }

    #[test]
    fn never_advances_past_last_entry() {
        assert_eq!(escalate(2, 0), 2);
        assert_eq!(escalate(ALERT_PROFILES.len() - 1, 1), ALERT_PROFILES.len() - 1);
    }

    #[test]
    fn skips_at_most_one_entry() {
        // Even an instant drop to 1 s remaining moves a single step
        assert_eq!(escalate(0, 1), 1);
    }

    #[test]
    fn seconds_remaining_rounds_up_and_never_hits_zero() {
        assert_eq!(seconds_remaining(0), 1);
        assert_eq!(seconds_remaining(99), 1);
        assert_eq!(seconds_remaining(100), 2);
        assert_eq!(seconds_remaining(999), 10);
    }

    proptest! {
        #[test]
        fn escalation_is_monotone(
            start in 0usize..ALERT_PROFILES.len(),
            secs in proptest::array::uniform16(0u16..12),
        ) {
            let mut index = start;
            for s in secs {
                let next = escalate(index, s);
                prop_assert!(next >= index);
                prop_assert!(next <= index + 1);
                prop_assert!(next < ALERT_PROFILES.len());
                index = next;
            }
        }
    }
}
