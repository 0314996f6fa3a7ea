//! Tick-driven controller state machine
//!
//! The controller sequences the power-on announcement (Init), the armed
//! low-power watch (Sleep), and the escalating alert (Alert). It is
//! stepped exactly once per 10 ms tick by the main loop; all transitions
//! are total functions of the current state and the driver readings, so
//! there is no error channel.
//!
//! Dispatch follows the enter/run/exit contract: on each step,
//!
//! 1. if the previous state differs from the current one, the current
//!    state's Enter runs (exactly once per entry),
//! 2. the current state's Run executes and returns the next state,
//! 3. if Run changed the state, the outgoing state's Exit runs.
//!
//! Run therefore never observes mid-transition data, and every entry is
//! paired with exactly one exit.

use crate::config::{ALERT_TICKS, ANNOUNCE_BEEP_TICKS, NUM_ANNOUNCE_BEEPS, SLEEP_SETTLE_TICKS};
use crate::profile::{self, ALERT_PROFILES};
use crate::state::{State, StateData};
use crate::traits::{Devices, MotionSensor, StatusLed, ToneOutput, WakeSignal};

/// The controller state machine
///
/// Created once at power-on with `current = Init` and a `None` previous
/// state, forcing the first Enter. Lives for the process lifetime and is
/// only ever mutated through [`step`](Self::step).
pub struct Controller {
    current: State,
    previous: Option<State>,
    data: StateData,
}

impl Controller {
    /// Create the controller, poised to run Init's Enter on the first step.
    pub const fn new() -> Self {
        Self {
            current: State::Init,
            // Power-on sentinel; replaced by the first step()
            previous: None,
            data: StateData::Init {
                beeps_left: 0,
                tone_ticks: 0,
            },
        }
    }

    /// The currently active state.
    pub fn state(&self) -> State {
        self.current
    }

    /// Advance the state machine by one tick.
    ///
    /// The only entry point that mutates controller state. Blocks inside
    /// Sleep's run while the processor is halted awaiting motion.
    pub fn step<S, T, W, L>(&mut self, dev: &mut Devices<S, T, W, L>)
    where
        S: MotionSensor,
        T: ToneOutput,
        W: WakeSignal,
        L: StatusLed,
    {
        if self.previous != Some(self.current) {
            self.enter(dev);
            self.previous = Some(self.current);
        }

        let outgoing = self.current;
        self.current = self.run(dev);

        if self.previous != Some(self.current) {
            Self::exit(outgoing, dev);
        }
    }

    /// One-time setup on entry into the current state.
    fn enter<S, T, W, L>(&mut self, dev: &mut Devices<S, T, W, L>)
    where
        S: MotionSensor,
        T: ToneOutput,
    {
        match self.current {
            State::Init => {
                dev.tone.init();
                dev.sensor.init();
                self.data = StateData::Init {
                    beeps_left: NUM_ANNOUNCE_BEEPS,
                    tone_ticks: ANNOUNCE_BEEP_TICKS,
                };
                dev.tone.start();
            }
            State::Sleep => {
                self.data = StateData::Sleep {
                    settle_ticks: SLEEP_SETTLE_TICKS,
                };
            }
            State::Alert => {
                self.data = StateData::Alert {
                    alert_ticks: ALERT_TICKS,
                    tone_ticks: ALERT_PROFILES[0].on_ticks,
                    profile: 0,
                };
                dev.tone.start();
            }
        }
    }

    /// Per-tick work for the current state; returns the next state.
    fn run<S, T, W, L>(&mut self, dev: &mut Devices<S, T, W, L>) -> State
    where
        S: MotionSensor,
        T: ToneOutput,
        W: WakeSignal,
        L: StatusLed,
    {
        match (self.current, &mut self.data) {
            (State::Init, StateData::Init { beeps_left, tone_ticks }) => {
                if *tone_ticks > 0 {
                    *tone_ticks -= 1;
                    return State::Init;
                }
                *tone_ticks = ANNOUNCE_BEEP_TICKS;

                if dev.tone.is_on() {
                    dev.tone.stop();
                    *beeps_left = beeps_left.saturating_sub(1);
                    if *beeps_left == 0 {
                        // Announcement complete, go quiet and watch
                        return State::Sleep;
                    }
                } else {
                    dev.tone.start();
                }
                State::Init
            }

            (State::Sleep, StateData::Sleep { settle_ticks }) => {
                // Stay briefly active after arming to ride out the
                // vibration that put us here
                if *settle_ticks > 0 {
                    *settle_ticks -= 1;
                    return State::Sleep;
                }

                dev.sensor.set_autosleep(true);
                dev.heartbeat.set(false);

                // Halt until the sensor's wake line fires. A stale edge
                // must be dropped first or the wait returns immediately.
                dev.wake.clear_pending();
                dev.wake.wait_for_motion();

                // Waking is itself the motion-detected event; any wake,
                // spurious or not, starts an alert
                State::Alert
            }

            (State::Alert, StateData::Alert { alert_ticks, tone_ticks, profile }) => {
                // Motion gone, or episode timed out: re-arm
                if dev.sensor.is_asleep() || *alert_ticks == 0 {
                    return State::Sleep;
                }
                *alert_ticks -= 1;

                if *tone_ticks > 0 {
                    *tone_ticks -= 1;
                    return State::Alert;
                }

                let remaining = profile::seconds_remaining(*alert_ticks);
                *profile = profile::escalate(*profile, remaining);
                let entry = &ALERT_PROFILES[*profile];

                // Toggle the tone phase, skipping a phase whose duration
                // is zero (the final profile's off-phase: continuous tone)
                if dev.tone.is_on() {
                    *tone_ticks = entry.off_ticks;
                    if entry.off_ticks > 0 {
                        dev.tone.stop();
                    }
                } else {
                    *tone_ticks = entry.on_ticks;
                    if entry.on_ticks > 0 {
                        dev.tone.start();
                    }
                }
                State::Alert
            }

            // Enter always installs the matching data variant before Run
            (state, _) => state,
        }
    }

    /// One-time teardown when leaving `outgoing`.
    fn exit<S, T, W, L>(outgoing: State, dev: &mut Devices<S, T, W, L>)
    where
        S: MotionSensor,
        T: ToneOutput,
    {
        match outgoing {
            State::Init => {}
            State::Sleep => {
                // The watch mode must be off before is_asleep() polling
                // resumes in Alert
                dev.sensor.set_autosleep(false);
            }
            State::Alert => {
                // Unconditional: no return path may leave the buzzer engaged
                dev.tone.stop();
            }
        }
    }

    #[cfg(test)]
    fn profile_index(&self) -> Option<usize> {
        match self.data {
            StateData::Alert { profile, .. } => Some(profile),
            _ => None,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
