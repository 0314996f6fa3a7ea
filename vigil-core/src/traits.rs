//! Hardware abstraction traits
//!
//! These traits define the interface between the controller logic and
//! hardware-specific implementations. The controller is the only caller
//! of any of them, so none of the implementations need interior locking.

/// Motion sensor with an autonomous low-power watch mode
///
/// Models an accelerometer (ADXL362 or similar) that can detect
/// activity on its own and assert a wake line without host polling.
pub trait MotionSensor {
    /// Reset and configure the sensor for wake-on-motion operation.
    fn init(&mut self);

    /// True when the sensor reports no recent motion.
    fn is_asleep(&mut self) -> bool;

    /// Enable or disable the autonomous low-power watch mode.
    ///
    /// Must be disabled before [`is_asleep`](Self::is_asleep) polling
    /// resumes reliably.
    fn set_autosleep(&mut self, enabled: bool);
}

/// Audible tone generator (buzzer)
pub trait ToneOutput {
    /// Prepare the tone hardware, output silent.
    fn init(&mut self);

    /// Start sounding the tone.
    fn start(&mut self);

    /// Stop sounding the tone.
    fn stop(&mut self);

    /// True while the tone is sounding.
    fn is_on(&self) -> bool;
}

/// The sensor's edge-triggered wake line
///
/// The only suspension point in the whole system: the controller halts
/// inside [`wait_for_motion`](Self::wait_for_motion) with no timeout,
/// and the wake edge is the only way out.
pub trait WakeSignal {
    /// Drop any latched wake edge so a stale event cannot retrigger
    /// the wait immediately.
    fn clear_pending(&mut self);

    /// Block, halting the processor, until the wake line fires.
    /// Returning from this call *is* the motion-detected event.
    fn wait_for_motion(&mut self);
}

/// A simple on/off indicator LED
pub trait StatusLed {
    /// Drive the LED on or off.
    fn set(&mut self, on: bool);

    /// Invert the LED.
    fn toggle(&mut self);
}

/// The device peripherals, bundled for the controller
///
/// Explicitly owned context passed into every `step()` call; no statics,
/// which keeps the controller deterministic under test.
pub struct Devices<S, T, W, L> {
    /// Motion sensor.
    pub sensor: S,
    /// Tone generator.
    pub tone: T,
    /// Wake line from the sensor.
    pub wake: W,
    /// Heartbeat LED (toggled by the main loop, cleared before halting).
    pub heartbeat: L,
}
