//! PWM tone generator
//!
//! Drives a piezo buzzer from a PWM channel: 50 % duty for a clean
//! square wave while sounding, 0 % for silence. The carrier frequency
//! (~2 kHz) is fixed by the platform's PWM clock configuration, not
//! here. PWM faults are latched like the accelerometer's bus faults.

use embedded_hal::pwm::SetDutyCycle;
use vigil_core::traits::ToneOutput;

/// Tone generator over a PWM channel.
pub struct PwmTone<P> {
    pwm: P,
    on: bool,
    fault: bool,
}

impl<P> PwmTone<P>
where
    P: SetDutyCycle,
{
    /// Create the tone generator; output state is whatever the channel
    /// was left at until [`ToneOutput::init`] silences it.
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            on: false,
            fault: false,
        }
    }

    /// True if any duty-cycle update has failed since power-on.
    pub fn fault(&self) -> bool {
        self.fault
    }

    fn latch<E>(&mut self, result: Result<(), E>) {
        if result.is_err() {
            self.fault = true;
        }
    }
}

impl<P> ToneOutput for PwmTone<P>
where
    P: SetDutyCycle,
{
    fn init(&mut self) {
        self.stop();
    }

    fn start(&mut self) {
        let result = self.pwm.set_duty_cycle_percent(50);
        self.latch(result);
        self.on = true;
    }

    fn stop(&mut self) {
        let result = self.pwm.set_duty_cycle_fully_off();
        self.latch(result);
        self.on = false;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPwm {
        duty: u16,
        max: u16,
    }

    impl embedded_hal::pwm::ErrorType for MockPwm {
        type Error = core::convert::Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn start_is_half_duty_stop_is_silent() {
        let mut tone = PwmTone::new(MockPwm { duty: 999, max: 1000 });

        tone.init();
        assert_eq!(tone.pwm.duty, 0);
        assert!(!tone.is_on());

        tone.start();
        assert_eq!(tone.pwm.duty, 500);
        assert!(tone.is_on());

        tone.stop();
        assert_eq!(tone.pwm.duty, 0);
        assert!(!tone.is_on());
        assert!(!tone.fault());
    }
}
