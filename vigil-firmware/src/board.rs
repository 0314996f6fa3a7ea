//! Board wiring: vigil-core trait impls over RP2040 peripherals
//!
//! The ADXL362's INT1 pin is the host wake line (rising edge on
//! motion); INT2 carries the same AWAKE status and is polled as a level
//! by the sensor driver. Both are plain GPIO inputs here.

use cortex_m::asm;
use cortex_m::peripheral::NVIC;
use embassy_rp::gpio::{Input, Output};
use embassy_rp::interrupt::Interrupt;

use vigil_core::traits::{StatusLed, WakeSignal};
use vigil_drivers::AwakePin;

/// An indicator LED on a GPIO output.
pub struct Led<'d> {
    out: Output<'d>,
}

impl<'d> Led<'d> {
    pub fn new(out: Output<'d>) -> Self {
        Self { out }
    }
}

impl StatusLed for Led<'_> {
    fn set(&mut self, on: bool) {
        if on {
            self.out.set_high();
        } else {
            self.out.set_low();
        }
    }

    fn toggle(&mut self) {
        self.out.toggle();
    }
}

/// The sensor's AWAKE status line (INT2), polled during Alert.
pub struct AwakeLevel<'d> {
    pin: Input<'d>,
}

impl<'d> AwakeLevel<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl AwakePin for AwakeLevel<'_> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}

/// The sensor's wake line (INT1).
///
/// The halted wait is a `wfi` loop gated on the line level: the level
/// check makes a stale latched edge harmless, and any interrupt (the
/// GPIO edge or the system timer) re-checks the line. There is no
/// timeout - the device stays halted until physical motion occurs.
pub struct WakeLine<'d> {
    pin: Input<'d>,
}

impl<'d> WakeLine<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl WakeSignal for WakeLine<'_> {
    fn clear_pending(&mut self) {
        NVIC::unpend(Interrupt::IO_IRQ_BANK0);
    }

    fn wait_for_motion(&mut self) {
        while self.pin.is_low() {
            asm::wfi();
        }
    }
}

/// Publish the controller's 2-bit state code on the state LEDs.
pub fn publish_state(code: u8, bit0: &mut Output<'_>, bit1: &mut Output<'_>) {
    if code & 0b01 != 0 {
        bit0.set_high();
    } else {
        bit0.set_low();
    }
    if code & 0b10 != 0 {
        bit1.set_high();
    } else {
        bit1.set_low();
    }
}
