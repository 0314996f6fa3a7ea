//! Vigil - Motion-Triggered Alarm Firmware
//!
//! Main firmware binary for RP2040-based boards. The controller runs on
//! a fixed 10 ms tick: boot announcement, then an armed low-power watch
//! in which the processor halts until the accelerometer's wake line
//! fires, then an escalating alert until the motion stops or the alert
//! ceiling is reached.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Duration, Ticker};
use embedded_hal_bus::spi::ExclusiveDevice;
use {defmt_rtt as _, panic_probe as _};

use vigil_core::config::TICK_PERIOD_US;
use vigil_core::controller::Controller;
use vigil_core::heartbeat::Heartbeat;
use vigil_core::state::State;
use vigil_core::traits::Devices;
use vigil_drivers::{Adxl362, PwmTone};

use crate::board::{publish_state, AwakeLevel, Led, WakeLine};

mod board;

/// Buzzer carrier frequency.
const TONE_FREQ_HZ: u32 = 2_048;

/// RP2040 system clock feeding the PWM slices.
const SYS_CLOCK_HZ: u32 = 125_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Vigil firmware starting...");

    let p = embassy_rp::init(Default::default());

    // SPI0 to the ADXL362 (mode 0, conservative clock)
    let mut spi_cfg = SpiConfig::default();
    spi_cfg.frequency = 1_000_000;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_cfg);
    let cs = Output::new(p.PIN_17, Level::High);
    let spi_dev = ExclusiveDevice::new(spi, cs, Delay).unwrap();

    // ADXL362 INT2 carries the AWAKE level for polling
    let awake = AwakeLevel::new(Input::new(p.PIN_21, Pull::Down));
    let sensor = Adxl362::new(spi_dev, awake);

    // Buzzer on PWM slice 1A, ~2 kHz carrier
    let mut pwm_cfg = PwmConfig::default();
    pwm_cfg.top = (SYS_CLOCK_HZ / TONE_FREQ_HZ - 1) as u16;
    let pwm = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, pwm_cfg);
    let (buzzer, _) = pwm.split();
    let tone = PwmTone::new(buzzer.unwrap());

    // ADXL362 INT1 is the wake line
    let wake = WakeLine::new(Input::new(p.PIN_20, Pull::Down));

    let heartbeat_led = Led::new(Output::new(p.PIN_25, Level::Low));
    let mut state_bit0 = Output::new(p.PIN_14, Level::Low);
    let mut state_bit1 = Output::new(p.PIN_15, Level::Low);

    let mut devices = Devices {
        sensor,
        tone,
        wake,
        heartbeat: heartbeat_led,
    };
    let mut controller = Controller::new();
    let mut heartbeat = Heartbeat::new();

    info!("Peripherals initialized, entering control loop");

    let mut ticker = Ticker::every(Duration::from_micros(TICK_PERIOD_US as u64));
    let mut state = controller.state();

    loop {
        ticker.next().await;

        heartbeat.update(&mut devices.heartbeat);
        controller.step(&mut devices);

        let next = controller.state();
        if next != state {
            info!("state {:?} -> {:?}", state, next);
            if state == State::Sleep {
                // step() just returned from the halted watch; drop the
                // tick backlog the ticker would otherwise burst out
                ticker.reset();
            }
            state = next;
        }

        publish_state(state.code(), &mut state_bit0, &mut state_bit1);
    }
}
