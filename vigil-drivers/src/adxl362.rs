//! ADXL362 micropower accelerometer
//!
//! Configures the part for fully autonomous wake-on-motion operation:
//! referenced activity/inactivity detection in loop mode, with the AWAKE
//! status mapped to both interrupt pins. INT1 (rising edge) is the host
//! wake line; INT2 is polled as a level for [`MotionSensor::is_asleep`].
//!
//! Only register writes are needed for this role; nothing is ever read
//! back over the bus. A failed bus transaction is latched in
//! [`bus_fault`](Adxl362::bus_fault) rather than propagated - the
//! controller has no error channel, and a sensor left in its reset state
//! simply never wakes the device.

use embedded_hal::spi::{Operation, SpiDevice};
use vigil_core::traits::MotionSensor;

/// Register write command byte.
const CMD_WRITE_REG: u8 = 0x0A;

/// Registers.
const REG_SOFT_RESET: u8 = 0x1F;
const REG_THRESH_ACT_L: u8 = 0x20;
const REG_POWER_CTL: u8 = 0x2D;

/// Soft reset key.
const RESET_KEY: u8 = 0x52;

/// POWER_CTL bits.
const POWER_CTL_MEASURE: u8 = 0b10;
const POWER_CTL_AUTOSLEEP: u8 = 1 << 2;

// Detection tuning, +/-2 g range at 12.5 Hz ODR
const THRESH_ACT_MG: u16 = 125;
const THRESH_INACT_MG: u16 = 250;
const TIME_ACT_SAMPLES: u8 = 15; // ~1.2 s
const TIME_INACT_SAMPLES: u16 = 125; // ~10 s

/// Register block 0x20..=0x2D, written as a single burst after reset.
const WAKE_CONFIG: [u8; 14] = [
    (THRESH_ACT_MG & 0xFF) as u8,  // 0x20 THRESH_ACT_L
    (THRESH_ACT_MG >> 8) as u8,    // 0x21 THRESH_ACT_H
    TIME_ACT_SAMPLES,              // 0x22 TIME_ACT
    (THRESH_INACT_MG & 0xFF) as u8, // 0x23 THRESH_INACT_L
    (THRESH_INACT_MG >> 8) as u8,  // 0x24 THRESH_INACT_H
    (TIME_INACT_SAMPLES & 0xFF) as u8, // 0x25 TIME_INACT_L
    (TIME_INACT_SAMPLES >> 8) as u8, // 0x26 TIME_INACT_H
    0x3F, // 0x27 ACT_INACT_CTL: loop mode, referenced act + inact
    0x00, // 0x28 FIFO_CONTROL: FIFO disabled
    0x80, // 0x29 FIFO_SAMPLES: reset default
    0x40, // 0x2A INTMAP1: AWAKE, active high (host wake line)
    0x40, // 0x2B INTMAP2: AWAKE, active high (polled status)
    0x10, // 0x2C FILTER_CTL: +/-2 g, half bandwidth, 12.5 Hz ODR
    POWER_CTL_MEASURE, // 0x2D POWER_CTL: measurement mode
];

/// Level of the sensor's AWAKE interrupt line
///
/// High while the part has recently seen activity.
pub trait AwakePin {
    /// Read the line level.
    fn is_high(&mut self) -> bool;
}

/// ADXL362 driver over a shared-bus SPI device and the AWAKE line.
pub struct Adxl362<SPI, P> {
    spi: SPI,
    awake: P,
    bus_fault: bool,
}

impl<SPI, P> Adxl362<SPI, P>
where
    SPI: SpiDevice,
    P: AwakePin,
{
    /// Create the driver. The part stays in its reset state until
    /// [`MotionSensor::init`] runs.
    pub fn new(spi: SPI, awake: P) -> Self {
        Self {
            spi,
            awake,
            bus_fault: false,
        }
    }

    /// True if any bus transaction has failed since power-on.
    pub fn bus_fault(&self) -> bool {
        self.bus_fault
    }

    /// Write `data` into consecutive registers starting at `start`.
    fn write_regs(&mut self, start: u8, data: &[u8]) -> Result<(), SPI::Error> {
        self.spi.transaction(&mut [
            Operation::Write(&[CMD_WRITE_REG, start]),
            Operation::Write(data),
        ])
    }

    fn latch<E>(&mut self, result: Result<(), E>) {
        if result.is_err() {
            self.bus_fault = true;
        }
    }
}

impl<SPI, P> MotionSensor for Adxl362<SPI, P>
where
    SPI: SpiDevice,
    P: AwakePin,
{
    fn init(&mut self) {
        let reset = self.write_regs(REG_SOFT_RESET, &[RESET_KEY]);
        self.latch(reset);

        let config = self.write_regs(REG_THRESH_ACT_L, &WAKE_CONFIG);
        self.latch(config);
    }

    fn is_asleep(&mut self) -> bool {
        !self.awake.is_high()
    }

    fn set_autosleep(&mut self, enabled: bool) {
        let ctl = if enabled {
            POWER_CTL_MEASURE | POWER_CTL_AUTOSLEEP
        } else {
            POWER_CTL_MEASURE
        };
        let result = self.write_regs(REG_POWER_CTL, &[ctl]);
        self.latch(result);
    }
}
