#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::Hmc5843Driver;
pub use interface::I2cInterface;
pub use sensors::{
    DataRate, Gain, MagCalibration, MagData, MagMode, tilt_compensated_heading,
};

/// HMC5843 7-bit I2C address (fixed, the part has no address pins)
pub const I2C_ADDRESS: u8 = 0x1E;

/// Driver errors
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device, including transfers that ended
    /// before every requested byte arrived
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
