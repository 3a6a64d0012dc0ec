//! Sensor modules for the HMC5843
//!
//! The HMC5843 carries a single 3-axis magnetometer. This module provides its
//! configuration enums, reading and calibration types, and the heading math.
//!
//! All bus operations are performed through methods on `Hmc5843Driver`.

pub mod magnetometer;

// Re-export main types
pub use magnetometer::{
    DataRate, Gain, MagCalibration, MagData, MagMode, normalize_axis, tilt_compensated_heading,
};
