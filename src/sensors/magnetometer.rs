//! Magnetometer sensor types and configuration
//!
//! Provides the HMC5843's operating modes, output rate and gain tables, the
//! per-axis calibration bounds used for normalization, and the
//! tilt-compensated heading computation.

use core::f64::consts::PI;

/// Lower end of the normalized output range
pub const NORMALIZED_MIN: i16 = i16::MIN;

/// Upper end of the normalized output range
pub const NORMALIZED_MAX: i16 = i16::MAX;

/// Magnetometer operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagMode {
    /// Continuous measurement at the configured output rate
    #[default]
    Continuous = 0,
    /// Single measurement, then the device returns to idle
    Single = 1,
    /// Idle, bus stays active
    Idle = 2,
    /// Sleep
    Sleep = 3,
}

impl MagMode {
    /// Mode used in place of an out-of-range mode value
    pub const FALLBACK: Self = Self::Idle;

    /// Look up a mode by its register value
    #[must_use]
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Continuous),
            1 => Some(Self::Single),
            2 => Some(Self::Idle),
            3 => Some(Self::Sleep),
            _ => None,
        }
    }

    /// Look up a mode by its register value, substituting [`Self::FALLBACK`]
    /// for anything outside 0..=3
    #[must_use]
    pub const fn from_index_or_fallback(index: i32) -> Self {
        match Self::from_index(index) {
            Some(mode) => mode,
            None => Self::FALLBACK,
        }
    }

    /// Register value for this mode
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Data output rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// 0.5 Hz
    Hz0_5 = 0,
    /// 1 Hz
    Hz1 = 1,
    /// 2 Hz
    Hz2 = 2,
    /// 5 Hz
    Hz5 = 3,
    /// 10 Hz
    #[default]
    Hz10 = 4,
    /// 20 Hz
    Hz20 = 5,
    /// 50 Hz
    Hz50 = 6,
}

impl DataRate {
    /// Rate used in place of an out-of-range rate index
    pub const FALLBACK: Self = Self::Hz10;

    /// Every rate, in register order
    pub const ALL: [Self; 7] = [
        Self::Hz0_5,
        Self::Hz1,
        Self::Hz2,
        Self::Hz5,
        Self::Hz10,
        Self::Hz20,
        Self::Hz50,
    ];

    /// Look up a rate by its register index
    #[must_use]
    pub const fn from_index(index: i32) -> Option<Self> {
        if index < 0 || index >= Self::ALL.len() as i32 {
            return None;
        }
        Some(Self::ALL[index as usize])
    }

    /// Look up a rate by its register index, substituting
    /// [`Self::FALLBACK`] for anything outside 0..=6
    #[must_use]
    pub const fn from_index_or_fallback(index: i32) -> Self {
        match Self::from_index(index) {
            Some(rate) => rate,
            None => Self::FALLBACK,
        }
    }

    /// Register index for this rate
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Get the output rate in Hz
    #[must_use]
    pub const fn rate_hz(self) -> f32 {
        match self {
            Self::Hz0_5 => 0.5,
            Self::Hz1 => 1.0,
            Self::Hz2 => 2.0,
            Self::Hz5 => 5.0,
            Self::Hz10 => 10.0,
            Self::Hz20 => 20.0,
            Self::Hz50 => 50.0,
        }
    }

    /// Get the sample period in whole milliseconds
    #[must_use]
    pub const fn period_ms(self) -> u32 {
        match self {
            Self::Hz0_5 => 2000,
            Self::Hz1 => 1000,
            Self::Hz2 => 500,
            Self::Hz5 => 200,
            Self::Hz10 => 100,
            Self::Hz20 => 50,
            Self::Hz50 => 20,
        }
    }
}

/// Sensor gain, expressed as the measurable field range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    /// ±0.7 Ga (highest resolution)
    Ga0_7 = 0,
    /// ±1.0 Ga
    #[default]
    Ga1_0 = 1,
    /// ±1.5 Ga
    Ga1_5 = 2,
    /// ±2.0 Ga
    Ga2_0 = 3,
    /// ±3.2 Ga
    Ga3_2 = 4,
    /// ±3.8 Ga
    Ga3_8 = 5,
    /// ±4.5 Ga
    Ga4_5 = 6,
    /// ±6.5 Ga (widest range)
    Ga6_5 = 7,
}

impl Gain {
    /// Gain used in place of an out-of-range gain index
    pub const FALLBACK: Self = Self::Ga1_0;

    /// Every gain, in register order
    pub const ALL: [Self; 8] = [
        Self::Ga0_7,
        Self::Ga1_0,
        Self::Ga1_5,
        Self::Ga2_0,
        Self::Ga3_2,
        Self::Ga3_8,
        Self::Ga4_5,
        Self::Ga6_5,
    ];

    /// Look up a gain by its register index
    #[must_use]
    pub const fn from_index(index: i32) -> Option<Self> {
        if index < 0 || index >= Self::ALL.len() as i32 {
            return None;
        }
        Some(Self::ALL[index as usize])
    }

    /// Look up a gain by its register index, substituting
    /// [`Self::FALLBACK`] for anything outside 0..=7
    #[must_use]
    pub const fn from_index_or_fallback(index: i32) -> Self {
        match Self::from_index(index) {
            Some(gain) => gain,
            None => Self::FALLBACK,
        }
    }

    /// Register index for this gain
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Get the measurable range in gauss (±)
    #[must_use]
    pub const fn range_gauss(self) -> f32 {
        match self {
            Self::Ga0_7 => 0.7,
            Self::Ga1_0 => 1.0,
            Self::Ga1_5 => 1.5,
            Self::Ga2_0 => 2.0,
            Self::Ga3_2 => 3.2,
            Self::Ga3_8 => 3.8,
            Self::Ga4_5 => 4.5,
            Self::Ga6_5 => 6.5,
        }
    }
}

/// Magnetometer reading, one signed 16-bit value per axis
///
/// Used for both raw output and normalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagData {
    /// X-axis magnetic field
    pub x: i16,
    /// Y-axis magnetic field
    pub y: i16,
    /// Z-axis magnetic field
    pub z: i16,
}

impl MagData {
    /// Decode the 6-byte output block (X, Y, Z, each MSB first)
    #[must_use]
    pub const fn from_be_bytes(buffer: &[u8; 6]) -> Self {
        Self {
            x: i16::from_be_bytes([buffer[0], buffer[1]]),
            y: i16::from_be_bytes([buffer[2], buffer[3]]),
            z: i16::from_be_bytes([buffer[4], buffer[5]]),
        }
    }
}

/// Per-axis raw bounds used to normalize readings
///
/// The bounds are the extremes a particular sensor unit reports when rotated
/// through the local field; they differ from unit to unit. `min <= max` is
/// assumed for each axis and not checked when normalizing (see
/// [`is_valid`](Self::is_valid)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagCalibration {
    /// Minimum raw X value
    pub min_x: i16,
    /// Maximum raw X value
    pub max_x: i16,
    /// Minimum raw Y value
    pub min_y: i16,
    /// Maximum raw Y value
    pub max_y: i16,
    /// Minimum raw Z value
    pub min_z: i16,
    /// Maximum raw Z value
    pub max_z: i16,
}

impl Default for MagCalibration {
    fn default() -> Self {
        Self::FACTORY
    }
}

impl MagCalibration {
    /// Bounds measured on the reference unit
    pub const FACTORY: Self = Self {
        min_x: -720,
        max_x: 380,
        min_y: -775,
        max_y: 145,
        min_z: -37,
        max_z: 1035,
    };

    /// Bounds spanning the whole `i16` range, which make normalization the
    /// identity
    pub const FULL_SCALE: Self = Self {
        min_x: i16::MIN,
        max_x: i16::MAX,
        min_y: i16::MIN,
        max_y: i16::MAX,
        min_z: i16::MIN,
        max_z: i16::MAX,
    };

    /// Check that every axis has `min < max`
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min_x < self.max_x && self.min_y < self.max_y && self.min_z < self.max_z
    }

    /// Clamp each axis to its bounds and rescale it to the full `i16` range
    #[must_use]
    pub fn apply(&self, data: &MagData) -> MagData {
        MagData {
            x: normalize_axis(data.x, self.min_x, self.max_x),
            y: normalize_axis(data.y, self.min_y, self.max_y),
            z: normalize_axis(data.z, self.min_z, self.max_z),
        }
    }
}

/// Clamp `value` to `[min, max]` and map that interval linearly onto
/// `[NORMALIZED_MIN, NORMALIZED_MAX]`, truncating the proportional step.
///
/// An empty or inverted interval maps everything to `NORMALIZED_MIN`.
#[must_use]
pub fn normalize_axis(value: i16, min: i16, max: i16) -> i16 {
    let out_min = i64::from(NORMALIZED_MIN);
    let out_span = i64::from(NORMALIZED_MAX) - out_min;
    let in_span = i64::from(max) - i64::from(min);
    if in_span <= 0 {
        return NORMALIZED_MIN;
    }

    // min/max chain rather than clamp(): clamp panics on inverted bounds
    let clamped = i64::from(value.min(max).max(min));
    let scaled = (clamped - i64::from(min)) * out_span / in_span + out_min;

    // Always within range once clamped, the conversion cannot fail
    i16::try_from(scaled).unwrap_or(NORMALIZED_MIN)
}

/// Compute a compass heading in degrees from a normalized reading
///
/// `roll` (theta) and `pitch` (phi) are in radians. The result lies in
/// (-180, 180]; it is not wrapped into [0, 360).
#[must_use]
pub fn tilt_compensated_heading(data: &MagData, roll: f64, pitch: f64) -> f64 {
    let x = f64::from(data.x);
    let y = f64::from(data.y);
    let z = f64::from(data.z);

    let (sin_roll, cos_roll) = (libm::sin(roll), libm::cos(roll));
    let (sin_pitch, cos_pitch) = (libm::sin(pitch), libm::cos(pitch));

    let horizontal_x = x * cos_pitch + y * sin_roll * cos_pitch - z * cos_roll * sin_pitch;
    let horizontal_y = y * cos_roll + z * sin_roll;

    libm::atan2(horizontal_y, horizontal_x) * (180.0 / PI)
}
