//! High-level driver API for the HMC5843
//!
//! This module provides the sensor handle: it caches the operating mode,
//! output rate, gain and calibration bounds, writes configuration changes to
//! the device as they are made, and turns output reads into normalized
//! readings and compass headings.

use crate::Error;
use crate::registers::{DATA_OUTPUT_LEN, DATA_OUTPUT_START, Hmc5843 as RegisterDevice};
use crate::sensors::{DataRate, Gain, MagCalibration, MagData, MagMode, tilt_compensated_heading};

use device_driver::RegisterInterface;

/// Power-on settle time before the first register write, in milliseconds
const SETTLE_DELAY_MS: u32 = 5;

/// Main driver for the HMC5843
///
/// Each handle owns its bus interface, so any number of sensors can be
/// driven side by side on separate buses. The handle is not meant to be
/// shared between threads; serialize access externally if needed.
pub struct Hmc5843Driver<I> {
    device: RegisterDevice<I>,
    mode: MagMode,
    data_rate: DataRate,
    gain: Gain,
    calibration: MagCalibration,
}

impl<I> Hmc5843Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new HMC5843 driver with default settings and the factory
    /// calibration bounds
    ///
    /// No bus traffic happens until [`init()`](Self::init) or a setter is
    /// called.
    pub fn new(interface: I) -> Self {
        Self::with_calibration(interface, MagCalibration::default())
    }

    /// Create a new HMC5843 driver using calibration bounds measured for
    /// this particular sensor unit
    ///
    /// # Example
    ///
    /// ```ignore
    /// let bounds = MagCalibration {
    ///     min_x: -650, max_x: 410,
    ///     min_y: -700, max_y: 180,
    ///     min_z: -60,  max_z: 990,
    /// };
    /// let mut compass = Hmc5843Driver::with_calibration(I2cInterface::default(i2c), bounds);
    /// ```
    pub fn with_calibration(interface: I, calibration: MagCalibration) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            mode: MagMode::default(),
            data_rate: DataRate::default(),
            gain: Gain::default(),
            calibration,
        }
    }

    /// Initialize the device
    ///
    /// Waits for the part to settle, writes the cached operating mode, then
    /// waits one sample period so the first measurement is available when
    /// this returns. Output rate and gain are left at whatever the device
    /// holds; use the setters to change them.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use embassy_time::Delay;
    /// let mut delay = Delay;
    /// compass.init(&mut delay)?;
    /// ```
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        delay.delay_ms(SETTLE_DELAY_MS);
        self.set_mode(self.mode)?;
        delay.delay_ms(self.data_rate.period_ms());

        #[cfg(feature = "defmt")]
        defmt::info!(
            "HMC5843 initialized (mode: {}, rate: {}, gain: {})",
            self.mode,
            self.data_rate,
            self.gain
        );

        Ok(())
    }

    /// Read the raw output registers
    ///
    /// Reads all 6 bytes in one burst so the axes come from the same
    /// measurement.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, including a
    /// transfer that delivers fewer than 6 bytes. No reading is produced in
    /// that case.
    pub fn raw(&mut self) -> Result<MagData, Error<I::Error>> {
        let mut buffer = [0u8; DATA_OUTPUT_LEN];
        self.device
            .interface
            .read_register(DATA_OUTPUT_START, 48, &mut buffer)?;

        let data = MagData::from_be_bytes(&buffer);

        #[cfg(feature = "defmt")]
        defmt::trace!("HMC5843 raw: {}", data);

        Ok(data)
    }

    /// Read the raw output registers into `out`
    ///
    /// `out` is written only after a complete 6-byte transfer. On error it
    /// still holds whatever it held before the call.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn raw_into(&mut self, out: &mut MagData) -> Result<(), Error<I::Error>> {
        *out = self.raw()?;
        Ok(())
    }

    /// Read a reading normalized against the calibration bounds
    ///
    /// Each axis is clamped to its `[min, max]` bounds and rescaled onto
    /// `[-32768, 32767]`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn normalized(&mut self) -> Result<MagData, Error<I::Error>> {
        let raw = self.raw()?;
        Ok(self.calibration.apply(&raw))
    }

    /// Read a tilt-compensated compass heading in degrees
    ///
    /// # Arguments
    ///
    /// * `roll` - Roll angle (theta) in radians
    /// * `pitch` - Pitch angle (phi) in radians
    ///
    /// The result lies in (-180, 180] and is not wrapped into [0, 360).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn heading(&mut self, roll: f64, pitch: f64) -> Result<f64, Error<I::Error>> {
        let data = self.normalized()?;
        Ok(tilt_compensated_heading(&data, roll, pitch))
    }

    /// Read a compass heading in degrees, assuming the sensor is level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn heading_level(&mut self) -> Result<f64, Error<I::Error>> {
        self.heading(0.0, 0.0)
    }

    /// Calibrate the sensor
    ///
    /// Intentionally a no-op: bounds are supplied as configuration through
    /// [`with_calibration()`](Self::with_calibration) or
    /// [`set_calibration()`](Self::set_calibration), never computed here.
    pub fn calibrate(&mut self) {}

    /// Get the calibration bounds used by [`normalized()`](Self::normalized)
    pub const fn calibration(&self) -> &MagCalibration {
        &self.calibration
    }

    /// Replace the calibration bounds
    pub const fn set_calibration(&mut self, calibration: MagCalibration) {
        self.calibration = calibration;
    }

    /// Get the cached operating mode (no bus access)
    pub const fn mode(&self) -> MagMode {
        self.mode
    }

    /// Set the operating mode and write it to the mode register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_mode(&mut self, mode: MagMode) -> Result<(), Error<I::Error>> {
        self.mode = mode;
        self.device.mode().write(|w| {
            w.set_operating_mode(mode.index());
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("HMC5843 mode -> {}", mode);

        Ok(())
    }

    /// Set the operating mode from its register value
    ///
    /// Values outside 0..=3 select [`MagMode::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_mode_index(&mut self, index: i32) -> Result<(), Error<I::Error>> {
        let mode = MagMode::from_index_or_fallback(index);

        #[cfg(feature = "defmt")]
        {
            if MagMode::from_index(index).is_none() {
                defmt::warn!("HMC5843 mode {} out of range, using {}", index, mode);
            }
        }

        self.set_mode(mode)
    }

    /// Get the cached output rate setting
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// Get the output rate in Hz
    pub const fn sampling_rate_hz(&self) -> f32 {
        self.data_rate.rate_hz()
    }

    /// Set the output rate and write it to configuration register A
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<I::Error>> {
        self.data_rate = rate;
        self.device.config_a().write(|w| {
            w.set_data_output_rate(rate.index());
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("HMC5843 data rate -> {}", rate);

        Ok(())
    }

    /// Set the output rate from its register index
    ///
    /// Indices outside 0..=6 select [`DataRate::Hz10`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_data_rate_index(&mut self, index: i32) -> Result<(), Error<I::Error>> {
        let rate = DataRate::from_index_or_fallback(index);

        #[cfg(feature = "defmt")]
        {
            if DataRate::from_index(index).is_none() {
                defmt::warn!("HMC5843 rate index {} out of range, using {}", index, rate);
            }
        }

        self.set_data_rate(rate)
    }

    /// Get the cached gain setting
    pub const fn gain(&self) -> Gain {
        self.gain
    }

    /// Get the measurable range in gauss for the current gain
    pub const fn gain_gauss(&self) -> f32 {
        self.gain.range_gauss()
    }

    /// Set the gain and write it to configuration register B
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), Error<I::Error>> {
        self.gain = gain;
        self.device.config_b().write(|w| {
            w.set_gain(gain.index());
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("HMC5843 gain -> {}", gain);

        Ok(())
    }

    /// Set the gain from its register index
    ///
    /// Indices outside 0..=7 select [`Gain::Ga1_0`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gain_index(&mut self, index: i32) -> Result<(), Error<I::Error>> {
        let gain = Gain::from_index_or_fallback(index);

        #[cfg(feature = "defmt")]
        {
            if Gain::from_index(index).is_none() {
                defmt::warn!("HMC5843 gain index {} out of range, using {}", index, gain);
            }
        }

        self.set_gain(gain)
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    pub const fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }
}
