//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use hmc5843::{Hmc5843Driver, MagCalibration};

/// Mock delay implementation for testing
///
/// Does not sleep; records every millisecond delay requested so tests can
/// check the driver's timing.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    /// Millisecond delays in the order they were requested
    pub delays_ms: Vec<u32>,
}

impl MockDelay {
    /// Create a delay with an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all recorded millisecond delays
    #[allow(dead_code)]
    pub fn total_ms(&self) -> u32 {
        self.delays_ms.iter().sum()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // No-op for testing
    }

    fn delay_us(&mut self, _us: u32) {
        // No-op for testing
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Hmc5843Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    (Hmc5843Driver::new(interface), interface_clone)
}

/// Create a mock driver whose normalization is the identity
///
/// With bounds spanning the whole `i16` range, normalized readings equal raw
/// readings, which makes heading expectations easy to state.
#[allow(dead_code)]
pub fn create_identity_driver() -> (Hmc5843Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Hmc5843Driver::with_calibration(interface, MagCalibration::FULL_SCALE);
    (driver, interface_clone)
}

/// Assert that two floating point values are approximately equal
#[allow(dead_code)]
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
