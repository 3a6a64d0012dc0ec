//! Register definitions for the HMC5843
//!
//! The HMC5843 exposes a flat 8-bit register space. Configuration lives in
//! three single-byte registers, followed by the six output bytes (X, Y, Z,
//! each MSB first) and the status/identification registers.
//!
//! The output block is read as a single 6-byte burst by the driver, so the
//! per-byte output registers are declared here for completeness only.

device_driver::create_device!(
    device_name: Hmc5843,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        /// CONFIG_A - Configuration Register A (0x00)
        register ConfigA {
            const ADDRESS = 0x00;
            const SIZE_BITS = 8;

            /// Measurement configuration (0=normal, 1=positive bias, 2=negative bias)
            measurement_config: uint = 0..2,
            /// Data output rate index (0=0.5 Hz .. 6=50 Hz)
            data_output_rate: uint = 2..5,
            reserved_7_5: uint = 5..8,
        },

        /// CONFIG_B - Configuration Register B (0x01)
        register ConfigB {
            const ADDRESS = 0x01;
            const SIZE_BITS = 8;

            reserved_4_0: uint = 0..5,
            /// Gain index (0=±0.7 Ga .. 7=±6.5 Ga)
            gain: uint = 5..8,
        },

        /// MODE - Mode Register (0x02)
        register Mode {
            const ADDRESS = 0x02;
            const SIZE_BITS = 8;

            /// Operating mode (0=continuous, 1=single, 2=idle, 3=sleep)
            operating_mode: uint = 0..2,
            reserved_7_2: uint = 2..8,
        },

        /// DATA_OUT_X_MSB - X-axis output, high byte (0x03)
        register DataOutXMsb {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;

            x_msb: uint = 0..8,
        },

        /// DATA_OUT_X_LSB - X-axis output, low byte (0x04)
        register DataOutXLsb {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;

            x_lsb: uint = 0..8,
        },

        /// DATA_OUT_Y_MSB - Y-axis output, high byte (0x05)
        register DataOutYMsb {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;

            y_msb: uint = 0..8,
        },

        /// DATA_OUT_Y_LSB - Y-axis output, low byte (0x06)
        register DataOutYLsb {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;

            y_lsb: uint = 0..8,
        },

        /// DATA_OUT_Z_MSB - Z-axis output, high byte (0x07)
        register DataOutZMsb {
            const ADDRESS = 0x07;
            const SIZE_BITS = 8;

            z_msb: uint = 0..8,
        },

        /// DATA_OUT_Z_LSB - Z-axis output, low byte (0x08)
        register DataOutZLsb {
            const ADDRESS = 0x08;
            const SIZE_BITS = 8;

            z_lsb: uint = 0..8,
        },

        /// STATUS - Status Register (0x09)
        register Status {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;

            /// Data ready
            rdy: bool = 0,
            /// Output registers locked until all six bytes are read
            lock: bool = 1,
            /// Voltage regulator enabled
            ren: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        /// IDENT_A - Identification Register A (0x10)
        register IdentA {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            ident_a: uint = 0..8,
        },

        /// IDENT_B - Identification Register B (0x11)
        register IdentB {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            ident_b: uint = 0..8,
        },
    }
);

/// Start of the 6-byte magnetic output block (X MSB)
pub const DATA_OUTPUT_START: u8 = 0x03;

/// Size of the magnetic output block in bytes
pub const DATA_OUTPUT_LEN: usize = 6;

// Re-export commonly used types for convenience
pub use Hmc5843 as RegisterDevice;
