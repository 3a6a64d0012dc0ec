//! Unit tests for mode, output rate and gain configuration

use crate::common::create_mock_driver;
use hmc5843::{DataRate, Gain, MagMode};

const CONFIG_A: u8 = 0x00;
const CONFIG_B: u8 = 0x01;
const MODE: u8 = 0x02;

#[test]
fn test_default_settings() {
    let (driver, interface) = create_mock_driver();

    assert_eq!(driver.mode(), MagMode::Continuous);
    assert_eq!(driver.data_rate(), DataRate::Hz10);
    assert_eq!(driver.gain(), Gain::Ga1_0);
    assert!((driver.sampling_rate_hz() - 10.0).abs() < f32::EPSILON);
    assert!((driver.gain_gauss() - 1.0).abs() < f32::EPSILON);

    // Construction alone must not touch the bus
    assert!(interface.operations().is_empty());
}

#[test]
fn test_every_rate_index_reports_table_value() {
    let (mut driver, interface) = create_mock_driver();
    let expected = [0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0];

    for (index, hz) in expected.iter().enumerate() {
        driver.set_data_rate_index(index as i32).unwrap();

        assert_eq!(driver.data_rate().index() as usize, index);
        assert!(
            (driver.sampling_rate_hz() - hz).abs() < f32::EPSILON,
            "Rate index {} should report {} Hz",
            index,
            hz
        );
        assert_eq!(interface.get_register(CONFIG_A), (index as u8) << 2);
    }
}

#[test]
fn test_invalid_rate_index_selects_10hz() {
    let (mut driver, interface) = create_mock_driver();

    for index in [-1, 7, 42, i32::MIN, i32::MAX] {
        // Start from a non-default rate so the fallback is observable
        driver.set_data_rate(DataRate::Hz50).unwrap();
        interface.clear_operations();

        driver.set_data_rate_index(index).unwrap();

        assert_eq!(driver.data_rate(), DataRate::Hz10, "index {}", index);
        assert_eq!(interface.writes(), vec![(CONFIG_A, 0x10)]);
    }
}

#[test]
fn test_gain_round_trip() {
    let (mut driver, interface) = create_mock_driver();
    let expected = [0.7, 1.0, 1.5, 2.0, 3.2, 3.8, 4.5, 6.5];

    for (gain, gauss) in Gain::ALL.iter().zip(expected.iter()) {
        driver.set_gain(*gain).unwrap();

        assert_eq!(driver.gain(), *gain);
        assert!(
            (driver.gain_gauss() - gauss).abs() < f32::EPSILON,
            "Gain {:?} should report ±{} Ga",
            gain,
            gauss
        );
        assert_eq!(interface.get_register(CONFIG_B), gain.index() << 5);
    }
}

#[test]
fn test_gain_index_round_trip() {
    let (mut driver, _interface) = create_mock_driver();

    for index in 0..8 {
        driver.set_gain_index(index).unwrap();
        assert_eq!(driver.gain(), Gain::ALL[index as usize]);
    }
}

#[test]
fn test_invalid_gain_index_selects_1ga() {
    let (mut driver, interface) = create_mock_driver();

    for index in [-1, 8, 255, i32::MIN] {
        driver.set_gain(Gain::Ga6_5).unwrap();
        interface.clear_operations();

        driver.set_gain_index(index).unwrap();

        assert_eq!(driver.gain(), Gain::Ga1_0, "index {}", index);
        assert_eq!(interface.writes(), vec![(CONFIG_B, 0x20)]);
    }
}

#[test]
fn test_mode_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    for (index, mode) in [
        MagMode::Continuous,
        MagMode::Single,
        MagMode::Idle,
        MagMode::Sleep,
    ]
    .into_iter()
    .enumerate()
    {
        driver.set_mode(mode).unwrap();
        assert_eq!(driver.mode(), mode);
        assert_eq!(interface.get_register(MODE), index as u8);
    }
}

#[test]
fn test_invalid_mode_selects_idle() {
    let (mut driver, interface) = create_mock_driver();

    for index in [-1, 4, 100] {
        driver.set_mode(MagMode::Continuous).unwrap();
        interface.clear_operations();

        driver.set_mode_index(index).unwrap();

        assert_eq!(driver.mode(), MagMode::Idle, "index {}", index);
        assert_eq!(interface.writes(), vec![(MODE, 0x02)]);
    }
}

#[test]
fn test_valid_mode_index_is_kept() {
    let (mut driver, _interface) = create_mock_driver();

    driver.set_mode_index(3).unwrap();
    assert_eq!(driver.mode(), MagMode::Sleep);

    driver.set_mode_index(1).unwrap();
    assert_eq!(driver.mode(), MagMode::Single);
}

#[test]
fn test_getters_do_not_touch_bus() {
    let (mut driver, interface) = create_mock_driver();
    driver.set_mode(MagMode::Single).unwrap();
    interface.clear_operations();

    let _ = driver.mode();
    let _ = driver.sampling_rate_hz();
    let _ = driver.gain_gauss();
    let _ = driver.calibration();

    assert!(interface.operations().is_empty());
}

#[test]
fn test_each_setter_issues_one_write() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_data_rate(DataRate::Hz20).unwrap();
    driver.set_gain(Gain::Ga3_2).unwrap();
    driver.set_mode(MagMode::Single).unwrap();

    assert_eq!(
        interface.writes(),
        vec![(CONFIG_A, 5 << 2), (CONFIG_B, 4 << 5), (MODE, 1)]
    );
}
