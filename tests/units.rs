//! mmHg/섭씨 기준 단위 변환 회귀 테스트.
use antoine_humidity_toolbox::units::{
    convert_pressure, convert_temperature, PressureUnit, TemperatureUnit,
};

#[test]
fn mmhg_to_bar_absolute() {
    // 760 mmHg => 1 atm ≈ 1.01325 bar
    let bar = convert_pressure(760.0, PressureUnit::MmHg, PressureUnit::Bar);
    assert!((bar - 1.01325).abs() < 1e-4);
}

#[test]
fn kpa_to_mmhg() {
    // 101.325 kPa => 760 mmHg
    let mmhg = convert_pressure(101.325, PressureUnit::KiloPascal, PressureUnit::MmHg);
    assert!((mmhg - 760.0).abs() < 0.1, "got {mmhg}");
}

#[test]
fn atm_roundtrip_through_pascal() {
    let pa = convert_pressure(1.0, PressureUnit::Atm, PressureUnit::Pascal);
    assert!((pa - 101_325.0).abs() < 50.0, "got {pa}");
    let atm = convert_pressure(pa, PressureUnit::Pascal, PressureUnit::Atm);
    assert!((atm - 1.0).abs() < 1e-6);
}

#[test]
fn psi_to_mmhg() {
    let mmhg = convert_pressure(14.696, PressureUnit::Psi, PressureUnit::MmHg);
    assert!((mmhg - 760.0).abs() < 0.2, "got {mmhg}");
}

#[test]
fn temperature_reference_points() {
    let c = convert_temperature(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
    assert!((c - 100.0).abs() < 1e-9);

    let k = convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
    assert!((k - 273.15).abs() < 1e-9);

    let c = convert_temperature(491.67, TemperatureUnit::Rankine, TemperatureUnit::Celsius);
    assert!(c.abs() < 1e-9);
}

#[test]
fn minus_forty_is_the_same_in_celsius_and_fahrenheit() {
    let f = convert_temperature(-40.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
    assert!((f + 40.0).abs() < 1e-9);
}
