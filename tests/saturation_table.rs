//! 포화 곡선 표 생성 테스트.
use antoine_humidity_toolbox::air::saturation_table::{
    saturation_table, SaturationTableError, SaturationTableInput,
};
use antoine_humidity_toolbox::air::HumidityModel;
use antoine_humidity_toolbox::units::{PressureUnit, TemperatureUnit};

#[test]
fn water_curve_reaches_one_atmosphere_at_boiling_point() {
    let model = HumidityModel::default();
    let rows = saturation_table(
        &model,
        &SaturationTableInput {
            start_temp: 0.0,
            end_temp: 100.0,
            steps: 10,
            temperature_unit: TemperatureUnit::Celsius,
            pressure_unit: PressureUnit::MmHg,
        },
    )
    .unwrap();

    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0].temperature, 0.0);
    assert_eq!(rows[10].temperature, 100.0);
    // 100°C에서 약 760 mmHg
    assert!(
        (rows[10].saturation_pressure - 760.0).abs() < 1.0,
        "got {}",
        rows[10].saturation_pressure
    );
}

#[test]
fn curve_is_monotonically_increasing() {
    let model = HumidityModel::default();
    let rows = saturation_table(
        &model,
        &SaturationTableInput {
            start_temp: -20.0,
            end_temp: 60.0,
            steps: 40,
            temperature_unit: TemperatureUnit::Celsius,
            pressure_unit: PressureUnit::MmHg,
        },
    )
    .unwrap();
    for pair in rows.windows(2) {
        assert!(pair[1].saturation_pressure > pair[0].saturation_pressure);
    }
}

#[test]
fn pressure_unit_conversion_applies_to_rows() {
    let model = HumidityModel::default();
    let rows = saturation_table(
        &model,
        &SaturationTableInput {
            start_temp: 100.0,
            end_temp: 100.0,
            steps: 1,
            temperature_unit: TemperatureUnit::Celsius,
            pressure_unit: PressureUnit::KiloPascal,
        },
    )
    .unwrap();
    // 1 atm ≈ 101.325 kPa
    assert!(
        (rows[0].saturation_pressure - 101.3).abs() < 0.3,
        "got {} kPa",
        rows[0].saturation_pressure
    );
}

#[test]
fn fahrenheit_input_is_converted_before_evaluation() {
    let model = HumidityModel::default();
    let rows = saturation_table(
        &model,
        &SaturationTableInput {
            start_temp: 32.0,
            end_temp: 212.0,
            steps: 2,
            temperature_unit: TemperatureUnit::Fahrenheit,
            pressure_unit: PressureUnit::MmHg,
        },
    )
    .unwrap();
    // 212°F = 100°C → 약 760 mmHg, 온도 열은 입력 단위 그대로
    assert_eq!(rows[2].temperature, 212.0);
    assert!((rows[2].saturation_pressure - 760.0).abs() < 1.0);
}

#[test]
fn invalid_ranges_are_rejected() {
    let model = HumidityModel::default();
    let mut input = SaturationTableInput {
        start_temp: 0.0,
        end_temp: 100.0,
        steps: 0,
        temperature_unit: TemperatureUnit::Celsius,
        pressure_unit: PressureUnit::MmHg,
    };
    assert!(matches!(
        saturation_table(&model, &input),
        Err(SaturationTableError::ZeroSteps)
    ));

    input.steps = 10;
    input.end_temp = -10.0;
    assert!(matches!(
        saturation_table(&model, &input),
        Err(SaturationTableError::ReversedRange)
    ));
}
