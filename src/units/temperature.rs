use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
    Rankine,
}

/// 주어진 값을 섭씨로 변환한다. Antoine 식의 입력 기준은 섭씨다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Rankine => (value - 491.67) * 5.0 / 9.0,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Rankine => value_c * 9.0 / 5.0 + 491.67,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let c = to_celsius(value, from);
    from_celsius(c, to)
}
