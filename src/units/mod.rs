//! 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod temperature;

pub use pressure::{convert_pressure, from_mmhg, to_mmhg, PressureUnit};
pub use temperature::{convert_temperature, from_celsius, to_celsius, TemperatureUnit};
