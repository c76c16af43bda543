//! 습공기 관련 계산 모듈 모음.

pub mod antoine;
pub mod saturation_table;

pub use antoine::{HumidityError, HumidityModel, HumidityShiftResult, DEFAULT_PRECISION};
