//! 포화 수증기압 곡선을 표 형태로 샘플링한다.

use crate::air::antoine::HumidityModel;
use crate::units::{from_mmhg, to_celsius, PressureUnit, TemperatureUnit};

/// 포화 곡선 표 생성 입력.
#[derive(Debug, Clone)]
pub struct SaturationTableInput {
    /// 시작 온도 (temperature_unit 기준)
    pub start_temp: f64,
    /// 끝 온도 (temperature_unit 기준)
    pub end_temp: f64,
    /// 구간 수. 표 행 수는 steps + 1이 된다.
    pub steps: usize,
    /// 입력/출력 온도 단위
    pub temperature_unit: TemperatureUnit,
    /// 출력 압력 단위
    pub pressure_unit: PressureUnit,
}

/// 포화 곡선 표의 한 행.
#[derive(Debug, Clone, Copy)]
pub struct SaturationPoint {
    /// 온도 (요청한 단위 기준)
    pub temperature: f64,
    /// 포화 수증기압 (요청한 단위 기준)
    pub saturation_pressure: f64,
}

/// 표 생성 시 발생 가능한 오류.
#[derive(Debug)]
pub enum SaturationTableError {
    /// 구간 수가 0
    ZeroSteps,
    /// 끝 온도가 시작 온도보다 작음
    ReversedRange,
}

impl std::fmt::Display for SaturationTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaturationTableError::ZeroSteps => write!(f, "구간 수는 1 이상이어야 합니다"),
            SaturationTableError::ReversedRange => {
                write!(f, "끝 온도는 시작 온도보다 크거나 같아야 합니다")
            }
        }
    }
}

impl std::error::Error for SaturationTableError {}

/// 주어진 온도 범위에서 Antoine 포화 곡선을 균등 샘플링한다.
///
/// 온도는 섭씨로 환산해 평가하며, 특이점(`-C`)이 범위에 들어 있으면
/// 해당 행에 비유한 값이 그대로 실린다.
pub fn saturation_table(
    model: &HumidityModel,
    input: &SaturationTableInput,
) -> Result<Vec<SaturationPoint>, SaturationTableError> {
    if input.steps == 0 {
        return Err(SaturationTableError::ZeroSteps);
    }
    if input.end_temp < input.start_temp {
        return Err(SaturationTableError::ReversedRange);
    }

    let span = input.end_temp - input.start_temp;
    let mut rows = Vec::with_capacity(input.steps + 1);
    for i in 0..=input.steps {
        let temperature = input.start_temp + span * (i as f64) / (input.steps as f64);
        let temp_c = to_celsius(temperature, input.temperature_unit);
        let pressure_mmhg = model.saturation_pressure_mmhg(temp_c);
        rows.push(SaturationPoint {
            temperature,
            saturation_pressure: from_mmhg(pressure_mmhg, input.pressure_unit),
        });
    }
    Ok(rows)
}
