//! Antoine 방정식 기반 상대습도/응축수 계산.
//!
//! 단일 물질의 포화 수증기압을 Antoine 식으로 근사하며, 혼합 기체의
//! 비이상성, 열 과정, 염분, 공간 구배 등은 고려하지 않는다.

use crate::rounding::round_to;

/// 물(1기압 기준) Antoine 계수. 다른 물질의 계수는 [`crate::substance_db`] 참조.
pub const WATER_A: f64 = 8.07131;
pub const WATER_B: f64 = 1730.63;
pub const WATER_C: f64 = 233.426;

/// 결과 반올림 자릿수 기본값.
pub const DEFAULT_PRECISION: i32 = 2;

/// 습도 계산 시 발생 가능한 오류.
#[derive(Debug)]
pub enum HumidityError {
    /// 상대습도가 0~100% 범위를 벗어남
    RelativeHumidityOutOfRange(f64),
    /// 반올림 자릿수가 음수
    NegativePrecision(i32),
}

impl std::fmt::Display for HumidityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HumidityError::RelativeHumidityOutOfRange(v) => {
                write!(f, "상대습도는 0~100% 범위여야 합니다: {v}")
            }
            HumidityError::NegativePrecision(p) => {
                write!(f, "반올림 자릿수는 음수일 수 없습니다: {p}")
            }
        }
    }
}

impl std::error::Error for HumidityError {}

/// 온도 변화 후 상대습도 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidityShiftResult {
    /// 새 상대습도 [%] (클램프 후 0~100)
    pub new_relative_humidity_pct: f64,
    /// 응축수량 추정치 [ml(=cm³)] (응축이 없으면 0)
    pub condensed_water_volume_ml: f64,
}

/// 한 물질의 Antoine 계수(log10, mmHg, °C 기준)를 고정 파라미터로 담는 모델.
///
/// 생성 후 계수는 변경할 수 없으므로 여러 스레드에서 동기화 없이 공유해도 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidityModel {
    a: f64,
    b: f64,
    c: f64,
}

impl Default for HumidityModel {
    /// 물(1기압) 계수로 초기화한다.
    fn default() -> Self {
        Self {
            a: WATER_A,
            b: WATER_B,
            c: WATER_C,
        }
    }
}

impl HumidityModel {
    /// 계수를 선택적으로 재정의하여 모델을 생성한다.
    ///
    /// `None`인 계수는 물(1기압) 기본값을 유지한다. 계수 값 자체는 검증하지
    /// 않는다(신뢰된 물질 상수 전제).
    pub fn new(a: Option<f64>, b: Option<f64>, c: Option<f64>) -> Self {
        let default = Self::default();
        Self {
            a: a.unwrap_or(default.a),
            b: b.unwrap_or(default.b),
            c: c.unwrap_or(default.c),
        }
    }

    /// 세 계수를 모두 명시하여 모델을 생성한다.
    pub const fn from_coefficients(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// (A, B, C) 계수를 반환한다.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Antoine 식으로 포화 수증기압[mmHg]을 계산한다.
    ///
    /// `temperature_c == -C`에서는 분모가 0이 되는 특이점이 존재하며,
    /// 별도로 막지 않는다. 비유한 값이 그대로 하류 계산에 전파된다.
    pub(crate) fn saturation_pressure_mmhg(&self, temperature_c: f64) -> f64 {
        10f64.powf(self.a - self.b / (self.c + temperature_c))
    }

    /// 온도 변화 후의 새 상대습도와 응축수량을 계산한다.
    ///
    /// 새 상대습도가 100%를 넘으면 초과분 수증기가 응축된 것으로 보고
    /// 습도를 100%로 클램프하며, 응축수량은 전 자릿수로 계산한 뒤
    /// 마지막에 `precision` 자리로 반올림한다.
    ///
    /// 온도 자체는 범위를 검증하지 않는다. 물리적으로 불가능한 입력은
    /// 비유한 값을 포함한 불합리한 결과로 이어질 뿐 오류가 되지 않는다.
    pub fn calculate(
        &self,
        initial_temperature_c: f64,
        relative_humidity_pct: f64,
        new_temperature_c: f64,
        precision: i32,
    ) -> Result<HumidityShiftResult, HumidityError> {
        if !(0.0..=100.0).contains(&relative_humidity_pct) {
            return Err(HumidityError::RelativeHumidityOutOfRange(
                relative_humidity_pct,
            ));
        }
        if precision < 0 {
            return Err(HumidityError::NegativePrecision(precision));
        }

        let initial_saturation = self.saturation_pressure_mmhg(initial_temperature_c);
        // 수증기 분압
        let partial_pressure = initial_saturation * relative_humidity_pct / 100.0;
        let new_saturation = self.saturation_pressure_mmhg(new_temperature_c);

        let mut new_relative_humidity = partial_pressure / new_saturation * 100.0;

        let mut condensed_volume = 0.0;
        if new_relative_humidity > 100.0 {
            // 새 온도에서 다 담지 못하는 수증기가 응축된다
            condensed_volume = self.condensation_raw(
                initial_temperature_c,
                relative_humidity_pct,
                new_temperature_c,
            );
            new_relative_humidity = 100.0;
        }

        Ok(HumidityShiftResult {
            new_relative_humidity_pct: round_to(new_relative_humidity, precision),
            condensed_water_volume_ml: round_to(condensed_volume, precision),
        })
    }

    /// 응축수량[ml]을 단독으로 계산한다.
    ///
    /// 새 상대습도가 100%를 넘는다는 전제를 검증하지 않으며, 전제가
    /// 성립하지 않으면 음수가 나올 수 있다. 개략 추정 용도 이상으로
    /// 쓰지 말 것.
    pub fn calculate_condensation(
        &self,
        initial_temperature_c: f64,
        relative_humidity_pct: f64,
        new_temperature_c: f64,
        precision: i32,
    ) -> f64 {
        round_to(
            self.condensation_raw(initial_temperature_c, relative_humidity_pct, new_temperature_c),
            precision,
        )
    }

    fn condensation_raw(
        &self,
        initial_temperature_c: f64,
        relative_humidity_pct: f64,
        new_temperature_c: f64,
    ) -> f64 {
        let initial_saturation = self.saturation_pressure_mmhg(initial_temperature_c);
        let new_saturation = self.saturation_pressure_mmhg(new_temperature_c);

        // 냉각 전 수증기량과 새 온도의 최대 수증기압 차이가 응축수량이 된다
        let initial_vapor_volume = initial_saturation * relative_humidity_pct / 100.0;
        initial_vapor_volume - new_saturation
    }
}
