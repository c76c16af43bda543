use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 mmHg(절대압)이다.
///
/// Antoine 식 출력이 mmHg이므로 mmHg를 기준으로 삼는다. 수증기 분압은
/// 항상 절대압으로 다루며, 게이지압 개념은 이 크레이트에 존재하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    MmHg,
    Pascal,
    KiloPascal,
    Bar,
    Atm,
    Psi,
}

const MMHG_PER_KPA: f64 = 7.50062;
const MMHG_PER_BAR: f64 = 750.062;
const MMHG_PER_ATM: f64 = 760.0;
const MMHG_PER_PSI: f64 = 51.7149;

/// 주어진 압력을 mmHg로 변환한다.
pub fn to_mmhg(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MmHg => value,
        PressureUnit::Pascal => value / 1000.0 * MMHG_PER_KPA,
        PressureUnit::KiloPascal => value * MMHG_PER_KPA,
        PressureUnit::Bar => value * MMHG_PER_BAR,
        PressureUnit::Atm => value * MMHG_PER_ATM,
        PressureUnit::Psi => value * MMHG_PER_PSI,
    }
}

/// mmHg 값을 원하는 단위로 변환한다.
pub fn from_mmhg(value_mmhg: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MmHg => value_mmhg,
        PressureUnit::Pascal => value_mmhg / MMHG_PER_KPA * 1000.0,
        PressureUnit::KiloPascal => value_mmhg / MMHG_PER_KPA,
        PressureUnit::Bar => value_mmhg / MMHG_PER_BAR,
        PressureUnit::Atm => value_mmhg / MMHG_PER_ATM,
        PressureUnit::Psi => value_mmhg / MMHG_PER_PSI,
    }
}

/// 압력을 서로 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let mmhg = to_mmhg(value, from);
    from_mmhg(mmhg, to)
}
