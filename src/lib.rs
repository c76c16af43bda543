//! Antoine 방정식 기반 습도/응축 계산 로직을 라이브러리로 제공한다.
//! CLI나 GUI 없이 호스트 애플리케이션(HVAC, 기상, 온실 제어 등)에 직접 내장한다.

pub mod air;
pub mod rounding;
pub mod substance_db;
pub mod units;
