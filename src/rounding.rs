//! 결과 반올림 헬퍼.

/// 지정한 소수 자릿수로 반올림한다.
///
/// `f64::round`는 0.5를 0에서 먼 쪽으로 올리므로 스케일, 반올림,
/// 역스케일만으로 충분하다. 비유한 값(∞, NaN)은 그대로 통과한다.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
