//! Antoine 계수 테이블(log10, mmHg, °C 기준)과 TOML 테이블 로딩을 제공한다.
//! 수록 값은 공개 핸드북 수치이며 참고용이다. 정밀 용도라면 출처를 재확인할 것.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::air::antoine::HumidityModel;

/// 내장 테이블의 물질 한 건.
#[derive(Debug)]
pub struct SubstanceData {
    pub code: &'static str,
    pub name: &'static str,
    /// Antoine 계수 A
    pub a: f64,
    /// Antoine 계수 B
    pub b: f64,
    /// Antoine 계수 C
    pub c: f64,
    /// 계수 유효 온도 하한 [°C]
    pub min_temp_c: f64,
    /// 계수 유효 온도 상한 [°C]
    pub max_temp_c: f64,
}

impl SubstanceData {
    /// 이 물질의 계수로 습도 모델을 만든다.
    pub fn model(&self) -> HumidityModel {
        HumidityModel::from_coefficients(self.a, self.b, self.c)
    }

    /// 온도가 계수 유효 범위 안인지 확인한다.
    ///
    /// 범위 밖 온도도 계산 자체는 허용되므로, 호출 측에서 경고 용도로만 쓴다.
    pub fn in_valid_range(&self, temp_c: f64) -> bool {
        (self.min_temp_c..=self.max_temp_c).contains(&temp_c)
    }
}

pub fn substances() -> &'static [SubstanceData] {
    SUBSTANCES
}

/// 코드 또는 이름으로 물질을 찾는다. 대소문자는 구분하지 않는다.
pub fn find_substance(code: &str) -> Option<&'static SubstanceData> {
    SUBSTANCES
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(code) || s.name.eq_ignore_ascii_case(code))
}

const SUBSTANCES: &[SubstanceData] = &[
    SubstanceData {
        code: "water",
        name: "Water",
        a: 8.07131,
        b: 1730.63,
        c: 233.426,
        min_temp_c: 1.0,
        max_temp_c: 100.0,
    },
    SubstanceData {
        code: "ethanol",
        name: "Ethanol",
        a: 8.20417,
        b: 1642.89,
        c: 230.3,
        min_temp_c: -57.0,
        max_temp_c: 80.0,
    },
    SubstanceData {
        code: "methanol",
        name: "Methanol",
        a: 7.89750,
        b: 1474.08,
        c: 229.13,
        min_temp_c: -14.0,
        max_temp_c: 65.0,
    },
    SubstanceData {
        code: "acetone",
        name: "Acetone",
        a: 7.11714,
        b: 1210.595,
        c: 229.664,
        min_temp_c: -13.0,
        max_temp_c: 55.0,
    },
    SubstanceData {
        code: "benzene",
        name: "Benzene",
        a: 6.90565,
        b: 1211.033,
        c: 220.79,
        min_temp_c: 8.0,
        max_temp_c: 103.0,
    },
    SubstanceData {
        code: "toluene",
        name: "Toluene",
        a: 6.95464,
        b: 1344.8,
        c: 219.48,
        min_temp_c: 6.0,
        max_temp_c: 137.0,
    },
    SubstanceData {
        code: "isopropanol",
        name: "Isopropanol",
        a: 8.11778,
        b: 1580.92,
        c: 219.61,
        min_temp_c: -26.0,
        max_temp_c: 83.0,
    },
];

/// TOML 테이블에서 읽어 들이는 사용자 정의 물질 레코드.
#[derive(Debug, Clone, Deserialize)]
pub struct Substance {
    pub code: String,
    pub name: String,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// 계수 유효 온도 하한 [°C] - 선택
    #[serde(default)]
    pub min_temp_c: Option<f64>,
    /// 계수 유효 온도 상한 [°C] - 선택
    #[serde(default)]
    pub max_temp_c: Option<f64>,
}

impl Substance {
    /// 이 물질의 계수로 습도 모델을 만든다.
    pub fn model(&self) -> HumidityModel {
        HumidityModel::from_coefficients(self.a, self.b, self.c)
    }
}

#[derive(Debug, Deserialize)]
struct SubstanceFile {
    #[serde(default)]
    substance: Vec<Substance>,
}

/// 물질 테이블 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum SubstanceTableError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for SubstanceTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubstanceTableError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            SubstanceTableError::Parse(e) => write!(f, "물질 테이블 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for SubstanceTableError {}

impl From<std::io::Error> for SubstanceTableError {
    fn from(value: std::io::Error) -> Self {
        SubstanceTableError::Io(value)
    }
}

impl From<toml::de::Error> for SubstanceTableError {
    fn from(value: toml::de::Error) -> Self {
        SubstanceTableError::Parse(value)
    }
}

/// TOML 문자열에서 물질 테이블을 파싱한다.
///
/// 형식은 `[[substance]]` 테이블 배열이며, 각 항목에 code/name/a/b/c가 필요하다.
pub fn parse_substance_table(content: &str) -> Result<Vec<Substance>, SubstanceTableError> {
    let file: SubstanceFile = toml::from_str(content)?;
    Ok(file.substance)
}

/// TOML 파일에서 물질 테이블을 로드한다.
pub fn load_substance_file(path: &Path) -> Result<Vec<Substance>, SubstanceTableError> {
    let content = fs::read_to_string(path)?;
    parse_substance_table(&content)
}
