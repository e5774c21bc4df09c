use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::math::quadrature::quadratureerror::MAX_NEWTON_COTES_DEGREE;
use crate::report::outputstyle::OutputStyle;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("json parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Newton-Cotes degree {0} is not supported (expected 1..={max})", max = MAX_NEWTON_COTES_DEGREE)]
    InvalidDegree(usize),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    #[serde(default)]
    output_style: OutputStyle,
    #[serde(default)]
    newton_cotes_degrees: Vec<usize>,
}

/// 執行設定；未提供設定檔時使用 `Configuration::new()` 的預設值，
/// 輸出與參考程式完全相同。
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    output_style: OutputStyle,
    newton_cotes_degrees: Vec<usize>,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            output_style: OutputStyle::default(),
            newton_cotes_degrees: Vec::new(),
        }
    }

    pub fn output_style(&self) -> OutputStyle {
        self.output_style
    }

    /// 額外計算的閉型 Newton-Cotes 階數
    pub fn newton_cotes_degrees(&self) -> &[usize] {
        &self.newton_cotes_degrees
    }

    pub fn with_output_style(mut self, output_style: OutputStyle) -> Configuration {
        self.output_style = output_style;
        self
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Self::from_json(BufReader::new(file))
    }

    pub fn from_json<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        if let Some(&degree) = json_prop
            .newton_cotes_degrees
            .iter()
            .find(|&&degree| degree == 0 || degree > MAX_NEWTON_COTES_DEGREE)
        {
            return Err(ConfigurationError::InvalidDegree(degree));
        }
        Ok(Configuration {
            output_style: json_prop.output_style,
            newton_cotes_degrees: json_prop.newton_cotes_degrees,
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
