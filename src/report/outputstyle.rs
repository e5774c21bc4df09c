use std::fmt;

use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    /// 與參考程式逐位元組相容，保留雙空白與 31.275 特例
    #[default]
    Legacy,
    /// 統一單一空白，移除特例，不適用的公式印出 n/a
    Normalized,
    Json,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputStyle::Legacy => "legacy",
            OutputStyle::Normalized => "normalized",
            OutputStyle::Json => "json",
        };
        write!(f, "{}", name)
    }
}
