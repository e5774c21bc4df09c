use std::io::Read;
use std::str::SplitWhitespace;

use tracing::debug;

use crate::math::quadrature::sampleset::SampleSet;

use super::inputerror::InputError;

// ─────────────────────────────────────────────────────────────────────────────
// SampleReader
// ─────────────────────────────────────────────────────────────────────────────
//
// 輸入格式（以空白分隔，換行位置不影響）：
//   N
//   x[0] ... x[N-1]      全部橫座標
//   f[0] ... f[N-1]      全部函數值（不是 (x, f) 成對輸入）
//
// 任何無法解析或不足的數值都立即回傳錯誤。

const MAX_PREALLOCATED_VALUES: usize = 1024;

pub struct SampleReader;

impl SampleReader {
    pub fn new() -> SampleReader {
        SampleReader {}
    }

    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<SampleSet, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse(&text)
    }

    pub fn parse(&self, text: &str) -> Result<SampleSet, InputError> {
        let mut tokens = text.split_whitespace();

        let count_token = tokens.next().ok_or(InputError::UnexpectedEnd {
            expected: "point count",
            count: 1,
            read: 0,
        })?;
        let count: usize = count_token
            .parse()
            .map_err(|_| InputError::invalid_token("a non-negative point count", count_token))?;

        let abscissas = Self::read_values(&mut tokens, count, "abscissa")?;
        let values = Self::read_values(&mut tokens, count, "function value")?;
        debug!(points = count, "samples read");

        Ok(SampleSet::new(abscissas, values)?)
    }

    fn read_values(
        tokens: &mut SplitWhitespace<'_>,
        count: usize,
        expected: &'static str,
    ) -> Result<Vec<f64>, InputError> {
        // count 來自未經驗證的輸入，預先配置量設上限
        let mut values = Vec::with_capacity(count.min(MAX_PREALLOCATED_VALUES));
        for read in 0..count {
            let token = tokens
                .next()
                .ok_or(InputError::UnexpectedEnd { expected, count, read })?;
            let value: f64 = token
                .parse()
                .map_err(|_| InputError::invalid_token(expected, token))?;
            // f64::from_str 接受 nan / inf / infinity，數值串流則視為讀取失敗
            if !value.is_finite() {
                return Err(InputError::invalid_token(expected, token));
            }
            values.push(value);
        }
        Ok(values)
    }
}
