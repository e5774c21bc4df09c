use super::quadratureerror::{
    QuadratureError,
    QuadratureResult
};
use super::quadraturerule::QuadratureRule;
use super::sampleset::SampleSet;

// ─────────────────────────────────────────────────────────────────────────────
// SimpsonRule
// ─────────────────────────────────────────────────────────────────────────────
//
// 每兩個子區間以二次多項式擬合：
//
//   Σ (f[i] + 4·f[i+1] + f[i+2]) · (x[i+2] - x[i]) / 6,   i = 0, 2, 4, ...
//
// 每組寬度各自重算，但係數 (1, 4, 1)/6 只有在組內兩個子區間等寬時才精確，
// 這裡不檢查。n 必須為偶數。

const SIMPSON_COEFFICIENTS: [f64; 3] = [1.0, 4.0, 1.0];

pub struct SimpsonRule;

impl SimpsonRule {
    pub fn new() -> SimpsonRule {
        SimpsonRule {}
    }
}

impl QuadratureRule for SimpsonRule {
    fn name(&self) -> &'static str {
        "Simpson"
    }

    fn integrate(&self, samples: &SampleSet) -> QuadratureResult<f64> {
        let n = samples.subintervals();
        if n % 2 != 0 {
            return Err(QuadratureError::subinterval_count(self.name(), 2, n));
        }

        Ok(samples.grouped_sum(&SIMPSON_COEFFICIENTS, 6.0))
    }
}
