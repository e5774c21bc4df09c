use nalgebra::{
    DMatrix,
    DVector
};

use super::quadratureerror::{
    MAX_NEWTON_COTES_DEGREE,
    QuadratureError,
    QuadratureResult
};
use super::quadraturerule::QuadratureRule;
use super::sampleset::SampleSet;

// ─────────────────────────────────────────────────────────────────────────────
// ThreeEighthsRule
// ─────────────────────────────────────────────────────────────────────────────
//
//   Σ (f[i] + 3·f[i+1] + 3·f[i+2] + f[i+3]) · (x[i+3] - x[i]) / 8,   i = 0, 3, 6, ...
//
// n 必須為 3 的倍數，否則回傳錯誤而不是 0。

const THREE_EIGHTHS_COEFFICIENTS: [f64; 4] = [1.0, 3.0, 3.0, 1.0];

pub struct ThreeEighthsRule;

impl ThreeEighthsRule {
    pub fn new() -> ThreeEighthsRule {
        ThreeEighthsRule {}
    }
}

impl QuadratureRule for ThreeEighthsRule {
    fn name(&self) -> &'static str {
        "Newton-Cotes 3/8"
    }

    fn integrate(&self, samples: &SampleSet) -> QuadratureResult<f64> {
        let n = samples.subintervals();
        if n % 3 != 0 {
            return Err(QuadratureError::subinterval_count(self.name(), 3, n));
        }

        Ok(samples.grouped_sum(&THREE_EIGHTHS_COEFFICIENTS, 8.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ClosedNewtonCotesRule
// ─────────────────────────────────────────────────────────────────────────────
//
// 任意階（1..=8）的閉型 Newton-Cotes 公式。
//
// 在節點 t = 0, 1, ..., d 上解 Vandermonde 動差方程組：
//
//   Σ_j w_j · j^k = d^(k+1) / (k+1),   k = 0..=d
//
// 再除以 d，得到以「整組寬度」為單位的權重：
//   d = 1 → (1, 1)/2          梯形
//   d = 2 → (1, 4, 1)/6       Simpson
//   d = 3 → (1, 3, 3, 1)/8    3/8

pub struct ClosedNewtonCotesRule {
    degree: usize,
    /// 以整組寬度正規化後的權重，長度 degree + 1
    weights: Vec<f64>,
}

impl ClosedNewtonCotesRule {
    pub fn new(degree: usize) -> QuadratureResult<ClosedNewtonCotesRule> {
        if degree == 0 || degree > MAX_NEWTON_COTES_DEGREE {
            return Err(QuadratureError::unsupported_degree(degree));
        }
        let weights = Self::compute_weights(degree)?;
        Ok(ClosedNewtonCotesRule { degree, weights })
    }

    fn compute_weights(degree: usize) -> QuadratureResult<Vec<f64>> {
        let size = degree + 1;
        let span = degree as f64;
        let vandermonde = DMatrix::<f64>::from_fn(size, size, |k, j| (j as f64).powi(k as i32));
        let moments = DVector::<f64>::from_fn(size, |k, _| span.powi(k as i32 + 1) / (k as f64 + 1.0));

        let solution = vandermonde
            .lu()
            .solve(&moments)
            .ok_or(QuadratureError::SingularWeightSystem(degree))?;
        Ok(solution.iter().map(|w| w / span).collect())
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl QuadratureRule for ClosedNewtonCotesRule {
    fn name(&self) -> &'static str {
        match self.degree {
            1 => "Newton-Cotes degree 1",
            2 => "Newton-Cotes degree 2",
            3 => "Newton-Cotes degree 3",
            4 => "Newton-Cotes degree 4",
            5 => "Newton-Cotes degree 5",
            6 => "Newton-Cotes degree 6",
            7 => "Newton-Cotes degree 7",
            8 => "Newton-Cotes degree 8",
            _ => "Newton-Cotes",
        }
    }

    fn integrate(&self, samples: &SampleSet) -> QuadratureResult<f64> {
        let n = samples.subintervals();
        if n % self.degree != 0 {
            return Err(QuadratureError::subinterval_count(self.name(), self.degree, n));
        }
        Ok(samples.grouped_sum(&self.weights, 1.0))
    }
}
