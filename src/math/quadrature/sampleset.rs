use super::quadratureerror::{
    QuadratureError,
    QuadratureResult
};

// ─────────────────────────────────────────────────────────────────────────────
// SampleSet
// ─────────────────────────────────────────────────────────────────────────────
//
// 表格化的取樣點：x[0..=n] 與 f[0..=n] 一一對應，n 為子區間數。
//
// 建構時只檢查長度（相等且至少 2 點），不檢查 x 是否遞增；
// Simpson / 3/8 對 n 的奇偶要求屬於各公式自己的前置條件。

#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    abscissas: Vec<f64>,
    values: Vec<f64>,
}

impl SampleSet {
    pub fn new(abscissas: Vec<f64>, values: Vec<f64>) -> QuadratureResult<SampleSet> {
        if abscissas.len() != values.len() {
            return Err(QuadratureError::LengthMismatch {
                abscissas: abscissas.len(),
                values: values.len(),
            });
        }
        if abscissas.len() < 2 {
            return Err(QuadratureError::InsufficientPoints(abscissas.len()));
        }
        Ok(SampleSet { abscissas, values })
    }

    pub fn abscissas(&self) -> &[f64] {
        &self.abscissas
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 點數 n + 1
    pub fn len(&self) -> usize {
        self.abscissas.len()
    }

    /// 建構時已保證至少 2 點
    pub fn is_empty(&self) -> bool {
        self.abscissas.is_empty()
    }

    /// 子區間數 n，建構後恆 >= 1
    pub fn subintervals(&self) -> usize {
        self.abscissas.len() - 1
    }

    pub fn lower_bound(&self) -> f64 {
        self.abscissas[0]
    }

    pub fn upper_bound(&self) -> f64 {
        self.abscissas[self.subintervals()]
    }

    /// 整個積分區間寬度 x[n] - x[0]
    pub fn span(&self) -> f64 {
        self.upper_bound() - self.lower_bound()
    }

    /// 第 i 個子區間寬度 x[i+1] - x[i]
    #[inline]
    pub fn width(&self, i: usize) -> f64 {
        self.abscissas[i + 1] - self.abscissas[i]
    }

    #[inline]
    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// 以 group 個子區間為一組做複合求和：
    ///
    ///   Σ (Σ_j c_j·f[i+j]) · (x[i+group] - x[i]) / divisor
    ///
    /// 先乘寬度再除以 divisor，與逐項展開的公式有相同的捨入順序。
    /// 呼叫者須先確認 n 為 group 的倍數。
    pub(crate) fn grouped_sum(&self, coefficients: &[f64], divisor: f64) -> f64 {
        let group = coefficients.len() - 1;
        (0..self.subintervals())
            .step_by(group)
            .map(|i| {
                let weighted: f64 = coefficients
                    .iter()
                    .zip(&self.values[i..=i + group])
                    .map(|(c, f)| c * f)
                    .sum();
                weighted * (self.abscissas[i + group] - self.abscissas[i]) / divisor
            })
            .sum()
    }
}
