use super::quadratureerror::QuadratureResult;
use super::sampleset::SampleSet;

/// 由表格化取樣點求定積分的公式。
///
/// 實作必須是純函數：不修改 `SampleSet`，同樣的輸入永遠得到同樣的結果。
pub trait QuadratureRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn integrate(&self, samples: &SampleSet) -> QuadratureResult<f64>;
}
