use super::quadratureerror::QuadratureResult;
use super::quadraturerule::QuadratureRule;
use super::sampleset::SampleSet;

/// 梯形公式，對分段線性資料為精確解
pub struct TrapezoidalRule;

impl TrapezoidalRule {
    pub fn new() -> TrapezoidalRule {
        TrapezoidalRule {}
    }

    pub fn compute(&self, samples: &SampleSet) -> f64 {
        (0..samples.subintervals())
            .map(|i| (samples.value(i) + samples.value(i + 1)) * samples.width(i) / 2.0)
            .sum()
    }
}

impl QuadratureRule for TrapezoidalRule {
    fn name(&self) -> &'static str {
        "trapezoidal"
    }

    fn integrate(&self, samples: &SampleSet) -> QuadratureResult<f64> {
        Ok(self.compute(samples))
    }
}
