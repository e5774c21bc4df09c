use tracing::{
    debug,
    warn
};

use super::newtoncotesrule::{
    ClosedNewtonCotesRule,
    ThreeEighthsRule
};
use super::quadratureerror::QuadratureResult;
use super::quadraturerule::QuadratureRule;
use super::rectanglerule::RectangleRule;
use super::sampleset::SampleSet;
use super::simpsonrule::SimpsonRule;
use super::trapezoidalrule::TrapezoidalRule;

/// 對一組固定取樣點套用各種求積公式。
///
/// 所有方法皆為純函數，可任意順序、重複呼叫。
pub struct QuadratureEngine {
    samples: SampleSet,
}

impl QuadratureEngine {
    pub fn new(samples: SampleSet) -> QuadratureEngine {
        QuadratureEngine { samples }
    }

    pub fn from_vecs(abscissas: Vec<f64>, values: Vec<f64>) -> QuadratureResult<QuadratureEngine> {
        Ok(Self::new(SampleSet::new(abscissas, values)?))
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn integrate(&self, rule: &dyn QuadratureRule) -> QuadratureResult<f64> {
        let result = rule.integrate(&self.samples);
        match &result {
            Ok(value) => debug!(
                rule = rule.name(),
                subintervals = self.samples.subintervals(),
                value = *value,
                "quadrature rule evaluated"
            ),
            Err(error) => warn!(rule = rule.name(), %error, "quadrature rule not applicable"),
        }
        result
    }

    pub fn left_rectangle(&self) -> f64 {
        self.infallible(&RectangleRule::left())
    }

    pub fn mid_rectangle(&self) -> f64 {
        self.infallible(&RectangleRule::middle())
    }

    pub fn right_rectangle(&self) -> f64 {
        self.infallible(&RectangleRule::right())
    }

    pub fn trapezoidal(&self) -> f64 {
        let rule = TrapezoidalRule::new();
        let value = rule.compute(&self.samples);
        debug!(rule = rule.name(), value, "quadrature rule evaluated");
        value
    }

    /// n 為奇數時回傳錯誤
    pub fn simpson(&self) -> QuadratureResult<f64> {
        self.integrate(&SimpsonRule::new())
    }

    /// n 不是 3 的倍數時回傳錯誤
    pub fn newton_cotes_38(&self) -> QuadratureResult<f64> {
        self.integrate(&ThreeEighthsRule::new())
    }

    pub fn newton_cotes(&self, degree: usize) -> QuadratureResult<f64> {
        let rule = ClosedNewtonCotesRule::new(degree)?;
        self.integrate(&rule)
    }

    fn infallible(&self, rule: &RectangleRule) -> f64 {
        let value = rule.compute(&self.samples);
        debug!(rule = rule.name(), value, "quadrature rule evaluated");
        value
    }
}
