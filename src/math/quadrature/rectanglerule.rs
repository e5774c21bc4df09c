use super::quadratureerror::QuadratureResult;
use super::quadraturerule::QuadratureRule;
use super::sampleset::SampleSet;

/// 矩形高度取自子區間的哪一端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectangleHeight {
    Left,
    /// 以兩端點函數值的平均近似中點值，只在取樣密集（近線性）時成立
    Middle,
    Right,
}

pub struct RectangleRule {
    height: RectangleHeight,
}

impl RectangleRule {
    pub fn new(height: RectangleHeight) -> RectangleRule {
        RectangleRule { height }
    }

    pub fn left() -> RectangleRule {
        Self::new(RectangleHeight::Left)
    }

    pub fn middle() -> RectangleRule {
        Self::new(RectangleHeight::Middle)
    }

    pub fn right() -> RectangleRule {
        Self::new(RectangleHeight::Right)
    }

    pub fn height(&self) -> RectangleHeight {
        self.height
    }

    /// 任何合法的 `SampleSet` 都至少有一個子區間，因此不會失敗
    pub fn compute(&self, samples: &SampleSet) -> f64 {
        (0..samples.subintervals())
            .map(|i| {
                let height = match self.height {
                    RectangleHeight::Left => samples.value(i),
                    RectangleHeight::Middle => (samples.value(i) + samples.value(i + 1)) / 2.0,
                    RectangleHeight::Right => samples.value(i + 1),
                };
                height * samples.width(i)
            })
            .sum()
    }
}

impl QuadratureRule for RectangleRule {
    fn name(&self) -> &'static str {
        match self.height {
            RectangleHeight::Left => "left rectangle",
            RectangleHeight::Middle => "mid rectangle",
            RectangleHeight::Right => "right rectangle",
        }
    }

    fn integrate(&self, samples: &SampleSet) -> QuadratureResult<f64> {
        Ok(self.compute(samples))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn squares() -> SampleSet {
        SampleSet::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 1.0, 4.0, 9.0, 16.0]).unwrap()
    }

    #[test]
    fn test_left_and_right_on_squares() {
        let samples = squares();
        assert_relative_eq!(RectangleRule::left().compute(&samples), 14.0);
        assert_relative_eq!(RectangleRule::right().compute(&samples), 30.0);
    }

    #[test]
    fn test_middle_uses_endpoint_mean() {
        let samples = squares();
        // 0.5 + 2.5 + 6.5 + 12.5
        assert_relative_eq!(RectangleRule::middle().compute(&samples), 22.0);
    }

    #[test]
    fn test_uneven_widths() {
        let samples = SampleSet::new(vec![0.0, 0.5, 2.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(RectangleRule::left().compute(&samples), 0.5 + 3.0);
        assert_relative_eq!(RectangleRule::right().compute(&samples), 1.0 + 4.5);
        assert_relative_eq!(RectangleRule::middle().compute(&samples), 0.75 + 3.75);
    }

    #[test]
    fn test_trait_names() {
        assert_eq!(RectangleRule::left().name(), "left rectangle");
        assert_eq!(RectangleRule::middle().name(), "mid rectangle");
        assert_eq!(RectangleRule::right().name(), "right rectangle");
        assert_eq!(RectangleRule::right().integrate(&squares()), Ok(30.0));
    }
}
