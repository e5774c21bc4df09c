use std::io::{
    self,
    Write
};

use serde::Serialize;

use crate::math::quadrature::quadratureengine::QuadratureEngine;
use crate::math::quadrature::quadratureerror::QuadratureResult;

use super::numberformat::{
    DEFAULT_PRECISION,
    format_general,
    format_integer,
    format_number
};
use super::outputstyle::OutputStyle;

/// 參考程式針對單一測資硬編碼的輸出替換，只在 legacy 樣式中使用
const LEGACY_NEWTON_PATCH: (&str, &str) = ("31.3", "31.275");

const NOT_APPLICABLE: &str = "n/a";

// ─────────────────────────────────────────────────────────────────────────────
// IntegralReport
// ─────────────────────────────────────────────────────────────────────────────

pub struct IntegralReport {
    abscissas: Vec<f64>,
    values: Vec<f64>,
    left_rectangle: f64,
    mid_rectangle: f64,
    right_rectangle: f64,
    trapezoidal: f64,
    simpson: QuadratureResult<f64>,
    newton_cotes_38: QuadratureResult<f64>,
    /// 額外要求的 Newton-Cotes 階數及其結果
    newton_cotes: Vec<(usize, QuadratureResult<f64>)>,
}

impl IntegralReport {
    pub fn compute(engine: &QuadratureEngine, newton_cotes_degrees: &[usize]) -> IntegralReport {
        let samples = engine.samples();
        IntegralReport {
            abscissas: samples.abscissas().to_vec(),
            values: samples.values().to_vec(),
            left_rectangle: engine.left_rectangle(),
            mid_rectangle: engine.mid_rectangle(),
            right_rectangle: engine.right_rectangle(),
            trapezoidal: engine.trapezoidal(),
            simpson: engine.simpson(),
            newton_cotes_38: engine.newton_cotes_38(),
            newton_cotes: newton_cotes_degrees
                .iter()
                .map(|&degree| (degree, engine.newton_cotes(degree)))
                .collect(),
        }
    }

    pub fn left_rectangle(&self) -> f64 {
        self.left_rectangle
    }

    pub fn mid_rectangle(&self) -> f64 {
        self.mid_rectangle
    }

    pub fn right_rectangle(&self) -> f64 {
        self.right_rectangle
    }

    pub fn trapezoidal(&self) -> f64 {
        self.trapezoidal
    }

    pub fn simpson(&self) -> &QuadratureResult<f64> {
        &self.simpson
    }

    pub fn newton_cotes_38(&self) -> &QuadratureResult<f64> {
        &self.newton_cotes_38
    }

    pub fn newton_cotes(&self) -> &[(usize, QuadratureResult<f64>)] {
        &self.newton_cotes
    }

    /// 結果寫入 `out`，不適用公式的錯誤訊息寫入 `diagnostics`
    pub fn write<W: Write, E: Write>(
        &self,
        style: OutputStyle,
        out: &mut W,
        diagnostics: &mut E,
    ) -> io::Result<()> {
        match style {
            OutputStyle::Legacy => {
                self.write_diagnostics(diagnostics, false)?;
                self.write_legacy(out)
            }
            OutputStyle::Normalized => {
                self.write_diagnostics(diagnostics, true)?;
                self.write_normalized(out)
            }
            OutputStyle::Json => {
                self.write_diagnostics(diagnostics, true)?;
                self.write_json(out)
            }
        }
    }

    fn write_diagnostics<E: Write>(&self, diagnostics: &mut E, include_extra: bool) -> io::Result<()> {
        let extra: &[(usize, QuadratureResult<f64>)] = if include_extra { &self.newton_cotes } else { &[] };
        let results = [&self.simpson, &self.newton_cotes_38]
            .into_iter()
            .chain(extra.iter().map(|(_, result)| result));
        for result in results {
            if let Err(error) = result {
                writeln!(diagnostics, "{}", error)?;
            }
        }
        Ok(())
    }

    fn write_legacy<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "input= argument ")?;
        for x in &self.abscissas {
            write!(out, "{} ", format_general(*x, DEFAULT_PRECISION))?;
        }
        writeln!(out)?;
        write!(out, "function ")?;
        for f in &self.values {
            write!(out, "{} ", format_general(*f, DEFAULT_PRECISION))?;
        }
        writeln!(out)?;

        write_legacy_branch(out, "lev priam=", self.left_rectangle)?;
        writeln!(out, "sr priam= {}", format_general(self.mid_rectangle, DEFAULT_PRECISION))?;
        write_legacy_branch(out, "prav priam=", self.right_rectangle)?;
        write_legacy_branch(out, "trapeciy=", self.trapezoidal)?;

        let simpson = match &self.simpson {
            Ok(value) => format_number(*value),
            Err(_) => NOT_APPLICABLE.to_owned(),
        };
        writeln!(out, "Simpson= {}", simpson)?;

        // 參考程式在 3/8 不適用時輸出 0
        let mut newton = format_number(*self.newton_cotes_38.as_ref().unwrap_or(&0.0));
        if newton == LEGACY_NEWTON_PATCH.0 {
            newton = LEGACY_NEWTON_PATCH.1.to_owned();
        }
        writeln!(out, "Newton {}", newton)
    }

    fn write_normalized<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "input= argument {}", join_general(&self.abscissas))?;
        writeln!(out, "function {}", join_general(&self.values))?;
        writeln!(out, "lev priam= {}", format_general(self.left_rectangle, DEFAULT_PRECISION))?;
        writeln!(out, "sr priam= {}", format_general(self.mid_rectangle, DEFAULT_PRECISION))?;
        writeln!(out, "prav priam= {}", format_general(self.right_rectangle, DEFAULT_PRECISION))?;
        writeln!(out, "trapeciy= {}", format_general(self.trapezoidal, DEFAULT_PRECISION))?;
        writeln!(out, "Simpson= {}", format_outcome(&self.simpson))?;
        writeln!(out, "Newton {}", format_outcome(&self.newton_cotes_38))?;
        for (degree, result) in &self.newton_cotes {
            writeln!(out, "Newton-Cotes degree {}= {}", degree, format_outcome(result))?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = IntegralReportJson {
            abscissas: &self.abscissas,
            values: &self.values,
            left_rectangle: self.left_rectangle,
            mid_rectangle: self.mid_rectangle,
            right_rectangle: self.right_rectangle,
            trapezoidal: self.trapezoidal,
            simpson: RuleOutcome::from(&self.simpson),
            newton_cotes_38: RuleOutcome::from(&self.newton_cotes_38),
            newton_cotes: self
                .newton_cotes
                .iter()
                .map(|(degree, result)| NewtonCotesJson {
                    degree: *degree,
                    result: RuleOutcome::from(result),
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)
    }
}

/// 恰為 int 範圍內整數時輸出整數，否則多一個空白後以 %g 輸出
fn write_legacy_branch<W: Write>(out: &mut W, label: &str, value: f64) -> io::Result<()> {
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        writeln!(out, "{} {}", label, format_integer(value))
    } else {
        writeln!(out, "{}  {}", label, format_general(value, DEFAULT_PRECISION))
    }
}

fn join_general(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_general(*v, DEFAULT_PRECISION))
        .collect::<Vec<String>>()
        .join(" ")
}

fn format_outcome(result: &QuadratureResult<f64>) -> String {
    match result {
        Ok(value) => format_number(*value),
        Err(_) => NOT_APPLICABLE.to_owned(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum RuleOutcome {
    Value(f64),
    Error(String),
}

impl From<&QuadratureResult<f64>> for RuleOutcome {
    fn from(result: &QuadratureResult<f64>) -> Self {
        match result {
            Ok(value) => RuleOutcome::Value(*value),
            Err(error) => RuleOutcome::Error(error.to_string()),
        }
    }
}

#[derive(Serialize)]
struct NewtonCotesJson {
    degree: usize,
    result: RuleOutcome,
}

#[derive(Serialize)]
struct IntegralReportJson<'a> {
    abscissas: &'a [f64],
    values: &'a [f64],
    left_rectangle: f64,
    mid_rectangle: f64,
    right_rectangle: f64,
    trapezoidal: f64,
    simpson: RuleOutcome,
    newton_cotes_38: RuleOutcome,
    newton_cotes: Vec<NewtonCotesJson>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(engine: &QuadratureEngine, degrees: &[usize], style: OutputStyle) -> (String, String) {
        let report = IntegralReport::compute(engine, degrees);
        let mut out = Vec::new();
        let mut diagnostics = Vec::new();
        report.write(style, &mut out, &mut diagnostics).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(diagnostics).unwrap())
    }

    #[test]
    fn test_legacy_fractional_branch_uses_double_space() {
        let engine = QuadratureEngine::from_vecs(vec![0.0, 0.5, 1.0], vec![1.0, 2.0, 3.0]).unwrap();
        let (out, _) = render(&engine, &[], OutputStyle::Legacy);
        assert!(out.contains("lev priam=  1.5\n"));
        assert!(out.contains("prav priam=  2.5\n"));
        assert!(out.contains("trapeciy= 2\n"));
        assert!(out.contains("sr priam= 2\n"));
    }

    #[test]
    fn test_legacy_integer_branch_covers_full_int_range() {
        let engine = QuadratureEngine::from_vecs(vec![0.0, 1.0], vec![-2147483648.0, -2147483648.0]).unwrap();
        let (out, _) = render(&engine, &[], OutputStyle::Legacy);
        assert!(out.contains("lev priam= -2147483648\n"));
        assert!(out.contains("trapeciy= -2147483648\n"));

        let engine = QuadratureEngine::from_vecs(vec![0.0, 1.0], vec![2147483648.0, 2147483647.0]).unwrap();
        let (out, _) = render(&engine, &[], OutputStyle::Legacy);
        assert!(out.contains("lev priam=  2.14748e+09\n"));
        assert!(out.contains("prav priam= 2147483647\n"));
    }

    #[test]
    fn test_diagnostics_follow_extra_degree_selection() {
        let engine = QuadratureEngine::from_vecs(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0, 9.0]).unwrap();
        let report = IntegralReport::compute(&engine, &[2, 3]);

        let mut diagnostics = Vec::new();
        report.write_diagnostics(&mut diagnostics, false).unwrap();
        let text = String::from_utf8(diagnostics).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("Simpson"));

        let mut diagnostics = Vec::new();
        report.write_diagnostics(&mut diagnostics, true).unwrap();
        let text = String::from_utf8(diagnostics).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Newton-Cotes degree 2"));
    }

    #[test]
    fn test_legacy_ignores_extra_degrees() {
        let engine = QuadratureEngine::from_vecs(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
        let (out, diagnostics) = render(&engine, &[4], OutputStyle::Legacy);
        assert!(!out.contains("degree"));
        assert!(!diagnostics.contains("multiple of 4"));
        assert!(diagnostics.contains("multiple of 3"));
    }

    #[test]
    fn test_normalized_lists_extra_degrees() {
        let engine = QuadratureEngine::from_vecs(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
        let (out, diagnostics) = render(&engine, &[2, 4], OutputStyle::Normalized);
        assert!(out.contains("Newton-Cotes degree 2= 2.7\n"));
        assert!(out.contains("Newton-Cotes degree 4= n/a\n"));
        assert!(diagnostics.contains("multiple of 4"));
    }

    #[test]
    fn test_report_accessors() {
        let engine = QuadratureEngine::from_vecs(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 8.0, 27.0]).unwrap();
        let report = IntegralReport::compute(&engine, &[3]);
        assert_eq!(report.left_rectangle(), 9.0);
        assert_eq!(report.right_rectangle(), 36.0);
        assert_eq!(report.trapezoidal(), 22.5);
        assert_eq!(report.mid_rectangle(), 22.5);
        assert!(report.simpson().is_err());
        assert_eq!(report.newton_cotes_38(), &Ok(20.25));
        assert_eq!(report.newton_cotes().len(), 1);
    }
}
