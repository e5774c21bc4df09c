use std::io;
use std::path::PathBuf;

use anyhow::{
    Context,
    Result
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tabquad::configuration::Configuration;
use tabquad::input::samplereader::SampleReader;
use tabquad::math::quadrature::quadratureengine::QuadratureEngine;
use tabquad::report::integralreport::IntegralReport;
use tabquad::report::outputstyle::OutputStyle;

/// 從標準輸入讀取 N、N 個橫座標與 N 個函數值，輸出各求積公式的結果
#[derive(Parser)]
#[command(author, version, about = "Definite integrals from tabulated samples", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output style, overrides the configuration file
    #[arg(long, value_enum)]
    style: Option<OutputStyle>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Configuration::new(),
    };
    if let Some(style) = cli.style {
        config = config.with_output_style(style);
    }

    let samples = SampleReader::new()
        .read_from(io::stdin().lock())
        .context("failed to read samples from standard input")?;
    let engine = QuadratureEngine::new(samples);
    let report = IntegralReport::compute(&engine, config.newton_cotes_degrees());

    let mut out = io::stdout().lock();
    let mut diagnostics = io::stderr().lock();
    report
        .write(config.output_style(), &mut out, &mut diagnostics)
        .context("failed to write report")?;
    Ok(())
}
