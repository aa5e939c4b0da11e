//! Generate command: one array on the calling thread.

use super::summarise;
use crate::{CliError, Result};
use array_core::config::GeneratorConfig;
use array_core::{Array, RandomArrayGenerator};
use serde_json::json;
use std::str::FromStr;
use std::time::Instant;
use tracing::info;

/// How the generated array is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per row
    Table,
    /// `{"shape": [r, c], "data": [[...], ...]}`
    Json,
    /// Shape plus min/max/mean
    Summary,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "summary" => Ok(OutputFormat::Summary),
            _ => Err(CliError::InvalidFormat(s.to_string())),
        }
    }
}

/// Runs the generate command.
pub fn run(config: &GeneratorConfig, size: usize, format: &str) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let mut generator = RandomArrayGenerator::new(config.clone());

    let start = Instant::now();
    let array = generator.generate(size)?;
    info!(elapsed = ?start.elapsed(), "Generation finished");

    println!("{}", render(&array, format)?);
    Ok(())
}

/// Renders `array` in the requested format.
pub fn render(array: &Array, format: OutputFormat) -> Result<String> {
    let (rows, cols) = array.dim();
    match format {
        OutputFormat::Table => Ok(array
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|v| format!("{:.6}", v))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let data: Vec<Vec<f64>> = array.rows().into_iter().map(|row| row.to_vec()).collect();
            Ok(serde_json::to_string(&json!({
                "shape": [rows, cols],
                "data": data,
            }))?)
        }
        OutputFormat::Summary => Ok(match summarise(array) {
            Some(summary) => format!(
                "shape: ({}, {})\nmin:   {:.6}\nmax:   {:.6}\nmean:  {:.6}",
                rows, cols, summary.min, summary.max, summary.mean
            ),
            None => format!("shape: ({}, {})", rows, cols),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Array {
        Array::from_shape_vec((2, 2), vec![0.5, 0.25, 0.125, 0.0]).unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("summary").unwrap(),
            OutputFormat::Summary
        );
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(CliError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_render_table() {
        let out = render(&sample(), OutputFormat::Table).unwrap();
        assert_eq!(out, "0.500000 0.250000\n0.125000 0.000000");
    }

    #[test]
    fn test_render_json() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["shape"], json!([2, 2]));
        assert_eq!(value["data"][1][0], json!(0.125));
    }

    #[test]
    fn test_render_summary() {
        let out = render(&sample(), OutputFormat::Summary).unwrap();
        assert!(out.starts_with("shape: (2, 2)"));
        assert!(out.contains("max:   0.500000"));
    }

    #[test]
    fn test_run_rejects_zero_size() {
        let config = GeneratorConfig {
            delay_ms: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            run(&config, 0, "summary"),
            Err(CliError::Generator(_))
        ));
    }

    #[test]
    fn test_run_rejects_bad_format_before_generating() {
        let config = GeneratorConfig::default();
        assert!(matches!(
            run(&config, 3, "xml"),
            Err(CliError::InvalidFormat(_))
        ));
    }
}
