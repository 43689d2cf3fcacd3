// mod.rs - Output formatters module

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Write;
use std::str::FromStr;

use crate::core::velvet::MAX_KMER_LENGTH;
use crate::core::{JukesCantorDistance, MappingFunction, VelvetEstimate};

const BINARY_SUFFIXES: [&str; 8] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB"];
const DECIMAL_SUFFIXES: [&str; 8] = ["", "Kb", "Mb", "Gb", "Tb", "Pb", "Eb", "Zb"];

/// How command results are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}. Use: text, json", s)),
        }
    }
}

/// Size formatting options shared by the memory report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeStyle {
    pub kilobyte_is_1024_bytes: bool,
    pub precision: usize,
}

impl Default for SizeStyle {
    fn default() -> Self {
        Self {
            kilobyte_is_1024_bytes: true,
            precision: 1,
        }
    }
}

/// Convert a byte count to human-readable form, e.g. `931.3GiB` for 10^12
/// bytes in binary units or `1.0Tb` in decimal units.
///
/// Negative sizes keep their sign.
pub fn human_size(size: f64, style: SizeStyle) -> String {
    let (multiple, suffixes) = if style.kilobyte_is_1024_bytes {
        (1024.0, &BINARY_SUFFIXES)
    } else {
        (1000.0, &DECIMAL_SUFFIXES)
    };

    let sign = if size < 0.0 { "-" } else { "" };
    let mut value = size.abs();
    let mut index = 0;
    while value >= multiple && index + 1 < suffixes.len() {
        value /= multiple;
        index += 1;
    }

    format!("{}{:.*}{}", sign, style.precision, value, suffixes[index])
}

fn emit<W: Write>(writer: &mut W, lines: &[String]) -> Result<(), String> {
    for line in lines {
        writeln!(writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
    }
    writer.flush().map_err(|e| format!("Flush error: {}", e))
}

fn emit_json<W: Write>(writer: &mut W, value: &serde_json::Value) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize result: {}", e))?;
    emit(writer, &[rendered])
}

/// Write a recombination probability
pub fn write_recombination<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    centimorgans: f64,
    method: MappingFunction,
    probability: f64,
) -> Result<(), String> {
    match format {
        OutputFormat::Text => emit(
            writer,
            &[
                format!("Distance: {}cM", centimorgans),
                format!("Method: {}", method),
                format!("Probability: {}", probability),
            ],
        ),
        OutputFormat::Json => emit_json(
            writer,
            &json!({
                "centimorgans": centimorgans,
                "method": method,
                "probability": probability,
            }),
        ),
    }
}

/// Write a Jukes-Cantor distance and its variance
pub fn write_jukes_cantor_distance<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    p: f64,
    sequence_length: usize,
    result: &JukesCantorDistance,
) -> Result<(), String> {
    match format {
        OutputFormat::Text => emit(
            writer,
            &[
                format!("Proportion: {}", p),
                format!("SequenceLength: {}", sequence_length),
                format!("Distance: {}", result.distance),
                format!("Variance: {}", result.variance),
            ],
        ),
        OutputFormat::Json => emit_json(
            writer,
            &json!({
                "p": p,
                "sequence_length": sequence_length,
                "distance": result.distance,
                "variance": result.variance,
            }),
        ),
    }
}

/// Write the proportion of differing sites for a Jukes-Cantor distance
pub fn write_jukes_cantor_proportion<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    distance: f64,
    proportion: f64,
) -> Result<(), String> {
    match format {
        OutputFormat::Text => emit(
            writer,
            &[
                format!("Distance: {}", distance),
                format!("Proportion: {}", proportion),
            ],
        ),
        OutputFormat::Json => emit_json(
            writer,
            &json!({
                "distance": distance,
                "proportion": proportion,
            }),
        ),
    }
}

/// Labeled diagnostic lines for a velvet memory estimate
pub fn velvet_report_lines(estimate: &VelvetEstimate, style: SizeStyle) -> Vec<String> {
    let params = &estimate.params;
    vec![
        format!("ReadSize: {}", params.read_size),
        format!("GenomeSize: {}Mb", params.genome_size_mb),
        format!("NumReads: {}M", params.num_reads_m),
        format!("K: {}", params.kmer_size),
        format!(
            "RAM usage: {} (MAXKMERLENGTH={})",
            human_size(estimate.bytes as f64, style),
            MAX_KMER_LENGTH
        ),
    ]
}

/// Write the velvet memory report. The labeled lines always go to
/// `diagnostics`; in JSON mode the estimate is also written to `writer`.
pub fn write_velvet_report<W: Write, D: Write>(
    writer: &mut W,
    diagnostics: &mut D,
    format: OutputFormat,
    estimate: &VelvetEstimate,
    style: SizeStyle,
) -> Result<(), String> {
    emit(diagnostics, &velvet_report_lines(estimate, style))?;

    if format == OutputFormat::Json {
        let mut value = serde_json::to_value(estimate)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "ram_usage".to_string(),
                json!(human_size(estimate.bytes as f64, style)),
            );
            object.insert("max_kmer_length".to_string(), json!(MAX_KMER_LENGTH));
        }
        emit_json(writer, &value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{estimate_assembly_memory, jukes_cantor_distance, VelvetParams};

    fn decimal() -> SizeStyle {
        SizeStyle {
            kilobyte_is_1024_bytes: false,
            precision: 1,
        }
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(1_000_000_000_000.0, SizeStyle::default()), "931.3GiB");
        assert_eq!(human_size(1_000_000_000_000.0, decimal()), "1.0Tb");
        assert_eq!(human_size(300.0, decimal()), "300.0");
        assert_eq!(human_size(300.0, SizeStyle::default()), "300.0B");
        assert_eq!(human_size(1024.0, SizeStyle::default()), "1.0KiB");
    }

    #[test]
    fn test_human_size_negative_and_precision() {
        assert_eq!(human_size(-1536.0, SizeStyle::default()), "-1.5KiB");
        let style = SizeStyle {
            kilobyte_is_1024_bytes: true,
            precision: 3,
        };
        assert_eq!(human_size(1536.0, style), "1.500KiB");
    }

    #[test]
    fn test_human_size_stops_at_largest_suffix() {
        assert!(human_size(1e30, SizeStyle::default()).ends_with("ZiB"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_velvet_report() {
        let estimate = estimate_assembly_memory(&VelvetParams {
            read_size: 100,
            genome_size_mb: 3000,
            num_reads_m: 30,
            kmer_size: 31,
        })
        .unwrap();

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        write_velvet_report(&mut stdout, &mut stderr, OutputFormat::Text, &estimate, SizeStyle::default())
            .unwrap();

        assert!(stdout.is_empty());
        let report = String::from_utf8(stderr).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ReadSize: 100",
                "GenomeSize: 3000Mb",
                "NumReads: 30M",
                "K: 31",
                "RAM usage: 247.9GiB (MAXKMERLENGTH=31)",
            ]
        );
    }

    #[test]
    fn test_velvet_report_json() {
        let estimate = estimate_assembly_memory(&VelvetParams {
            read_size: 100,
            genome_size_mb: 3000,
            num_reads_m: 30,
            kmer_size: 31,
        })
        .unwrap();

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        write_velvet_report(&mut stdout, &mut stderr, OutputFormat::Json, &estimate, SizeStyle::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(value["ram_kb"], 266_182_803);
        assert_eq!(value["bytes"], 266_182_803_000i64);
        assert_eq!(value["kmer_size"], 31);
        assert_eq!(value["ram_usage"], "247.9GiB");
        assert_eq!(String::from_utf8(stderr).unwrap().lines().count(), 5);
    }

    #[test]
    fn test_jukes_cantor_text_output() {
        let result = jukes_cantor_distance(0.1, 100).unwrap();
        let mut out = Vec::new();
        write_jukes_cantor_distance(&mut out, OutputFormat::Text, 0.1, 100, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Proportion: 0.1\n"));
        assert!(text.contains("SequenceLength: 100\n"));
        assert!(text.contains("Distance: 0.10732563273"));
    }

    #[test]
    fn test_recombination_json_output() {
        let mut out = Vec::new();
        write_recombination(&mut out, OutputFormat::Json, 1.0, MappingFunction::Haldane, 0.25).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["method"], "haldane");
        assert_eq!(value["probability"], 0.25);
        assert_eq!(value["centimorgans"], 1.0);
    }
}
