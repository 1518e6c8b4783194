//! Statistics export: CSV table and JSON document

use audioactive_core::Statistics;
use std::io::{self, Write};

/// CSV header, one row per term in iteration order
pub const CSV_HEADER: &str = "length,1s,2s,3s,entropy";

/// Write the per-term table as CSV
///
/// Entropy is written at full precision in shortest round-trip form.
pub fn write_csv<W: Write>(mut out: W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for row in &stats.per_term {
        writeln!(
            out,
            "{},{},{},{},{:?}",
            row.length, row.count_1, row.count_2, row.count_3, row.entropy
        )?;
    }
    out.flush()
}

/// Write the full statistics document as pretty JSON
pub fn write_json<W: Write>(mut out: W, stats: &Statistics) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, stats)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use audioactive_core::{compute_statistics, generate, AtomTable};

    fn sample() -> Statistics {
        let sequence = generate("1", 3).unwrap();
        compute_statistics(&sequence, AtomTable::conway())
    }

    #[test]
    fn test_csv() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            &lines[..4],
            &["length,1s,2s,3s,entropy", "1,1,0,0,0.0", "2,2,0,0,0.0", "2,1,1,0,1.0"]
        );

        let last: Vec<&str> = lines[4].split(',').collect();
        assert_eq!(&last[..4], &["4", "3", "1", "0"]);
        let entropy: f64 = last[4].parse().unwrap();
        assert!((entropy - 0.811_278_124_459_132_8).abs() < 1e-12);
    }

    #[test]
    fn test_json() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["per_term"].as_array().unwrap().len(), 4);
        assert_eq!(value["growth_ratios"].as_array().unwrap().len(), 3);
    }
}
