//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use dicecalc_core::Decimal;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Whole milliseconds, as in `412ms`.
#[must_use]
pub fn format_millis(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}

/// One line of the E(1)..=E(n) table.
#[must_use]
pub fn format_table_row(dice: u32, value: &Decimal) -> String {
    format!("{dice:>4}  {value}")
}

/// Write a decimal value to a file, followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, value: &Decimal) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert!(s.contains('m'));
    }

    #[test]
    fn format_millis_truncates() {
        assert_eq!(format_millis(Duration::from_micros(412_900)), "412ms");
    }

    #[test]
    fn table_row_aligns_dice() {
        let value: Decimal = "6.00".parse().unwrap();
        assert_eq!(format_table_row(1, &value), "   1  6.00");
    }

    #[test]
    fn write_value_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("e.txt");
        let value: Decimal = "8.72727".parse().unwrap();
        write_to_file(path.to_str().unwrap(), &value).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "8.72727\n");
    }
}
