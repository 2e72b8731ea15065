use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

pub fn modified_time_rfc3339(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path)?;
    let modified = metadata.modified()?;
    let datetime: DateTime<Utc> = modified.into();
    Ok(datetime.to_rfc3339())
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn parse_decimal(value: &str) -> Result<f64> {
    value
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|e| anyhow!("Parse decimal: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_decimal_keeps_two_places() {
        assert_eq!(format_decimal(100.0), "100.00");
        assert_eq!(format_decimal(0.5), "0.50");
    }

    #[test]
    fn parse_decimal_accepts_comma_separator() {
        assert_eq!(parse_decimal("1,5").unwrap(), 1.5);
        assert_eq!(parse_decimal("100.25").unwrap(), 100.25);
    }

    #[test]
    fn parse_decimal_rejects_text() {
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("").is_err());
    }
}
