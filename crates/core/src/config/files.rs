//! Watch-mode input files: the notification address and the tracked
//! receipt list. Both are fatal to load incorrectly; there is nothing
//! sensible to watch without them.

use std::io::ErrorKind;
use std::path::Path;

use crate::receipt::ReceiptNumber;

use super::ConfigError;

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
        _ => ConfigError::ReadError(path.display().to_string(), e.to_string()),
    })
}

/// Load the notification email address from a file.
///
/// The file must contain a single address-like token: exactly one `@`.
pub fn load_email(path: &Path) -> Result<String, ConfigError> {
    let raw = read_file(path)?;
    let email = raw.trim();
    if email.is_empty() || email.matches('@').count() != 1 {
        return Err(ConfigError::InvalidEmail(email.to_string()));
    }
    Ok(email.to_string())
}

/// Load tracked receipt numbers from a file, one per line.
///
/// Blank lines are skipped; a malformed line or an empty file is fatal.
pub fn load_receipts(path: &Path) -> Result<Vec<ReceiptNumber>, ConfigError> {
    let raw = read_file(path)?;

    let mut receipts = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let receipt = ReceiptNumber::parse(line)
            .map_err(|e| ConfigError::InvalidReceipt(format!("{}: {}", line, e)))?;
        receipts.push(receipt);
    }

    if receipts.is_empty() {
        return Err(ConfigError::EmptyReceipts(path.display().to_string()));
    }
    Ok(receipts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_email_valid() {
        let file = write_file("someone@example.com\n");
        assert_eq!(load_email(file.path()).unwrap(), "someone@example.com");
    }

    #[test]
    fn test_load_email_missing_file() {
        let result = load_email(Path::new("/nonexistent/email.data"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_email_no_at_sign() {
        let file = write_file("not-an-address\n");
        assert!(matches!(
            load_email(file.path()),
            Err(ConfigError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_load_email_two_at_signs() {
        let file = write_file("a@b@c.com\n");
        assert!(matches!(
            load_email(file.path()),
            Err(ConfigError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_load_receipts_one_per_line() {
        let file = write_file("YSC2090175300\n\nMSC0000000042\n");
        let receipts = load_receipts(file.path()).unwrap();
        let tokens: Vec<&str> = receipts.iter().map(|r| r.as_str()).collect();
        assert_eq!(tokens, vec!["YSC2090175300", "MSC0000000042"]);
    }

    #[test]
    fn test_load_receipts_malformed_line_is_fatal() {
        let file = write_file("YSC2090175300\nbogus\n");
        assert!(matches!(
            load_receipts(file.path()),
            Err(ConfigError::InvalidReceipt(_))
        ));
    }

    #[test]
    fn test_load_receipts_empty_file_is_fatal() {
        let file = write_file("\n\n");
        assert!(matches!(
            load_receipts(file.path()),
            Err(ConfigError::EmptyReceipts(_))
        ));
    }

    #[test]
    fn test_load_receipts_missing_file() {
        let result = load_receipts(Path::new("/nonexistent/receipts.data"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
