/// Validation of popup form input before any call is made
use crate::error::ScoutError;

pub const MISSING_TITLES: &str = "Enter at least one job title.";
pub const MISSING_COMPANY_NAME: &str = "Enter a company name.";
pub const MISSING_FILE: &str = "Select a file first.";

/// One title per line; surrounding whitespace trimmed, blank lines dropped
pub fn parse_titles(raw: &str) -> Result<Vec<String>, ScoutError> {
    let titles: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if titles.is_empty() {
        Err(ScoutError::validation(MISSING_TITLES))
    } else {
        Ok(titles)
    }
}

pub fn require_company_name(raw: &str) -> Result<String, ScoutError> {
    let name = raw.trim();
    if name.is_empty() {
        Err(ScoutError::validation(MISSING_COMPANY_NAME))
    } else {
        Ok(name.to_string())
    }
}

pub fn require_file<F>(selected: Option<F>) -> Result<F, ScoutError> {
    selected.ok_or_else(|| ScoutError::validation(MISSING_FILE))
}

/// `None` for a blank optional field
pub fn non_blank(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_titles_trims_and_filters() {
        let titles = parse_titles("  Software Engineer \n\n\tML Engineer\n   \n").unwrap();
        assert_eq!(titles, vec!["Software Engineer", "ML Engineer"]);
    }

    #[test]
    fn test_parse_titles_keeps_order_and_duplicates() {
        let titles = parse_titles("SRE\nData Engineer\nSRE").unwrap();
        assert_eq!(titles, vec!["SRE", "Data Engineer", "SRE"]);
    }

    #[test]
    fn test_parse_titles_windows_line_endings() {
        let titles = parse_titles("Backend\r\nFrontend\r\n").unwrap();
        assert_eq!(titles, vec!["Backend", "Frontend"]);
    }

    #[test]
    fn test_parse_titles_rejects_blank_input() {
        for raw in ["", "   ", "\n\n", " \t \n  "] {
            assert_eq!(
                parse_titles(raw),
                Err(ScoutError::Validation(MISSING_TITLES.to_string()))
            );
        }
    }

    #[test]
    fn test_require_company_name() {
        assert_eq!(require_company_name("  Stripe "), Ok("Stripe".to_string()));
        assert!(require_company_name("   ").is_err());
    }

    #[test]
    fn test_require_file() {
        assert_eq!(require_file(Some("resume.pdf")), Ok("resume.pdf"));
        assert_eq!(
            require_file::<&str>(None).unwrap_err().to_string(),
            "Select a file first."
        );
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  llama3 "), Some("llama3".to_string()));
        assert_eq!(non_blank("   "), None);
    }
}
