use std::fmt;

/// Key triple identifying one settings row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsKey {
    pub user_id: i64,
    pub category: String,
    pub config_key: String,
}

/// Classification of a stored config value, used for the verification report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStatus {
    Null,
    Empty,
    /// Present and non-empty; carries the character count (not byte length).
    Ok(usize),
}

impl From<Option<&str>> for ValueStatus {
    fn from(value: Option<&str>) -> Self {
        match value {
            None => ValueStatus::Null,
            Some("") => ValueStatus::Empty,
            Some(s) => ValueStatus::Ok(s.chars().count()),
        }
    }
}

impl fmt::Display for ValueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueStatus::Null => f.write_str("NULL"),
            ValueStatus::Empty => f.write_str("EMPTY"),
            ValueStatus::Ok(chars) => write!(f, "OK ({chars} chars)"),
        }
    }
}

/// One row of the verification report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingStatus {
    pub config_key: String,
    pub status: ValueStatus,
}

#[cfg(test)]
mod tests {
    use super::ValueStatus;

    #[test]
    fn classifies_absent_and_empty_values() {
        assert_eq!(ValueStatus::from(None), ValueStatus::Null);
        assert_eq!(ValueStatus::from(Some("")), ValueStatus::Empty);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(ValueStatus::from(Some(r#"{"a":1}"#)), ValueStatus::Ok(7));
        // 5 characters, 7 bytes in UTF-8
        assert_eq!(ValueStatus::from(Some("héllö")), ValueStatus::Ok(5));
    }

    #[test]
    fn renders_report_statuses() {
        assert_eq!(ValueStatus::Null.to_string(), "NULL");
        assert_eq!(ValueStatus::Empty.to_string(), "EMPTY");
        assert_eq!(ValueStatus::Ok(7).to_string(), "OK (7 chars)");
    }
}
