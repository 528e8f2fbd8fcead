use crate::db::models::SettingStatus;
use std::fmt::Write;

/// Fixed banner printed after a successful update.
pub const SUCCESS_BANNER: &str = "✅ service account credential updated";

/// Render the verification report: banner, heading, one indented line per setting.
pub fn render(rows: &[SettingStatus]) -> String {
    let mut out = String::new();
    out.push_str(SUCCESS_BANNER);
    out.push_str("\n\nCurrent configuration status:\n");
    for row in rows {
        let _ = writeln!(out, "  {}: {}", row.config_key, row.status);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::db::models::{SettingStatus, ValueStatus};

    #[test]
    fn renders_one_line_per_setting() {
        let rows = vec![
            SettingStatus {
                config_key: "gcp_service_account_json".to_string(),
                status: ValueStatus::Ok(7),
            },
            SettingStatus {
                config_key: "gemini_api_key".to_string(),
                status: ValueStatus::Null,
            },
        ];
        let report = render(&rows);
        assert!(report.starts_with("✅ service account credential updated\n"));
        assert!(report.contains("\n  gcp_service_account_json: OK (7 chars)\n"));
        assert!(report.contains("\n  gemini_api_key: NULL\n"));
    }

    #[test]
    fn empty_report_keeps_banner_and_heading() {
        let report = render(&[]);
        assert_eq!(
            report,
            "✅ service account credential updated\n\nCurrent configuration status:\n"
        );
    }
}
