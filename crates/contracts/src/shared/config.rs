use serde::Deserialize;

use super::error::ConfigError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PortalConfig {
    /// Enables the quick demo logins and the header role switcher.
    pub demo_mode: bool,
    pub barangay_name: String,
    pub delays: DelayConfig,
    pub report: ReportConfig,
    pub dashboard: DashboardConfig,
}

/// Simulated latencies, in milliseconds.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DelayConfig {
    pub login_ms: u32,
    pub report_stage_ms: u32,
    pub qr_scan_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    pub period_month: u32,
    pub period_year: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub health_index_score: u32,
    pub health_index_max: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
demo_mode = true
barangay_name = "Barangay Health & Sanitation"

[delays]
login_ms = 500
report_stage_ms = 800
qr_scan_ms = 1500

[report]
period_month = 12
period_year = 2025

[dashboard]
health_index_score = 78
health_index_max = 100
"#;

/// Partial overlay; every field is optional so a deployment only states
/// what it changes.
#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    demo_mode: Option<bool>,
    barangay_name: Option<String>,
    delays: Option<DelayOverlay>,
    report: Option<ReportOverlay>,
    dashboard: Option<DashboardOverlay>,
}

#[derive(Debug, Deserialize, Default)]
struct DelayOverlay {
    login_ms: Option<u32>,
    report_stage_ms: Option<u32>,
    qr_scan_ms: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
struct ReportOverlay {
    period_month: Option<u32>,
    period_year: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
struct DashboardOverlay {
    health_index_score: Option<u32>,
    health_index_max: Option<u32>,
}

impl PortalConfig {
    fn apply(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.demo_mode {
            self.demo_mode = v;
        }
        if let Some(v) = overlay.barangay_name {
            self.barangay_name = v;
        }
        if let Some(d) = overlay.delays {
            self.delays.login_ms = d.login_ms.unwrap_or(self.delays.login_ms);
            self.delays.report_stage_ms = d.report_stage_ms.unwrap_or(self.delays.report_stage_ms);
            self.delays.qr_scan_ms = d.qr_scan_ms.unwrap_or(self.delays.qr_scan_ms);
        }
        if let Some(r) = overlay.report {
            self.report.period_month = r.period_month.unwrap_or(self.report.period_month);
            self.report.period_year = r.period_year.unwrap_or(self.report.period_year);
        }
        if let Some(d) = overlay.dashboard {
            self.dashboard.health_index_score =
                d.health_index_score.unwrap_or(self.dashboard.health_index_score);
            self.dashboard.health_index_max =
                d.health_index_max.unwrap_or(self.dashboard.health_index_max);
        }
    }
}

/// Load the portal configuration.
///
/// Starts from the embedded default and applies `overlay` (TOML text) on top
/// when one is given. The web build passes the compile-time
/// `HSM_PORTAL_CONFIG` variable here.
pub fn load_config(overlay: Option<&str>) -> Result<PortalConfig, ConfigError> {
    let mut config: PortalConfig = toml::from_str(DEFAULT_CONFIG)?;
    match overlay {
        Some(text) if !text.trim().is_empty() => {
            log::info!("Applying portal configuration overlay");
            let overlay: ConfigOverlay = toml::from_str(text)?;
            config.apply(overlay);
        }
        _ => log::info!("Using default embedded configuration"),
    }
    Ok(config)
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            demo_mode: true,
            barangay_name: "Barangay Health & Sanitation".to_string(),
            delays: DelayConfig {
                login_ms: 500,
                report_stage_ms: 800,
                qr_scan_ms: 1500,
            },
            report: ReportConfig {
                period_month: 12,
                period_year: 2025,
            },
            dashboard: DashboardConfig {
                health_index_score: 78,
                health_index_max: 100,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert!(config.demo_mode);
        assert_eq!(config.delays.login_ms, 500);
        assert_eq!(config.delays.report_stage_ms, 800);
        assert_eq!(config.delays.qr_scan_ms, 1500);
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_overlay_replaces_only_given_fields() {
        let config = load_config(Some("demo_mode = false\n[delays]\nlogin_ms = 0\n")).unwrap();
        assert!(!config.demo_mode);
        assert_eq!(config.delays.login_ms, 0);
        assert_eq!(config.delays.report_stage_ms, 800);
        assert_eq!(config.report.period_year, 2025);
    }

    #[test]
    fn test_blank_overlay_is_ignored() {
        assert_eq!(load_config(Some("   ")).unwrap(), PortalConfig::default());
    }

    #[test]
    fn test_malformed_overlay_is_an_error() {
        assert!(load_config(Some("demo_mode = \"yes\"")).is_err());
    }
}
