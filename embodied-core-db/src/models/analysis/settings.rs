use serde::Deserialize;

pub const DEFAULT_REPORT_NAME: &str = "Analysis Report";
pub const DEFAULT_ASSEMBLIES_GROUP_NAME: &str = "Assembly Collection";

/// Report-level settings for grouping inputs into an analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub report_name: String,
    /// Name of the group holding assemblies that are not part of a built asset
    pub assemblies_group_name: String,
    /// `None` computes no recurrent flows
    pub period_of_analysis: Option<u32>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            report_name: DEFAULT_REPORT_NAME.to_string(),
            assemblies_group_name: DEFAULT_ASSEMBLIES_GROUP_NAME.to_string(),
            period_of_analysis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: AnalysisSettings = serde_json::from_str(r#"{"period_of_analysis": 60}"#).unwrap();
        assert_eq!(settings.report_name, DEFAULT_REPORT_NAME);
        assert_eq!(settings.assemblies_group_name, DEFAULT_ASSEMBLIES_GROUP_NAME);
        assert_eq!(settings.period_of_analysis, Some(60));
    }
}
