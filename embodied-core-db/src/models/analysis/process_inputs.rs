use embodied_core_api::ApiResult;
use tracing::{info, warn};

use super::analysis::{AnalysisMember, AnalysisModel, NewAnalysis};
use super::settings::AnalysisSettings;

/// Groups a mixed list of assemblies and built assets into one report analysis.
///
/// Each built asset is wrapped in its own analysis named after it, loose assemblies
/// are collected into one analysis named `assemblies_group_name`, and all of these
/// become members of a top-level analysis named `report_name`. Every level uses the
/// same period of analysis. Nested analyses that are not built assets are dropped.
///
/// # Returns
/// * `Ok(None)` - No assembly or built asset was supplied
pub fn process_inputs(inputs: Vec<AnalysisMember>, settings: &AnalysisSettings) -> ApiResult<Option<AnalysisModel>> {
    let period = settings.period_of_analysis;
    let mut groups: Vec<AnalysisMember> = Vec::new();
    let mut assemblies: Vec<AnalysisMember> = Vec::new();

    for input in inputs {
        match input {
            AnalysisMember::Assembly(assembly) => assemblies.push(assembly.into()),
            AnalysisMember::Group(group) if group.is_built_asset() => {
                let name = group.name().to_string();
                groups.push(AnalysisModel::new(NewAnalysis::named(&name, period), vec![group.into()])?.into());
            }
            AnalysisMember::Group(group) => {
                warn!(name = %group.name(), "Ignoring analysis input that is not a built asset");
            }
        }
    }

    if !assemblies.is_empty() {
        let collection = AnalysisModel::new(NewAnalysis::named(&settings.assemblies_group_name, period), assemblies)?;
        groups.push(collection.into());
    }

    if groups.is_empty() {
        return Ok(None);
    }

    info!(report = %settings.report_name, groups = groups.len(), "Grouping analysis inputs");
    AnalysisModel::new(NewAnalysis::named(&settings.report_name, period), groups).map(Some)
}
