use chrono::{DateTime, Local, TimeZone};
use embodied_core_api::{ApiError, ApiResult, FunctionalUnit, DATABASE_VERSION, DISCLAIMER, PLUGIN_VERSION};
use embodied_core_db::models::analysis::{AnalysisModel, DEFAULT_REPORT_NAME};
use embodied_core_db::models::assembly::AssemblyModel;
use embodied_core_db::models::flows::{FlowValues, MaterialFlows};
use indexmap::IndexMap;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::ExportConfig;
use crate::utils::sanitize_field;

pub const FAILED_TO_WRITE: &str = "FAILED TO WRITE CSV. Folder location:";
pub const WRITE_SUCCEEDED: &str = "Successfully printed to .csv file: ";
pub const BOQ_TITLE: &str = "*** MATERIAL BOQ ***";
pub const BOQ_HEADER: &str = "Material Name, Qty, Units";

const SUMMARY_HEADER: &str = ",Total Energy (MJ),Total Water (L),Total GHG (kgCO2e)";
const SECTION_HEADER: &str = ",Total Energy (MJ),Total Water (L),Total GHG (kgCO2e),Qty,Functional Unit,Comments";
const RULE: &str = "_______________________________________________________________________________________";

/// Writes the CSV report of `analysis` into the configured folder.
///
/// When `<report_name>.csv` already exists, `<report_name>_2.csv`, `<report_name>_3.csv`
/// and so on are tried up to `max_versions`.
///
/// # Returns
/// * `Ok(message)` - Either the success message with the file path, or the failure
///   message naming the folder when the file could not be written
/// * `Err(ApiError::ValidationError)` - No folder location is configured
pub fn export_csv(analysis: &AnalysisModel, report_name: Option<&str>, config: &ExportConfig) -> ApiResult<String> {
    let folder = config
        .folder_location
        .as_deref()
        .ok_or_else(|| ApiError::ValidationError("No folder location provided".to_string()))?;
    let report_name = report_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_REPORT_NAME);

    let contents = render_csv(analysis, report_name, Local::now())?;
    let path = versioned_path(folder, report_name, config.max_versions);

    match fs::write(&path, contents) {
        Ok(()) => {
            info!(path = %path.display(), "CSV report written");
            Ok(format!("{WRITE_SUCCEEDED}{}", path.display()))
        }
        Err(error) => {
            warn!(folder = %folder.display(), %error, "CSV report could not be written");
            Ok(format!("{FAILED_TO_WRITE}{}", folder.display()))
        }
    }
}

/// First of `<name>.csv`, `<name>_2.csv` ... `<name>_<max_versions>.csv` that does not exist,
/// or the last one tried.
pub fn versioned_path(folder: &Path, report_name: &str, max_versions: u32) -> PathBuf {
    let mut path = folder.join(format!("{report_name}.csv"));
    let mut counter = 1;
    while path.exists() && counter < max_versions {
        counter += 1;
        path = folder.join(format!("{report_name}_{counter}.csv"));
    }
    path
}

/// Renders the full CSV report.
pub fn render_csv<Tz>(analysis: &AnalysisModel, report_name: &str, now: DateTime<Tz>) -> ApiResult<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut csv = String::new();
    write_report(&mut csv, analysis, report_name, &now)
        .map_err(|_| ApiError::ExportError(format!("Could not render report '{report_name}'")))?;
    Ok(csv)
}

fn write_report<Tz>(csv: &mut String, analysis: &AnalysisModel, report_name: &str, now: &DateTime<Tz>) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    write_details(csv, analysis, report_name, now)?;
    write_summary(csv, analysis)?;

    let built_assets = analysis.built_assets();
    if !built_assets.is_empty() {
        writeln!(csv, "*** BREAKDOWN BY BUILT ASSET ***\n")?;
        writeln!(csv, "{SECTION_HEADER}")?;
        for built_asset in built_assets {
            let title = format!("<<-{}->>", sanitize_field(built_asset.name()));
            writeln!(csv)?;
            if built_asset.comments().is_empty() {
                writeln!(csv, "{title}")?;
            } else {
                writeln!(csv, "{title},,,,,,{}", sanitize_field(built_asset.comments()))?;
            }
            for assembly in built_asset.assemblies() {
                write_assembly(csv, assembly)?;
            }
        }
    }

    let assemblies = analysis.loose_assemblies();
    if !assemblies.is_empty() {
        writeln!(csv, "*** BREAKDOWN BY ASSEMBLIES ***\n")?;
        writeln!(csv, "{SECTION_HEADER}")?;
        for assembly in assemblies {
            write_assembly(csv, assembly)?;
        }
    }

    write_boq(csv, analysis)
}

fn write_details<Tz>(csv: &mut String, analysis: &AnalysisModel, report_name: &str, now: &DateTime<Tz>) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    writeln!(csv, "This is a report generated by a calculator for hybrid embodied environmental flows")?;
    writeln!(csv, "Report date: {}", now.format("%d %B %Y"))?;
    writeln!(csv, "Time: {}", now.format("%H:%M"))?;
    writeln!(csv)?;
    writeln!(csv, "Plugin Version: {PLUGIN_VERSION}")?;
    writeln!(csv, "Database Version: {DATABASE_VERSION}")?;
    for line in DISCLAIMER.lines() {
        writeln!(csv, "{}", sanitize_field(&line.replace(", ", " - ")))?;
    }
    writeln!(csv, "{RULE}")?;
    writeln!(csv)?;
    writeln!(csv, "{}", sanitize_field(report_name))?;
    writeln!(csv, "Period of Analysis: {} years", analysis.period_of_analysis().unwrap_or(0))?;
    writeln!(csv)
}

fn write_values_row(csv: &mut String, label: &str, values: &FlowValues) -> fmt::Result {
    writeln!(csv, "{label},{},{},{},", values.energy, values.water, values.ghg)
}

fn write_summary(csv: &mut String, analysis: &AnalysisModel) -> fmt::Result {
    let totals = &analysis.flows().totals;
    writeln!(csv, "{SUMMARY_HEADER}")?;
    write_values_row(csv, "Life Cycle Total", &totals.life_cycle)?;
    write_values_row(csv, ">> Total Initial (excl. wastage)", &totals.initial_excluding_wastage())?;
    write_values_row(csv, ">>>> Total Initial Wastage", &totals.initial_wastage)?;
    write_values_row(csv, ">> Total Recurrent (excl. wastage)", &totals.recurrent_excluding_wastage())?;
    write_values_row(csv, ">>>> Total Recurrent Wastage", &totals.recurrent_wastage)?;
    writeln!(csv)?;
    writeln!(csv)
}

fn write_assembly(csv: &mut String, assembly: &AssemblyModel) -> fmt::Result {
    if assembly.individual_units().is_empty() || assembly.total_units() <= 0.0 {
        return Ok(());
    }

    let title = if assembly.has_category() {
        format!(
            "<{} | Category: {} ({} {})>",
            sanitize_field(assembly.name()),
            sanitize_field(assembly.category()),
            assembly.total_units(),
            assembly.assembly_units()
        )
    } else {
        format!(
            "<{} ({} {})>",
            sanitize_field(assembly.name()),
            assembly.total_units(),
            assembly.assembly_units()
        )
    };
    let comments = if assembly.comments().is_empty() {
        " ".to_string()
    } else {
        sanitize_field(assembly.comments())
    };
    writeln!(csv, "{title},,,,,,{comments}")?;

    for material in assembly.recalculated_flows().by_material.values() {
        write_material(csv, material, assembly.total_units())?;
    }
    writeln!(csv)
}

fn write_material(csv: &mut String, material: &MaterialFlows, total_units: f64) -> fmt::Result {
    let totals = &material.totals;
    writeln!(
        csv,
        "{},,,,{},{},{}",
        sanitize_field(&material.material_name),
        material.quantity * total_units,
        sanitize_field(material.material.functional_unit.as_str()),
        sanitize_field(&material.material.comments)
    )?;
    write_values_row(csv, ">> Initial (excl. wastage)", &totals.initial_excluding_wastage())?;
    if totals.initial_wastage.energy > 0.0 {
        let percent = totals.initial_wastage.energy * 100.0 / totals.initial.energy;
        write_values_row(csv, &format!(">>>> Initial Wastage ({percent}%)"), &totals.initial_wastage)?;
    }
    if totals.recurrent.energy > 0.0 {
        write_values_row(csv, ">> Recurrent (excl. wastage)", &totals.recurrent_excluding_wastage())?;
    }
    if totals.recurrent_wastage.energy > 0.0 {
        write_values_row(csv, ">>>> Recurrent Wastage", &totals.recurrent_wastage)?;
    }
    Ok(())
}

/// Total quantity per material name across the whole analysis
pub fn bill_of_quantities(analysis: &AnalysisModel) -> IndexMap<String, (f64, FunctionalUnit)> {
    let mut boq: IndexMap<String, (f64, FunctionalUnit)> = IndexMap::new();
    for (material, quantity) in analysis.material_quantities() {
        boq.entry(material.name.to_string())
            .and_modify(|(total, _)| *total += quantity)
            .or_insert_with(|| (quantity, material.functional_unit.clone()));
    }
    boq
}

fn write_boq(csv: &mut String, analysis: &AnalysisModel) -> fmt::Result {
    writeln!(csv, "{BOQ_TITLE}\n")?;
    writeln!(csv, "{BOQ_HEADER}")?;
    for (name, (quantity, unit)) in bill_of_quantities(analysis) {
        writeln!(csv, "{}, {}, {}", sanitize_field(&name), quantity, sanitize_field(unit.as_str()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_utils::test_utils::{create_test_report, material, wall};
    use approx::assert_relative_eq;
    use chrono::Utc;
    use embodied_core_db::models::analysis::{process_inputs, AnalysisMember, AnalysisSettings, NewAnalysis};
    use embodied_core_db::models::material::{MaterialModel, NewMaterial};
    use std::sync::Arc;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()
    }

    fn boq_rows(csv: &str) -> Vec<(String, f64, String)> {
        csv.lines()
            .skip_while(|line| *line != BOQ_HEADER)
            .skip(1)
            .map(|line| {
                let fields: Vec<&str> = line.split(", ").collect();
                (fields[0].to_string(), fields[1].parse().unwrap(), fields[2].to_string())
            })
            .collect()
    }

    #[test]
    fn test_header_block() {
        let csv = render_csv(&create_test_report(), "Tower, stage 1", fixed_time()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "Report date: 05 March 2024");
        assert_eq!(lines[2], "Time: 14:30");
        assert!(lines.contains(&"Tower. stage 1"));
        assert!(lines.contains(&"Period of Analysis: 50 years"));
        assert!(lines.contains(&SUMMARY_HEADER));
    }

    #[test]
    fn test_sections_and_titles() {
        let csv = render_csv(&create_test_report(), "Report", fixed_time()).unwrap();
        assert!(csv.contains("*** BREAKDOWN BY BUILT ASSET ***"));
        assert!(csv.contains("<<-House->>,,,,,,Two storey. timber frame"));
        assert!(csv.contains("*** BREAKDOWN BY ASSEMBLIES ***"));
        assert!(csv.contains("<Shed wall | Category: Walls (4 m²)>,,,,,, "));
        assert!(csv.contains("<Floor (2 m²)>"));
        // every material gets its own breakdown rows
        assert_eq!(csv.matches(">> Initial (excl. wastage)").count(), 3);
        assert!(csv.contains(">>>> Initial Wastage (9.09"));
        assert!(csv.contains(">> Recurrent (excl. wastage)"));
    }

    #[test]
    fn test_no_comma_leaks_from_free_text() {
        let csv = render_csv(&create_test_report(), "Report", fixed_time()).unwrap();
        for line in csv.lines().filter(|line| line.starts_with('<')) {
            assert_eq!(line.matches(',').count(), 6, "{line}");
        }
        for line in csv.lines().filter(|line| line.starts_with(">>")) {
            assert_eq!(line.matches(',').count(), 4, "{line}");
        }
    }

    #[test]
    fn test_boq_sums_quantities_by_material_name() {
        let csv = render_csv(&create_test_report(), "Report", fixed_time()).unwrap();
        let rows = boq_rows(&csv);
        assert_eq!(rows.len(), 2);
        // 2 kg per m² over 4 m² in the shed, 3 kg per m² over 2 m² in the house
        assert_eq!(rows[0].0, "Brick. clay");
        assert_relative_eq!(rows[0].1, 14.0);
        assert_eq!(rows[0].2, "kg");
        assert_eq!(rows[1].0, "Carpet");
        assert_relative_eq!(rows[1].1, 2.0);
    }

    /// Name and quantity of every material row in the built asset and assembly blocks
    fn material_rows(csv: &str) -> Vec<(String, f64)> {
        csv.lines()
            .skip_while(|line| !line.starts_with("*** BREAKDOWN"))
            .take_while(|line| *line != BOQ_TITLE)
            .filter(|line| !line.is_empty() && !line.starts_with(['*', ',', '<', '>']))
            .map(|line| {
                let fields: Vec<&str> = line.split(',').collect();
                (fields[0].to_string(), fields[4].parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_boq_matches_material_rows() {
        let floor = wall("Floor", vec![(material("Brick, clay", "1001"), 1.5)], vec![2.0, 1.0]);
        let empty = wall("Empty wall", vec![(material("Brick, clay", "1001"), 1.0)], vec![]);
        let settings = AnalysisSettings {
            period_of_analysis: Some(50),
            ..Default::default()
        };
        let report = create_test_report();
        let mut inputs: Vec<AnalysisMember> = vec![floor.into(), empty.into(), report.built_assets()[0].clone().into()];
        inputs.extend(report.loose_assemblies().into_iter().cloned().map(AnalysisMember::from));
        let analysis = process_inputs(inputs, &settings).unwrap().unwrap();
        let csv = render_csv(&analysis, "Report", fixed_time()).unwrap();

        let mut summed: IndexMap<String, f64> = IndexMap::new();
        for (name, quantity) in material_rows(&csv) {
            *summed.entry(name).or_default() += quantity;
        }
        let boq = boq_rows(&csv);
        assert_eq!(summed.len(), boq.len());
        for (name, quantity, _) in boq {
            assert_relative_eq!(summed[&name], quantity, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_commas_in_functional_units_are_replaced() {
        let board = Arc::new(
            MaterialModel::new(NewMaterial::custom(Some("Board"), "sheet, 2.4m", 1.0, 1.0, 1.0)).unwrap(),
        );
        let lining = wall("Lining", vec![(board, 0.5)], vec![4.0]);
        let analysis = AnalysisModel::new(NewAnalysis::named("Report", None), vec![lining.into()]).unwrap();
        let csv = render_csv(&analysis, "Report", fixed_time()).unwrap();

        let row = csv.lines().find(|line| line.starts_with("Board,")).unwrap();
        assert_eq!(row, "Board,,,,2,sheet. 2.4m,");
        assert_eq!(row.split(',').count(), 7);

        let boq = csv.lines().skip_while(|line| *line != BOQ_HEADER).nth(1).unwrap();
        assert_eq!(boq, "Board, 2, sheet. 2.4m");
        assert_eq!(boq.split(", ").count(), 3);
    }

    #[test]
    fn test_empty_assemblies_are_skipped() {
        let empty = wall("Empty wall", vec![(material("Brick, clay", "1001"), 1.0)], vec![]);
        let analysis = AnalysisModel::new(NewAnalysis::named("Report", None), vec![empty.into()]).unwrap();
        let csv = render_csv(&analysis, "Report", fixed_time()).unwrap();
        assert!(csv.contains("*** BREAKDOWN BY ASSEMBLIES ***"));
        assert!(!csv.contains("<Empty wall"));
        assert!(!csv.contains("*** BREAKDOWN BY BUILT ASSET ***"));
    }

    #[test]
    fn test_export_writes_versioned_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::new(dir.path());
        let report = create_test_report();

        let first = export_csv(&report, Some("Tower"), &config).unwrap();
        let second = export_csv(&report, Some("Tower"), &config).unwrap();
        let third = export_csv(&report, None, &config).unwrap();

        assert!(first.starts_with(WRITE_SUCCEEDED));
        assert!(first.ends_with("Tower.csv"));
        assert!(second.ends_with("Tower_2.csv"));
        assert!(third.ends_with("Analysis Report.csv"));

        let written = fs::read_to_string(dir.path().join("Tower_2.csv")).unwrap();
        let rows = boq_rows(&written);
        assert_relative_eq!(rows[0].1, 14.0);
    }

    #[test]
    fn test_versioning_stops_at_max_versions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Tower.csv", "Tower_2.csv", "Tower_3.csv"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(versioned_path(dir.path(), "Tower", 50), dir.path().join("Tower_4.csv"));
        assert_eq!(versioned_path(dir.path(), "Tower", 3), dir.path().join("Tower_3.csv"));
    }

    #[test]
    fn test_missing_folder_is_a_validation_error() {
        let result = export_csv(&create_test_report(), Some("Tower"), &ExportConfig::default());
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[test]
    fn test_unwritable_folder_gives_failure_message() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-created");
        let message = export_csv(&create_test_report(), Some("Tower"), &ExportConfig::new(&missing)).unwrap();
        assert_eq!(message, format!("{FAILED_TO_WRITE}{}", missing.display()));
    }
}
