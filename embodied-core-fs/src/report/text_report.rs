use embodied_core_api::{Flow, FunctionalUnit};
use embodied_core_db::models::analysis::AnalysisModel;
use embodied_core_db::models::assembly::AssemblyModel;
use embodied_core_db::models::flows::FlowTotals;
use embodied_core_db::models::material::MaterialModel;

/// Which flows of an assembly a report shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowsView {
    /// Flows computed when the assembly was built
    AsBuilt,
    /// Flows last applied by an analysis
    AsReported,
}

struct UnitLabels {
    total: &'static str,
    parts: &'static str,
    part: &'static str,
}

fn unit_labels(unit: &FunctionalUnit) -> UnitLabels {
    match unit {
        FunctionalUnit::CubicMetre => UnitLabels {
            total: "Total volume: ",
            parts: "Number of volumes (parts): ",
            part: "Volume: ",
        },
        FunctionalUnit::SquareMetre => UnitLabels {
            total: "Total area: ",
            parts: "Number of surfaces (parts): ",
            part: "Area: ",
        },
        FunctionalUnit::Metre => UnitLabels {
            total: "Total linear meters: ",
            parts: "Number of lines/curves (parts): ",
            part: "Linear meters: ",
        },
        _ => UnitLabels {
            total: "Total number of units: ",
            parts: "Number of units (parts): ",
            part: "Units: ",
        },
    }
}

fn percent(share: Option<f64>) -> String {
    share.map_or_else(|| "n/a".to_string(), |share| format!("{:.0}%", share * 100.0))
}

/// Coefficients and attributes of a material. Custom materials omit the DOI and process shares.
pub fn material_report(material: &MaterialModel) -> String {
    let unit = &material.functional_unit;
    let mut lines = vec![
        format!("<< {} >>", material.name),
        format!("Category: {}", material.category),
        format!("Functional Unit: {unit}"),
        String::new(),
    ];
    for flow in Flow::ALL {
        lines.push(format!(
            "Embodied {} Coefficient: {} {}/{unit}",
            flow.print_name(),
            material.coefficient(flow),
            flow.unit()
        ));
    }

    let service_life = material.service_life.unwrap_or(0);
    if material.wastage > 0.0 || service_life > 0 {
        lines.push(String::new());
        if material.wastage > 0.0 {
            lines.push(format!("Wastage: {}%", material.wastage * 100.0));
        }
        if service_life > 0 {
            lines.push(format!("Service Life: {service_life} years"));
        }
    }

    lines.push(String::new());
    if !material.is_custom() {
        let doi = material.doi.as_ref().map(|doi| doi.as_str()).unwrap_or_default();
        lines.push(format!("DOI: {doi}"));
        lines.push(String::new());
        lines.push("Process-based data proportion of hybrid value".to_string());
        for flow in Flow::ALL {
            lines.push(format!("{}: {}", flow.print_name(), percent(material.process_shares.get(flow))));
        }
    }
    lines.join("\n")
}

fn flow_lines(lines: &mut Vec<String>, totals: &FlowTotals) {
    for flow in Flow::ALL {
        let name = flow.print_name();
        let unit = flow.unit();
        let of_which = |value: f64| format!("--- of which wastage ({unit}): {value}");

        if totals.recurrent[flow] > 0.0 {
            lines.push(format!("Life cycle embodied {name} ({unit}): {}", totals.life_cycle[flow]));
            if totals.life_cycle_wastage[flow] > 0.0 {
                lines.push(of_which(totals.life_cycle_wastage[flow]));
            }
        }
        lines.push(format!("Initial embodied {name} ({unit}): {}", totals.initial[flow]));
        if totals.initial_wastage[flow] > 0.0 {
            lines.push(of_which(totals.initial_wastage[flow]));
        }
        if totals.recurrent[flow] > 0.0 {
            lines.push(format!("Recurrent embodied {name} ({unit}): {}", totals.recurrent[flow]));
        }
        if totals.recurrent_wastage[flow] > 0.0 {
            lines.push(of_which(totals.recurrent_wastage[flow]));
        }
        lines.push(String::new());
    }
}

fn assembly_lines(assembly: &AssemblyModel, view: FlowsView) -> Vec<String> {
    let unit = assembly.assembly_units();
    let labels = unit_labels(unit);
    let mut lines = vec![
        format!("<< {} >>", assembly.name()),
        format!("{}{}{unit}", labels.total, assembly.total_units()),
    ];
    if *unit != FunctionalUnit::Number {
        lines.push(format!("{}{}", labels.parts, assembly.individual_units().len()));
    }
    if let Some(wastage) = assembly.wastage_override() {
        lines.push(format!("Wastage override: {}%", wastage * 100.0));
    }
    if let Some(service_life) = assembly.service_life() {
        lines.push(format!("Service Life override: {service_life} years"));
    }
    if !assembly.comments().is_empty() {
        lines.push(format!("Comments: {}", assembly.comments()));
    }
    lines.push(String::new());

    let flows = match view {
        FlowsView::AsBuilt => assembly.flows(),
        FlowsView::AsReported => assembly.recalculated_flows(),
    };
    flow_lines(&mut lines, &flows.totals);

    lines.push(format!("Materials in assembly: {}", assembly.materials().len()));
    for (number, part) in assembly.materials().iter().enumerate() {
        let material_unit = &part.material.functional_unit;
        lines.push(format!("Material {}: {}", number + 1, part.material.name));
        lines.push(format!("--- Qty: {}{material_unit} / {unit}", part.quantity));
        lines.push(format!("--- Total: {}{material_unit}", part.quantity * assembly.total_units()));
    }
    lines
}

/// Flows, overrides and materials of an assembly.
///
/// With `part_details`, each measured part is listed after the summary, except for
/// assemblies counted in `no.`.
pub fn assembly_report(assembly: &AssemblyModel, view: FlowsView, part_details: bool) -> String {
    let mut lines = assembly_lines(assembly, view);
    let unit = assembly.assembly_units();
    if part_details && *unit != FunctionalUnit::Number {
        let labels = unit_labels(unit);
        let count = assembly.individual_units().len();
        for (number, units) in assembly.individual_units().iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("Assembly Part {} of {count}", number + 1));
            lines.push(format!("{}{units}{unit}", labels.part));
        }
    }
    lines.join("\n")
}

/// Totals of an analysis followed by the as-reported summary of each of its assemblies.
pub fn analysis_report(analysis: &AnalysisModel) -> String {
    let mut lines = vec![format!("<<<{}>>>", analysis.name())];
    if analysis.is_built_asset() {
        lines.push("Built Asset".to_string());
    } else {
        let period = analysis
            .period_of_analysis()
            .map_or_else(|| "None".to_string(), |years| years.to_string());
        lines.push(format!("Assessment duration: {period} years"));
    }
    lines.push(format!("Number of Assemblies: {}", analysis.assemblies().count()));

    let totals = &analysis.flows().totals;
    for flow in Flow::ALL {
        let name = flow.print_name();
        let unit = flow.unit();
        lines.push(format!("Total embodied {name} ({unit}): {}", totals.life_cycle[flow]));
        lines.push(format!("--- of which wastage ({unit}): {}", totals.life_cycle_wastage[flow]));
        lines.push(format!("Initial embodied {name} ({unit}): {}", totals.initial[flow]));
        lines.push(format!("--- of which wastage ({unit}): {}", totals.initial_wastage[flow]));
        lines.push(format!("Recurrent embodied {name} ({unit}): {}", totals.recurrent[flow]));
        lines.push(format!("--- of which wastage ({unit}): {}", totals.recurrent_wastage[flow]));
    }

    for assembly in analysis.assemblies() {
        lines.extend(assembly_lines(assembly, FlowsView::AsReported));
    }
    lines.join("\n")
}
