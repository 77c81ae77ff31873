/// Number of replacement cycles of an item within a period of analysis.
///
/// Returns 0 when the item is never replaced (`service_life` is `None` or 0) or
/// outlasts the period. An item reaching the end of its life exactly at the end of
/// the period is not replaced.
///
/// # Arguments
/// * `period` - Period of analysis in years
/// * `service_life` - Service life in years
pub fn num_replacements(period: u32, service_life: Option<u32>) -> u32 {
    match service_life {
        None | Some(0) => 0,
        Some(life) if life >= period => 0,
        Some(life) if period % life == 0 => period / life - 1,
        Some(life) => period / life,
    }
}

/// Cumulative number of installed instances for each year of the period.
///
/// The sequence starts at 1 (or 0 without the initial installation) and increases
/// by one at every year index where a replacement takes place.
///
/// # Returns
/// A vector of length `period`
pub fn accumulated_instance_count(period: u32, service_life: Option<u32>, include_initial: bool) -> Vec<u32> {
    let start = u32::from(include_initial);
    let mut counts = vec![start; period as usize];

    let replacements = num_replacements(period, service_life);
    if let Some(life) = service_life {
        for replacement in 1..=replacements {
            let from = (replacement * life) as usize;
            for count in counts.iter_mut().skip(from) {
                *count += 1;
            }
        }
    }
    counts
}
