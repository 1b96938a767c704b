//! Static legend derived from the plan set. Pure construction, no I/O.

use crate::marker::route_color;
use crate::model::RoutePlan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub driver_label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendSpec {
    pub entries: Vec<LegendEntry>,
    /// Whether to show the missed-address indicator row.
    pub show_missed: bool,
}

pub fn build(plans: &[RoutePlan], has_missed_addresses: bool) -> LegendSpec {
    let entries = plans
        .iter()
        .map(|plan| LegendEntry {
            driver_label: plan.driver_label.clone(),
            color: route_color(plan.color_index),
        })
        .collect();

    LegendSpec {
        entries,
        show_missed: has_missed_addresses,
    }
}
