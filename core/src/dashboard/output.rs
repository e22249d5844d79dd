use std::sync::Arc;

use tipboard_types::{AggregateResult, DayTip, GenderTip, Stat};

use crate::aggregate;
use crate::filter::FilteredView;

/// Named display outputs, each fed by the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputId {
    GuestCount,
    AvgTipPct,
    AvgBill,
    ShowData,
    GenderSummary,
    DaySummary,
}

impl OutputId {
    pub const ALL: [OutputId; 6] = [
        OutputId::GuestCount,
        OutputId::AvgTipPct,
        OutputId::AvgBill,
        OutputId::ShowData,
        OutputId::GenderSummary,
        OutputId::DaySummary,
    ];

    /// Output slot name a display binds to
    pub fn name(&self) -> &'static str {
        match self {
            OutputId::GuestCount => "guests_count",
            OutputId::AvgTipPct => "avg_tip_pct",
            OutputId::AvgBill => "avg_bill",
            OutputId::ShowData => "show_data",
            OutputId::GenderSummary => "plot_tips_by_gender",
            OutputId::DaySummary => "day_plot",
        }
    }

    /// Run this output's view over `view`.
    pub fn compute(&self, view: &Arc<FilteredView>) -> OutputUpdate {
        match self {
            OutputId::GuestCount => OutputUpdate::GuestCount(aggregate::guest_count(view)),
            OutputId::AvgTipPct => OutputUpdate::AvgTipPct(aggregate::avg_tip_pct(view)),
            OutputId::AvgBill => OutputUpdate::AvgBill(aggregate::avg_bill(view)),
            OutputId::ShowData => OutputUpdate::ShowData(Arc::clone(view)),
            OutputId::GenderSummary => {
                OutputUpdate::GenderSummary(aggregate::gender_summary(view))
            }
            OutputId::DaySummary => OutputUpdate::DaySummary(aggregate::day_summary(view)),
        }
    }
}

/// A freshly computed output value.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputUpdate {
    GuestCount(usize),
    AvgTipPct(Stat),
    AvgBill(Stat),
    /// Shares the session's filtered view; rows are not copied
    ShowData(Arc<FilteredView>),
    GenderSummary(Vec<GenderTip>),
    DaySummary(Vec<DayTip>),
}

impl OutputUpdate {
    pub fn id(&self) -> OutputId {
        match self {
            OutputUpdate::GuestCount(_) => OutputId::GuestCount,
            OutputUpdate::AvgTipPct(_) => OutputId::AvgTipPct,
            OutputUpdate::AvgBill(_) => OutputId::AvgBill,
            OutputUpdate::ShowData(_) => OutputId::ShowData,
            OutputUpdate::GenderSummary(_) => OutputId::GenderSummary,
            OutputUpdate::DaySummary(_) => OutputId::DaySummary,
        }
    }

    /// Store this value into its slot of `result`.
    pub fn apply_to(&self, result: &mut AggregateResult) {
        match self {
            OutputUpdate::GuestCount(n) => result.guest_count = *n,
            OutputUpdate::AvgTipPct(s) => result.avg_tip_pct = *s,
            OutputUpdate::AvgBill(s) => result.avg_bill = *s,
            OutputUpdate::ShowData(_) => {}
            OutputUpdate::GenderSummary(v) => result.gender_summary = v.clone(),
            OutputUpdate::DaySummary(v) => result.day_summary = v.clone(),
        }
    }
}
