//! Console rendering of dashboard outputs.

use tipboard_core::{
    AggregateResult, DAY_CHART, DayTip, FilterState, FilteredView, GENDER_CHART, GenderTip,
    OutputHandler, OutputId, OutputUpdate, Stat, TipRow,
};

const NOT_AVAILABLE: &str = "N/A";

/// One-decimal percentage of a fraction ("20.0%")
pub fn format_pct(stat: Stat) -> String {
    match stat {
        Stat::Value(v) => format!("{:.1}%", v * 100.0),
        Stat::NotAvailable => NOT_AVAILABLE.to_string(),
    }
}

/// Two-decimal currency ("$15.00")
pub fn format_currency(stat: Stat, symbol: &str) -> String {
    match stat {
        Stat::Value(v) => format!("{symbol}{v:.2}"),
        Stat::NotAvailable => NOT_AVAILABLE.to_string(),
    }
}

pub fn value_boxes(result: &AggregateResult, symbol: &str) -> Vec<String> {
    vec![
        format!("{:<14}{}", "Guests", result.guest_count),
        format!("{:<14}{}", "Average Tip", format_pct(result.avg_tip_pct)),
        format!(
            "{:<14}{}",
            "Average Bill",
            format_currency(result.avg_bill, symbol)
        ),
    ]
}

pub fn gender_lines(summary: &[GenderTip], symbol: &str) -> Vec<String> {
    if summary.is_empty() {
        return vec![format!("{} [{}]", GENDER_CHART.title, GENDER_CHART.empty_title)];
    }
    let mut lines = vec![format!(
        "{} ({} by {})",
        GENDER_CHART.title, GENDER_CHART.y_label, GENDER_CHART.x_label
    )];
    for g in summary {
        lines.push(format!(
            "  {:<8}{}",
            g.sex.label(),
            format_currency(Stat::Value(g.mean_tip), symbol)
        ));
    }
    lines
}

pub fn day_lines(summary: &[DayTip], symbol: &str) -> Vec<String> {
    if summary.is_empty() {
        return vec![format!("{} [{}]", DAY_CHART.title, DAY_CHART.empty_title)];
    }
    let mut lines = vec![format!(
        "{} ({} by {})",
        DAY_CHART.title, DAY_CHART.y_label, DAY_CHART.x_label
    )];
    for d in summary {
        lines.push(format!(
            "  {:<8}{}",
            d.day.label(),
            format_currency(Stat::Value(d.total_tip), symbol)
        ));
    }
    lines
}

fn row_line(row: &TipRow, symbol: &str) -> String {
    format!(
        "{:>10} {:>8} {:<8}{:<6}{:<8}{:>7}",
        format_currency(Stat::Value(row.total_bill), symbol),
        format_currency(Stat::Value(row.tip), symbol),
        row.sex.label(),
        row.day.label(),
        row.time.label(),
        format_pct(Stat::Value(row.tip_pct)),
    )
}

/// Tabular view, truncated to `limit` rows.
pub fn table_lines(rows: &[TipRow], limit: usize, symbol: &str) -> Vec<String> {
    let mut lines = vec![format!(
        "{:>10} {:>8} {:<8}{:<6}{:<8}{:>7}",
        "total_bill", "tip", "sex", "day", "time", "tip_pct"
    )];
    lines.extend(rows.iter().take(limit).map(|r| row_line(r, symbol)));
    if rows.len() > limit {
        lines.push(format!("... {} more rows", rows.len() - limit));
    }
    lines
}

pub fn filter_lines(state: &FilterState, symbol: &str) -> Vec<String> {
    let join = |labels: Vec<&str>| {
        if labels.is_empty() {
            "(none)".to_string()
        } else {
            labels.join(", ")
        }
    };
    vec![
        format!(
            "Bill Total:     {symbol}{:.2} - {symbol}{:.2}",
            state.bill_range.min, state.bill_range.max
        ),
        format!(
            "Server Gender:  {}",
            join(state.genders.iter().map(|s| s.label()).collect())
        ),
        format!(
            "Service Time:   {}",
            join(state.times.iter().map(|t| t.label()).collect())
        ),
    ]
}

/// Lines for a single pushed output.
pub fn render_update(update: &OutputUpdate, symbol: &str, preview_rows: usize) -> Vec<String> {
    match update {
        OutputUpdate::GuestCount(n) => vec![format!("{:<14}{}", "Guests", n)],
        OutputUpdate::AvgTipPct(s) => vec![format!("{:<14}{}", "Average Tip", format_pct(*s))],
        OutputUpdate::AvgBill(s) => vec![format!(
            "{:<14}{}",
            "Average Bill",
            format_currency(*s, symbol)
        )],
        OutputUpdate::ShowData(view) => table_lines(view.rows(), preview_rows, symbol),
        OutputUpdate::GenderSummary(summary) => gender_lines(summary, symbol),
        OutputUpdate::DaySummary(summary) => day_lines(summary, symbol),
    }
}

/// Prints every subscribed output as soon as a session recomputes it.
pub struct ConsoleDisplay {
    currency_symbol: String,
    preview_rows: usize,
    subscriptions: Vec<OutputId>,
}

impl ConsoleDisplay {
    /// Scalars and summaries only; the table is printed on request.
    pub fn new(currency_symbol: impl Into<String>, preview_rows: usize) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            preview_rows,
            subscriptions: OutputId::ALL
                .into_iter()
                .filter(|id| *id != OutputId::ShowData)
                .collect(),
        }
    }
}

impl OutputHandler for ConsoleDisplay {
    fn handle_output(&mut self, update: &OutputUpdate, _view: &FilteredView) {
        for line in render_update(update, &self.currency_symbol, self.preview_rows) {
            println!("{line}");
        }
    }

    fn subscriptions(&self) -> &[OutputId] {
        &self.subscriptions
    }

    fn on_recompute(&mut self, generation: u64) {
        tracing::debug!(generation, "Rendering updated outputs");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipboard_core::{BillRange, Day, MealTime, Sex};

    #[test]
    fn test_scalar_formats() {
        assert_eq!(format_pct(Stat::Value(0.2)), "20.0%");
        assert_eq!(format_pct(Stat::Value(0.16079)), "16.1%");
        assert_eq!(format_currency(Stat::Value(15.0), "$"), "$15.00");
        assert_eq!(format_currency(Stat::Value(19.7859), "€"), "€19.79");
        assert_eq!(format_pct(Stat::NotAvailable), "N/A");
        assert_eq!(format_currency(Stat::NotAvailable, "$"), "N/A");
    }

    #[test]
    fn test_value_boxes_empty_view() {
        let lines = value_boxes(&AggregateResult::default(), "$");
        assert!(lines[0].ends_with('0'));
        assert!(lines[1].ends_with("N/A"));
        assert!(lines[2].ends_with("N/A"));
    }

    #[test]
    fn test_empty_summaries_show_placeholder() {
        assert_eq!(gender_lines(&[], "$"), vec!["Tips by Gender [No Data]"]);
        assert_eq!(day_lines(&[], "$"), vec!["Tips by Day [No data]"]);
    }

    #[test]
    fn test_day_lines_use_dataset_labels() {
        let lines = day_lines(
            &[
                DayTip {
                    day: Day::Thu,
                    total_tip: 3.0,
                },
                DayTip {
                    day: Day::Sun,
                    total_tip: 6.5,
                },
            ],
            "$",
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Thur") && lines[1].ends_with("$3.00"));
        assert!(lines[2].contains("Sun") && lines[2].ends_with("$6.50"));
    }

    #[test]
    fn test_table_truncates() {
        let row = TipRow {
            total_bill: 10.0,
            tip: 2.0,
            sex: Sex::Male,
            day: Day::Sat,
            time: MealTime::Dinner,
            tip_pct: 0.2,
        };
        let lines = table_lines(&[row; 5], 3, "$");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "... 2 more rows");
        assert!(lines[1].contains("20.0%"));
    }

    #[test]
    fn test_filter_lines_empty_selection() {
        let state = FilterState::new(BillRange::new(5.75, 40.17), [Sex::Female], Vec::<MealTime>::new());
        let lines = filter_lines(&state, "$");
        assert_eq!(lines[0], "Bill Total:     $5.75 - $40.17");
        assert_eq!(lines[1], "Server Gender:  Female");
        assert_eq!(lines[2], "Service Time:   (none)");
    }

    #[test]
    fn test_console_display_skips_table() {
        let display = ConsoleDisplay::new("$", 10);
        assert_eq!(display.subscriptions().len(), OutputId::ALL.len() - 1);
        assert!(!display.subscriptions().contains(&OutputId::ShowData));
    }
}
