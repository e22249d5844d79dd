//! Aggregation views over a filtered view.
//!
//! Each view is an independent pure function of the [`FilteredView`]; none
//! reads another view's output.

use std::collections::BTreeMap;

use tipboard_types::{AggregateResult, Day, DayTip, GenderTip, Sex, Stat, TipRow};

use crate::filter::FilteredView;

/// Mean of `values`, or N/A when there are none.
fn mean(values: impl Iterator<Item = f64>) -> Stat {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        Stat::NotAvailable
    } else {
        Stat::Value(sum / count as f64)
    }
}

/// Number of rows (guests) in the view.
pub fn guest_count(view: &FilteredView) -> usize {
    view.len()
}

/// Mean tip percentage as a fraction (0.2 = 20%).
pub fn avg_tip_pct(view: &FilteredView) -> Stat {
    mean(view.iter().map(|r| r.tip_pct))
}

pub fn avg_bill(view: &FilteredView) -> Stat {
    mean(view.iter().map(|r| r.total_bill))
}

/// Mean tip per server gender, ordered Female then Male.
pub fn gender_summary(view: &FilteredView) -> Vec<GenderTip> {
    let mut groups: BTreeMap<Sex, (f64, usize)> = BTreeMap::new();
    for row in view {
        let entry = groups.entry(row.sex).or_insert((0.0, 0));
        entry.0 += row.tip;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(sex, (sum, count))| GenderTip {
            sex,
            mean_tip: sum / count as f64,
        })
        .collect()
}

/// Tip total per day in Thur, Fri, Sat, Sun order.
///
/// Days with no rows are left out rather than reported as zero.
pub fn day_summary(view: &FilteredView) -> Vec<DayTip> {
    let mut totals: BTreeMap<Day, f64> = BTreeMap::new();
    for row in view {
        *totals.entry(row.day).or_insert(0.0) += row.tip;
    }
    totals
        .into_iter()
        .map(|(day, total_tip)| DayTip { day, total_tip })
        .collect()
}

/// The raw rows for tabular display.
pub fn show_data(view: &FilteredView) -> &[TipRow] {
    view.rows()
}

/// Run every scalar and grouped view.
pub fn aggregate(view: &FilteredView) -> AggregateResult {
    AggregateResult {
        guest_count: guest_count(view),
        avg_tip_pct: avg_tip_pct(view),
        avg_bill: avg_bill(view),
        gender_summary: gender_summary(view),
        day_summary: day_summary(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::compute;
    use tipboard_types::{BillRange, FilterState, MealTime, Record};

    fn view_of(records: &[Record]) -> FilteredView {
        compute(&FilterState::all(BillRange::new(0.0, 100.0)), records)
    }

    #[test]
    fn test_two_row_example() {
        let view = view_of(&[
            Record::new(10.0, 2.0, Sex::Male, Day::Sat, MealTime::Dinner),
            Record::new(20.0, 4.0, Sex::Female, Day::Sat, MealTime::Dinner),
        ]);
        let result = aggregate(&view);

        assert_eq!(result.guest_count, 2);
        assert!((result.avg_tip_pct.value().unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(result.avg_bill, Stat::Value(15.0));
        assert_eq!(
            result.gender_summary,
            vec![
                GenderTip {
                    sex: Sex::Female,
                    mean_tip: 4.0
                },
                GenderTip {
                    sex: Sex::Male,
                    mean_tip: 2.0
                },
            ]
        );
        assert_eq!(
            result.day_summary,
            vec![DayTip {
                day: Day::Sat,
                total_tip: 6.0
            }]
        );
    }

    #[test]
    fn test_empty_view_is_not_available() {
        let result = aggregate(&FilteredView::default());
        assert_eq!(result.guest_count, 0);
        assert_eq!(result.avg_tip_pct, Stat::NotAvailable);
        assert_eq!(result.avg_bill, Stat::NotAvailable);
        assert!(result.gender_summary.is_empty());
        assert!(result.day_summary.is_empty());
    }

    #[test]
    fn test_day_summary_omits_missing_days() {
        let view = view_of(&[
            Record::new(12.0, 2.0, Sex::Male, Day::Sun, MealTime::Dinner),
            Record::new(18.0, 3.0, Sex::Female, Day::Sat, MealTime::Dinner),
            Record::new(22.0, 4.0, Sex::Male, Day::Sun, MealTime::Dinner),
        ]);
        let days: Vec<Day> = day_summary(&view).iter().map(|d| d.day).collect();
        assert_eq!(days, vec![Day::Sat, Day::Sun]);
        assert_eq!(day_summary(&view)[1].total_tip, 6.0);
    }

    #[test]
    fn test_day_summary_fixed_order() {
        let view = view_of(&[
            Record::new(12.0, 1.0, Sex::Male, Day::Sun, MealTime::Dinner),
            Record::new(12.0, 1.0, Sex::Male, Day::Fri, MealTime::Lunch),
            Record::new(12.0, 1.0, Sex::Male, Day::Thu, MealTime::Lunch),
            Record::new(12.0, 1.0, Sex::Male, Day::Sat, MealTime::Dinner),
        ]);
        let days: Vec<Day> = day_summary(&view).iter().map(|d| d.day).collect();
        assert_eq!(days, Day::ALL.to_vec());
    }

    #[test]
    fn test_gender_summary_single_group() {
        let view = view_of(&[
            Record::new(10.0, 1.0, Sex::Male, Day::Fri, MealTime::Lunch),
            Record::new(10.0, 3.0, Sex::Male, Day::Fri, MealTime::Lunch),
        ]);
        assert_eq!(
            gender_summary(&view),
            vec![GenderTip {
                sex: Sex::Male,
                mean_tip: 2.0
            }]
        );
    }

    #[test]
    fn test_show_data_is_unaggregated() {
        let view = view_of(&[
            Record::new(10.0, 1.0, Sex::Male, Day::Fri, MealTime::Lunch),
            Record::new(10.0, 3.0, Sex::Male, Day::Fri, MealTime::Lunch),
        ]);
        assert_eq!(show_data(&view), view.rows());
        assert_eq!(show_data(&view).len(), 2);
    }
}
