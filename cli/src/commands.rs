use std::io::Write;
use std::str::FromStr;

use tipboard_core::{BillRange, DashboardConfigExt, InputError, MealTime, Sex, UnknownLabel};

use crate::CliContext;
use crate::display;

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

/// Parse every label or fail on the first unknown one.
fn parse_labels<T>(labels: &[String]) -> Result<Vec<T>, InputError>
where
    T: FromStr<Err = UnknownLabel>,
{
    labels
        .iter()
        .map(|l| l.parse::<T>().map_err(InputError::from))
        .collect()
}

fn report_unchanged(changed: bool) {
    if !changed {
        println!("Filters unchanged");
    }
}

/// Move the bill slider. Rejects ranges the slider could not produce.
pub fn set_bill(ctx: &mut CliContext, min: f64, max: f64) -> Result<bool, String> {
    let range = BillRange::new(min, max);
    ctx.dashboard
        .dataset()
        .check_bill_range(range)
        .map_err(|e| e.to_string())?;
    let changed = ctx.dashboard.set_bill_range(range);
    report_unchanged(changed);
    Ok(changed)
}

/// Replace the gender selection. An empty list deselects everything.
pub fn set_genders(ctx: &mut CliContext, labels: &[String]) -> Result<bool, String> {
    let genders = parse_labels::<Sex>(labels).map_err(|e| e.to_string())?;
    let changed = ctx.dashboard.set_genders(genders);
    report_unchanged(changed);
    Ok(changed)
}

/// Replace the service time selection. An empty list deselects everything.
pub fn set_times(ctx: &mut CliContext, labels: &[String]) -> Result<bool, String> {
    let times = parse_labels::<MealTime>(labels).map_err(|e| e.to_string())?;
    let changed = ctx.dashboard.set_times(times);
    report_unchanged(changed);
    Ok(changed)
}

pub fn reset(ctx: &mut CliContext) -> bool {
    let initial = ctx.initial_state().clone();
    let changed = ctx.dashboard.set_state(initial);
    report_unchanged(changed);
    changed
}

pub fn show(ctx: &CliContext) {
    let symbol = ctx.currency();
    let result = ctx.dashboard.aggregates();

    println!("{}", ctx.config.title);
    println!("{}", "-".repeat(40));
    print_lines(display::filter_lines(ctx.dashboard.state(), symbol));
    println!();
    print_lines(display::value_boxes(result, symbol));
    println!();
    print_lines(display::gender_lines(&result.gender_summary, symbol));
    println!();
    print_lines(display::day_lines(&result.day_summary, symbol));
}

pub fn show_table(ctx: &CliContext, limit: Option<usize>) {
    let limit = limit.unwrap_or(ctx.config.table_preview_rows);
    print_lines(display::table_lines(
        ctx.dashboard.view().rows(),
        limit,
        ctx.currency(),
    ));
}

pub fn show_state(ctx: &CliContext) {
    print_lines(display::filter_lines(ctx.dashboard.state(), ctx.currency()));
    let stats = ctx.dashboard.memo_stats();
    println!(
        "generation {} | memo hits {} misses {} entries {}",
        ctx.dashboard.generation(),
        stats.hits,
        stats.misses,
        stats.entries
    );
}

/// Current state and aggregates as JSON for other display surfaces.
pub fn snapshot_json(ctx: &CliContext) -> Result<String, String> {
    let snapshot = serde_json::json!({
        "generation": ctx.dashboard.generation(),
        "state": ctx.dashboard.state(),
        "aggregates": ctx.dashboard.aggregates(),
    });
    serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())
}

pub fn show_config(ctx: &CliContext) -> Result<(), String> {
    match tipboard_core::DashboardConfig::path() {
        Ok(path) => println!("config file: {}", path.display()),
        Err(e) => println!("config file: unavailable ({e})"),
    }
    let text = serde_json::to_string_pretty(&ctx.config).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

pub fn exit() -> Result<(), String> {
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipboard_core::{DashboardConfig, Dataset};

    fn ctx() -> CliContext {
        CliContext::new(DashboardConfig::default(), Dataset::sample())
    }

    #[test]
    fn test_bill_outside_bounds_is_rejected() {
        let mut ctx = ctx();
        assert!(set_bill(&mut ctx, 1.0, 20.0).is_err());
        assert!(set_bill(&mut ctx, 20.0, 10.0).is_err());
        assert_eq!(ctx.dashboard.generation(), 0);
        assert_eq!(set_bill(&mut ctx, 10.0, 20.0), Ok(true));
        assert_eq!(set_bill(&mut ctx, 10.0, 20.0), Ok(false));
    }

    #[test]
    fn test_labels_are_validated() {
        let mut ctx = ctx();
        let err = set_genders(&mut ctx, &["male".into(), "robot".into()]).unwrap_err();
        assert_eq!(err, "unknown sex 'robot'");
        assert_eq!(ctx.dashboard.generation(), 0);

        assert_eq!(set_times(&mut ctx, &["LUNCH".into()]), Ok(true));
        assert_eq!(ctx.dashboard.aggregates().guest_count, 18);
    }

    #[test]
    fn test_unknown_label_is_an_input_error() {
        let err = parse_labels::<MealTime>(&["brunch".into()]).unwrap_err();
        assert!(matches!(err, InputError::Label(ref l) if l.label == "brunch"));
        assert_eq!(
            parse_labels::<MealTime>(&["dinner".into(), "Lunch".into()]),
            Ok(vec![MealTime::Dinner, MealTime::Lunch])
        );
    }

    #[test]
    fn test_nan_bill_range_is_rejected() {
        let mut ctx = ctx();
        assert!(set_bill(&mut ctx, f64::NAN, f64::NAN).is_err());
        assert!(set_bill(&mut ctx, 10.0, f64::INFINITY).is_err());
        assert_eq!(ctx.dashboard.generation(), 0);
    }

    #[test]
    fn test_empty_selection_then_reset() {
        let mut ctx = ctx();
        assert_eq!(set_genders(&mut ctx, &[]), Ok(true));
        assert_eq!(ctx.dashboard.aggregates().guest_count, 0);
        assert!(reset(&mut ctx));
        assert_eq!(ctx.dashboard.aggregates().guest_count, 62);
        assert!(!reset(&mut ctx));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut ctx = ctx();
        set_genders(&mut ctx, &["female".into()]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&snapshot_json(&ctx).unwrap()).unwrap();
        assert_eq!(json["generation"], 1);
        assert_eq!(json["state"]["genders"], serde_json::json!(["Female"]));
        assert!(json["aggregates"]["guest_count"].as_u64().unwrap() > 0);
        assert_eq!(
            json["aggregates"]["gender_summary"].as_array().unwrap().len(),
            1
        );
    }
}
