//! Shared value types for tipboard
//!
//! This crate contains the serializable types that flow between the dashboard
//! engine (tipboard-core) and any display surface (tipboard-cli).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Category Columns
// ─────────────────────────────────────────────────────────────────────────────

/// Error returned when a category label does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    pub column: &'static str,
    pub label: String,
}

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.column, self.label)
    }
}

impl std::error::Error for UnknownLabel {}

/// Server gender.
///
/// Ordered `Female < Male`, the order grouped summaries are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

impl FromStr for Sex {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Sex::Female),
            "male" | "m" => Ok(Sex::Male),
            _ => Err(UnknownLabel {
                column: "sex",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of the visit. Only the four days present in the dataset exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "Thur", alias = "Thu")]
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// Fixed category order used by the day summary.
    pub const ALL: [Day; 4] = [Day::Thu, Day::Fri, Day::Sat, Day::Sun];

    /// Dataset label (Thursday is "Thur" in the tips data)
    pub fn label(&self) -> &'static str {
        match self {
            Day::Thu => "Thur",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl FromStr for Day {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thu" | "thur" | "thursday" => Ok(Day::Thu),
            "fri" | "friday" => Ok(Day::Fri),
            "sat" | "saturday" => Ok(Day::Sat),
            "sun" | "sunday" => Ok(Day::Sun),
            _ => Err(UnknownLabel {
                column: "day",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Meal service time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealTime {
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 2] = [MealTime::Lunch, MealTime::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
        }
    }
}

impl FromStr for MealTime {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lunch" => Ok(MealTime::Lunch),
            "dinner" => Ok(MealTime::Dinner),
            _ => Err(UnknownLabel {
                column: "time",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rows
// ─────────────────────────────────────────────────────────────────────────────

/// One immutable observation from the tips dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: Sex,
    pub day: Day,
    pub time: MealTime,
}

impl Record {
    pub fn new(total_bill: f64, tip: f64, sex: Sex, day: Day, time: MealTime) -> Self {
        Self {
            total_bill,
            tip,
            sex,
            day,
            time,
        }
    }
}

/// A record that passed the filter, with its tip percentage attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipRow {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: Sex,
    pub day: Day,
    pub time: MealTime,
    /// `tip / total_bill` as a fraction, unrounded
    pub tip_pct: f64,
}

impl From<&Record> for TipRow {
    fn from(r: &Record) -> Self {
        Self {
            total_bill: r.total_bill,
            tip: r.tip,
            sex: r.sex,
            day: r.day,
            time: r.time,
            tip_pct: r.tip / r.total_bill,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter Inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Inclusive bill-amount range. Callers keep `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillRange {
    pub min: f64,
    pub max: f64,
}

impl BillRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, bill: f64) -> bool {
        self.min <= bill && bill <= self.max
    }
}

/// The three current input values of a dashboard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub bill_range: BillRange,
    pub genders: BTreeSet<Sex>,
    pub times: BTreeSet<MealTime>,
}

impl FilterState {
    pub fn new(
        bill_range: BillRange,
        genders: impl IntoIterator<Item = Sex>,
        times: impl IntoIterator<Item = MealTime>,
    ) -> Self {
        Self {
            bill_range,
            genders: genders.into_iter().collect(),
            times: times.into_iter().collect(),
        }
    }

    /// Every gender and time selected over the given range.
    pub fn all(bill_range: BillRange) -> Self {
        Self::new(bill_range, Sex::ALL, MealTime::ALL)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Aggregate Results
// ─────────────────────────────────────────────────────────────────────────────

/// A scalar that is undefined over an empty view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Value(f64),
    #[default]
    NotAvailable,
}

impl Stat {
    pub fn value(&self) -> Option<f64> {
        match self {
            Stat::Value(v) => Some(*v),
            Stat::NotAvailable => None,
        }
    }
}

/// Mean tip for one server gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderTip {
    pub sex: Sex,
    pub mean_tip: f64,
}

/// Total tips for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTip {
    pub day: Day,
    pub total_tip: f64,
}

/// Every summary value derived from one filtered view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateResult {
    pub guest_count: usize,
    pub avg_tip_pct: Stat,
    pub avg_bill: Stat,
    /// Ordered Female, Male; empty when the view is empty
    pub gender_summary: Vec<GenderTip>,
    /// Ordered Thur, Fri, Sat, Sun; days without rows are omitted
    pub day_summary: Vec<DayTip>,
}

/// Labels a display surface needs to draw a grouped summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartLabels {
    pub title: &'static str,
    /// Title shown instead of an empty chart
    pub empty_title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

pub const GENDER_CHART: ChartLabels = ChartLabels {
    title: "Tips by Gender",
    empty_title: "No Data",
    x_label: "sex",
    y_label: "tip",
};

pub const DAY_CHART: ChartLabels = ChartLabels {
    title: "Tips by Day",
    empty_title: "No data",
    x_label: "Day",
    y_label: "Total Tips ($)",
};

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    /// Genders selected when a session starts
    #[serde(default = "default_genders")]
    pub default_genders: Vec<Sex>,
    /// Service times selected when a session starts
    #[serde(default = "default_times")]
    pub default_times: Vec<MealTime>,
    /// Distinct filter states kept in the memo (0 disables caching)
    #[serde(default = "default_memo_capacity")]
    pub memo_capacity: usize,
    #[serde(default = "default_preview_rows")]
    pub table_preview_rows: usize,
}

fn default_title() -> String {
    "Tips Dashboard".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_genders() -> Vec<Sex> {
    Sex::ALL.to_vec()
}

fn default_times() -> Vec<MealTime> {
    MealTime::ALL.to_vec()
}

fn default_memo_capacity() -> usize {
    3
}

fn default_preview_rows() -> usize {
    20
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            currency_symbol: default_currency(),
            default_genders: default_genders(),
            default_times: default_times(),
            memo_capacity: default_memo_capacity(),
            table_preview_rows: default_preview_rows(),
        }
    }
}
