//! Bundled sample rows drawn from the public restaurant tips dataset.

use tipboard_types::{Day, MealTime, Record, Sex};

use Day::{Fri, Sat, Sun, Thu};
use MealTime::{Dinner, Lunch};
use Sex::{Female, Male};

const fn row(total_bill: f64, tip: f64, sex: Sex, day: Day, time: MealTime) -> Record {
    Record {
        total_bill,
        tip,
        sex,
        day,
        time,
    }
}

pub static SAMPLE_TIPS: &[Record] = &[
    // ─────────────────────────────────────────────────────────────────────────
    // Sunday dinner
    // ─────────────────────────────────────────────────────────────────────────
    row(16.99, 1.01, Female, Sun, Dinner),
    row(10.34, 1.66, Male, Sun, Dinner),
    row(21.01, 3.50, Male, Sun, Dinner),
    row(23.68, 3.31, Male, Sun, Dinner),
    row(24.59, 3.61, Female, Sun, Dinner),
    row(25.29, 4.71, Male, Sun, Dinner),
    row(8.77, 2.00, Male, Sun, Dinner),
    row(26.88, 3.12, Male, Sun, Dinner),
    row(15.04, 1.96, Male, Sun, Dinner),
    row(14.78, 3.23, Male, Sun, Dinner),
    row(10.27, 1.71, Male, Sun, Dinner),
    row(35.26, 5.00, Female, Sun, Dinner),
    row(15.42, 1.57, Male, Sun, Dinner),
    row(18.43, 3.00, Male, Sun, Dinner),
    row(14.83, 3.02, Female, Sun, Dinner),
    row(21.58, 3.92, Male, Sun, Dinner),
    row(10.33, 1.67, Female, Sun, Dinner),
    row(16.29, 3.71, Male, Sun, Dinner),
    row(16.97, 3.50, Female, Sun, Dinner),
    // ─────────────────────────────────────────────────────────────────────────
    // Saturday dinner
    // ─────────────────────────────────────────────────────────────────────────
    row(20.65, 3.35, Male, Sat, Dinner),
    row(17.92, 4.08, Male, Sat, Dinner),
    row(20.29, 2.75, Female, Sat, Dinner),
    row(15.77, 2.23, Female, Sat, Dinner),
    row(39.42, 7.58, Male, Sat, Dinner),
    row(19.82, 3.18, Male, Sat, Dinner),
    row(17.81, 2.34, Male, Sat, Dinner),
    row(13.37, 2.00, Male, Sat, Dinner),
    row(12.69, 2.00, Male, Sat, Dinner),
    row(21.70, 4.30, Male, Sat, Dinner),
    row(19.65, 3.00, Female, Sat, Dinner),
    row(9.55, 1.45, Male, Sat, Dinner),
    row(18.35, 2.50, Male, Sat, Dinner),
    row(15.06, 3.00, Female, Sat, Dinner),
    row(20.69, 2.45, Female, Sat, Dinner),
    row(17.78, 3.27, Male, Sat, Dinner),
    // ─────────────────────────────────────────────────────────────────────────
    // Thursday lunch
    // ─────────────────────────────────────────────────────────────────────────
    row(27.20, 4.00, Male, Thu, Lunch),
    row(22.76, 3.00, Male, Thu, Lunch),
    row(17.29, 2.71, Male, Thu, Lunch),
    row(19.44, 3.00, Male, Thu, Lunch),
    row(16.66, 3.40, Male, Thu, Lunch),
    row(10.07, 1.83, Female, Thu, Lunch),
    row(32.68, 5.00, Male, Thu, Lunch),
    row(15.98, 2.03, Male, Thu, Lunch),
    row(34.83, 5.17, Female, Thu, Lunch),
    row(13.03, 2.00, Male, Thu, Lunch),
    row(18.28, 4.00, Male, Thu, Lunch),
    row(24.71, 5.85, Male, Thu, Lunch),
    row(21.16, 3.00, Male, Thu, Lunch),
    // ─────────────────────────────────────────────────────────────────────────
    // Friday
    // ─────────────────────────────────────────────────────────────────────────
    row(28.97, 3.00, Male, Fri, Dinner),
    row(22.49, 3.50, Male, Fri, Dinner),
    row(5.75, 1.00, Female, Fri, Dinner),
    row(16.32, 4.30, Female, Fri, Dinner),
    row(22.75, 3.25, Female, Fri, Dinner),
    row(40.17, 4.73, Male, Fri, Dinner),
    row(27.28, 4.00, Male, Fri, Dinner),
    row(12.03, 1.50, Male, Fri, Dinner),
    row(12.16, 2.20, Male, Fri, Lunch),
    row(13.42, 3.48, Female, Fri, Lunch),
    row(8.58, 1.92, Male, Fri, Lunch),
    row(15.98, 3.00, Female, Fri, Lunch),
    row(13.42, 1.58, Male, Fri, Lunch),
    // Thursday dinner is a single row in the full dataset
    row(18.78, 3.00, Female, Thu, Dinner),
];
