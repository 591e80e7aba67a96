//! Display formatting shared by every dashboard page.
//!
//! Amounts are rupees and use the Indian digit grouping
//! (`12,34,567`: the last three digits, then groups of two).
//! Nothing here reads the clock; relative formatting takes `now` explicitly.

use chrono::{DateTime, Datelike, Utc};

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Groups the digits of a non-negative integer string the Indian way.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rupee amount without decimals.
///
/// ```
/// use contracts::shared::format::format_currency;
/// assert_eq!(format_currency(1_250_000.0), "₹12,50,000");
/// assert_eq!(format_currency(0.0), "₹0");
/// assert_eq!(format_currency(-500.0), "-₹500");
/// ```
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = group_indian(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-₹{}", digits)
    } else {
        format!("₹{}", digits)
    }
}

/// Plain number with Indian grouping and at most three fractional digits.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{}{}", sign, group_indian(int_part))
    } else {
        format!("{}{}.{}", sign, group_indian(int_part), frac)
    }
}

/// Date as "15 Mar 2024"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Whole calendar months between two instants (`later` >= `earlier`).
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = (later.year() - earlier.year()) as i64 * 12
        + later.month() as i64
        - earlier.month() as i64;
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}

fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", n, many)
    }
}

/// Distance between two instants in words, without suffix.
fn distance_in_words(earlier: DateTime<Utc>, later: DateTime<Utc>) -> String {
    let seconds = (later - earlier).num_seconds();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45 {
        return format!("{} minutes", minutes);
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        return format!("about {}", plural(hours, "hour", "hours"));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return plural(days, "day", "days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return format!("about {}", plural(months, "month", "months"));
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        let nearest = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(nearest, "month", "months");
    }

    let years = months / 12;
    let months_into_year = months % 12;
    if months_into_year < 3 {
        format!("about {}", plural(years, "year", "years"))
    } else if months_into_year < 9 {
        format!("over {}", plural(years, "year", "years"))
    } else {
        format!("almost {}", plural(years + 1, "year", "years"))
    }
}

/// "about 3 hours ago", "in 2 days", "less than a minute ago"
pub fn format_relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if date > now {
        format!("in {}", distance_in_words(now, date))
    } else {
        format!("{} ago", distance_in_words(date, now))
    }
}

/// Rounded percentage of `current` against `target`, `0` for a zero target
pub fn calculate_percentage(current: f64, target: f64) -> i64 {
    if target == 0.0 {
        return 0;
    }
    (current / target * 100.0).round() as i64
}

/// Share of invoiced money already collected, in whole percent
pub fn calculate_collection_rate(paid: f64, total: f64) -> i64 {
    calculate_percentage(paid, total)
}
