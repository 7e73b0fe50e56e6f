//! Short-scale number formatting for currency and rate displays.

const SUFFIXES: &[&str] = &[
    "", "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No", "Dc", "Ud", "Dd", "Td", "Qd",
    "Qn", "Sxd", "Spd", "Ocd", "Nod",
];

/// Formats a quantity with a short-scale suffix: plain integer below a
/// thousand, two decimals plus suffix above (`1234.5` -> `"1.23K"`).
pub fn fmt_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let mut n = value.abs();
    let mut magnitude = 0;
    while n >= 1000.0 && magnitude < SUFFIXES.len() - 1 {
        n /= 1000.0;
        magnitude += 1;
    }
    if magnitude == 0 {
        format!("{}{}", sign, n as u64)
    } else {
        format!("{}{:.2}{}", sign, n, SUFFIXES[magnitude])
    }
}

/// Formats a duration in whole seconds as `1h 23m 45s`, dropping leading
/// zero units.
pub fn fmt_duration(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
