//! Display formatting for metric values.
//!
//! Absent values always render as the em-dash placeholder, never as a
//! "null"/"NaN" literal. Whole numbers print without a decimal point, the
//! same way the metrics document writes them.

/// Placeholder shown for any absent metric.
pub const PLACEHOLDER: &str = "—";

/// Fraction in [0,1] rendered as a percentage with one decimal of precision.
/// `0.8567` → `"85.7%"`, `1.0` → `"100%"`.
pub fn percent(x: Option<f64>) -> String {
    match x {
        Some(v) if v.is_finite() => {
            let pct = (v * 1000.0).round() / 10.0;
            if pct == pct.trunc() {
                format!("{}%", pct as i64)
            } else {
                format!("{:.1}%", pct)
            }
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// USD amount with zero fractional digits and comma grouping.
/// `1234.9` → `"$1,235"`.
pub fn currency(x: Option<f64>) -> String {
    match x {
        Some(v) if v.is_finite() => {
            let whole = v.round() as i64;
            let grouped = group_thousands(whole.unsigned_abs());
            if whole < 0 {
                format!("-${}", grouped)
            } else {
                format!("${}", grouped)
            }
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Natural decimal rendering: counts print as integers, fractional values
/// keep their fraction.
pub fn number(x: Option<f64>) -> String {
    match x {
        Some(v) if v.is_finite() => {
            if v == v.trunc() && v.abs() < 1e15 {
                format!("{}", v as i64)
            } else {
                format!("{}", v)
            }
        }
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn text(x: Option<&str>) -> String {
    match x {
        Some(s) => s.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

fn group_thousands(mut n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let mut groups = Vec::new();
    while n >= 1000 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    let mut out = n.to_string();
    for g in groups.iter().rev() {
        out.push(',');
        out.push_str(g);
    }
    out
}
