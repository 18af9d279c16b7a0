pub const CRORE: f64 = 10_000_000.0;
pub const LAKH: f64 = 100_000.0;
pub const RUPEE: char = '\u{20B9}';

pub fn format_cr(value: f64) -> String {
    let crore = value / CRORE;
    if crore.abs() >= 1.0 {
        format!("{RUPEE}{crore:.2} Cr")
    } else {
        format!("{RUPEE}{:.2} L", value / LAKH)
    }
}

/// Whole rupees with Indian digit grouping, e.g. `12,34,567`.
pub fn format_inr_grouped(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_indian_digits(&digits);
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_rupees(value: f64) -> String {
    format!("{RUPEE}{value:.2}")
}

/// Fraction to a one-decimal percentage, `0.198` -> `19.8%`.
pub fn format_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
