//! Number and text formatting shared by the HTML templates

/// Shown wherever a figure is missing
pub const NOT_AVAILABLE: &str = "N/A";

/// Green used for rising figures
pub const UP_COLOR: &str = "#16a34a";
/// Red used for falling figures
pub const DOWN_COLOR: &str = "#dc2626";
/// Grey used for missing figures
pub const NEUTRAL_COLOR: &str = "#6b7280";

/// Escapes text for use inside HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `1234567` -> `1,234,567`; `1234.5` -> `1,234.5`
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d);
    }

    let sign = if value < 0.0 && rounded.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Listing and sale counts, `N/A` when missing
pub fn format_count(value: Option<f64>) -> String {
    value
        .map(format_thousands)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `1234567` -> `$1.2M`, `N/A` when missing
pub fn format_price_millions(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${:.1}M", v / 1_000_000.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `2.54` -> `+2.5%`, `-5.3` -> `-5.3%`, `N/A` when missing
pub fn format_signed_pct(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{sign}{v:.1}%")
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Green for zero or more, red below zero, grey when missing
pub fn change_color(value: Option<f64>) -> &'static str {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => UP_COLOR,
        Some(v) if v.is_finite() => DOWN_COLOR,
        _ => NEUTRAL_COLOR,
    }
}

/// Badge text of a percentage as written by the model: `+4.2%`, `-25.5%`, `0%`
pub fn format_badge_pct(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value}%")
}
