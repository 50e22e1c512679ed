use crate::presentation::{CityComparison, CityData, PropertyMetrics};
use crate::render::format::{
    change_color, escape_html, format_count, format_price_millions, format_signed_pct,
};

/// Dot colour of each compared area, in request order
pub const CITY_COLORS: [&str; 3] = ["#3B82F6", "#8B5CF6", "#EC4899"];

const HEADER_CELL: &str = "padding: 12px 16px; font-size: 11px; font-weight: 700; color: #374151; text-transform: uppercase; letter-spacing: 0.5px;";

fn metric_row(
    city_idx: usize,
    city_name: &str,
    label: &str,
    metrics: &PropertyMetrics,
    is_main: bool,
) -> String {
    let color = CITY_COLORS[city_idx % CITY_COLORS.len()];
    let background = if city_idx % 2 == 0 { "#ffffff" } else { "#f9fafb" };
    let border_top = if is_main {
        "border-top: 2px solid #9ca3af;"
    } else {
        ""
    };
    let (weight, size) = if is_main { ("700", "14px") } else { ("600", "13px") };

    let name_cell = if is_main {
        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0"><tr>
                <td style="width: 22px;"><div style="width: 12px; height: 12px; border-radius: 50%; background-color: {color};"></div></td>
                <td><div style="font-weight: 700; font-size: 14px; color: #111827;">{city_name}</div><div style="font-size: 11px; color: #6b7280; text-transform: uppercase;">{label}</div></td>
            </tr></table>"#
        )
    } else {
        format!(r#"<div style="padding-left: 24px; font-size: 12px; color: #374151;">{label}</div>"#)
    };

    let value_cell = |value: String| {
        format!(
            r#"<td style="padding: 12px 16px; text-align: center; border-right: 1px solid #e5e7eb;"><span style="font-weight: {weight}; font-size: {size}; color: #111827;">{value}</span></td>"#
        )
    };
    let change_cell = |value: Option<f64>, last: bool| {
        let border = if last { "" } else { " border-right: 1px solid #e5e7eb;" };
        format!(
            r#"<td style="padding: 12px 16px; text-align: center;{border}"><span style="font-weight: 700; font-size: 12px; color: {color};">{text}</span></td>"#,
            color = change_color(value),
            text = format_signed_pct(value),
        )
    };

    format!(
        r#"
                <tr style="background-color: {background}; {border_top} border-bottom: 1px solid #e5e7eb;">
                    <td style="padding: 12px 16px; border-right: 1px solid #e5e7eb;">{name_cell}</td>
                    {active}
                    {sales}
                    {price}
                    {mom}
                    {yoy}
                </tr>"#,
        active = value_cell(format_count(metrics.active_listings)),
        sales = value_cell(format_count(metrics.total_sales)),
        price = value_cell(format_price_millions(metrics.benchmark_price)),
        mom = change_cell(metrics.mom_change, false),
        yoy = change_cell(metrics.yoy_change, true),
    )
}

fn city_rows(city_idx: usize, city: &CityData) -> String {
    let name = escape_html(&city.name);
    [
        ("Overall", &city.overall, true),
        ("Detached", &city.detached, false),
        ("Townhouse", &city.townhouse, false),
        ("Apartment", &city.apartment, false),
    ]
    .into_iter()
    .map(|(label, metrics, is_main)| metric_row(city_idx, &name, label, metrics, is_main))
    .collect()
}

/// One table row per area and property type, with a market summary footer
pub fn city_comparison_html(comparison: &CityComparison) -> String {
    let rows: String = comparison
        .cities
        .iter()
        .enumerate()
        .map(|(idx, city)| city_rows(idx, city))
        .collect();
    let period = escape_html(&format!("{} {}", comparison.month, comparison.year));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>City Comparison Report</title>
</head>
<body style="margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background-color: #f3f4f6; padding: 40px 20px;">
    <table cellpadding="0" cellspacing="0" border="0" width="100%" style="max-width: 900px; margin: 0 auto; background: #ffffff; border-radius: 8px; overflow: hidden; border: 1px solid #e5e7eb;">
        <tr>
            <td style="background: linear-gradient(135deg, #2563eb 0%, #4f46e5 100%); color: white; padding: 24px 32px;">
                <table cellpadding="0" cellspacing="0" border="0" width="100%"><tr>
                    <td style="vertical-align: middle;">
                        <h1 style="font-size: 24px; font-weight: 700; margin: 0; letter-spacing: -0.5px;">Greater Vancouver Market Comparison</h1>
                        <p style="font-size: 14px; margin: 6px 0 0 0; opacity: 0.9;">{period}</p>
                    </td>
                    <td style="text-align: right; vertical-align: middle;">
                        <div style="font-size: 13px; font-weight: 600; opacity: 0.9;">Official Report</div>
                        <div style="font-size: 12px; opacity: 0.8; margin-top: 2px;">Real Estate Board</div>
                    </td>
                </tr></table>
            </td>
        </tr>
        <tr>
            <td style="padding: 0;">
                <table cellpadding="0" cellspacing="0" border="0" width="100%" style="border-collapse: collapse;">
                    <tr style="background-color: #f9fafb; border-bottom: 2px solid #9ca3af;">
                        <th style="{HEADER_CELL} text-align: left; border-right: 1px solid #e5e7eb;">City / Type</th>
                        <th style="{HEADER_CELL} text-align: center; border-right: 1px solid #e5e7eb;">Active Listings</th>
                        <th style="{HEADER_CELL} text-align: center; border-right: 1px solid #e5e7eb;">Total Sales</th>
                        <th style="{HEADER_CELL} text-align: center; border-right: 1px solid #e5e7eb;">Benchmark Price</th>
                        <th style="{HEADER_CELL} text-align: center; border-right: 1px solid #e5e7eb;">MoM Change (%)</th>
                        <th style="{HEADER_CELL} text-align: center;">YoY Change (%)</th>
                    </tr>{rows}
                </table>
            </td>
        </tr>
        <tr>
            <td style="background-color: #f9fafb; padding: 24px 32px; border-top: 2px solid #e5e7eb;">
                <div style="margin-bottom: 12px;">
                    <p style="font-size: 11px; font-weight: 700; color: #374151; text-transform: uppercase; letter-spacing: 0.5px; margin: 0 0 6px 0;">Market Summary</p>
                    <p style="font-size: 14px; color: #374151; line-height: 1.6; margin: 0;">{summary}</p>
                </div>
                <div style="padding-top: 12px; border-top: 1px solid #e5e7eb; font-size: 11px; color: #6b7280;">
                    <p style="margin: 0;">Source: Greater Vancouver Real Estate Board &bull; Generated: {period}</p>
                </div>
            </td>
        </tr>
    </table>
</body>
</html>"#,
        summary = escape_html(&comparison.summary),
    )
}
