/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Email friendly infographic templates
//!
//! Everything is inline styled and table based so that mail clients render
//! it the same way `wkhtmltoimage` does.

use crate::constants::DEFAULT_LOCATION_TITLE;
use crate::error::AppError;
use crate::presentation::{BenchmarkNarrative, MainStatistic, ReportPeriod, VisualInfographicData};
use crate::render::format::{escape_html, format_badge_pct};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BADGE_UP_COLOR: &str = "#10b981";
const BADGE_DOWN_COLOR: &str = "#ff6b6b";
const BADGE_UP_BACKGROUND: &str = "rgba(16, 185, 129, 0.15)";
const BADGE_DOWN_BACKGROUND: &str = "rgba(255, 107, 107, 0.15)";
const BLUE_ACCENT: &str = "#06b6d4";
const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?ixlib=rb-4.0.3&auto=format&fit=crop&w=1080&q=80";

const BLUE_ICONS: [&str; 4] = [
    r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"></path><polyline points="9 22 9 12 15 12 15 22"></polyline></svg>"#,
    r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><polygon points="12 2 2 7 12 12 22 7 12 2"></polygon><polyline points="2 17 12 22 22 17"></polyline><polyline points="2 12 12 17 22 12"></polyline></svg>"#,
    r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M20.59 13.41l-7.17 7.17a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"></path><line x1="7" y1="7" x2="7.01" y2="7"></line></svg>"#,
    r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><line x1="12" y1="1" x2="12" y2="23"></line><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"></path></svg>"#,
];

/// Look of an infographic email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTemplate {
    /// Pink gradient header, stats table and dark benchmark band
    #[default]
    Pastel,
    /// Navy header with a 2x2 grid of stat cards
    Blue,
}

impl EmailTemplate {
    /// Renders `data` for `period` with this template
    pub fn render(&self, data: &VisualInfographicData, period: &ReportPeriod) -> String {
        match self {
            EmailTemplate::Pastel => infographic_pastel_html(data, period),
            EmailTemplate::Blue => infographic_blue_html(data, period),
        }
    }
}

impl FromStr for EmailTemplate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pastel" => Ok(EmailTemplate::Pastel),
            "blue" => Ok(EmailTemplate::Blue),
            other => Err(AppError::InvalidInput(format!("unknown template: {other}"))),
        }
    }
}

impl fmt::Display for EmailTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailTemplate::Pastel => write!(f, "pastel"),
            EmailTemplate::Blue => write!(f, "blue"),
        }
    }
}

fn location_title(data: &VisualInfographicData) -> String {
    let title = data
        .location_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_LOCATION_TITLE);
    escape_html(title)
}

fn pastel_stat_row(stat: &MainStatistic) -> String {
    let change = stat.change();
    let (color, background) = if change >= 0.0 {
        (BADGE_UP_COLOR, BADGE_UP_BACKGROUND)
    } else {
        (BADGE_DOWN_COLOR, BADGE_DOWN_BACKGROUND)
    };

    format!(
        r#"
            <tr style="border-bottom: 1px solid rgba(0,0,0,0.08);">
                <td style="padding: 10px 6px; font-weight: 700; color: #1f1f1f; font-size: 11px; text-transform: uppercase; letter-spacing: 0.5px;">{label}</td>
                <td style="padding: 10px 6px; font-weight: 800; font-size: 13.6px; color: #1f1f1f;">{current}</td>
                <td style="padding: 10px 6px; text-align: center;">
                    <span style="font-size: 11px; font-weight: 700; padding: 3px 8px; border-radius: 10px; display: inline-block; color: {color}; background: {background};">{badge}</span>
                </td>
                <td style="padding: 10px 6px; font-size: 10.88px; color: #6b7280; font-weight: 600;">{prev_month}</td>
                <td style="padding: 10px 6px; font-size: 10.88px; color: #6b7280; font-weight: 600;">{prev_year}</td>
            </tr>"#,
        label = escape_html(&stat.label),
        current = escape_html(&stat.current),
        badge = format_badge_pct(change),
        prev_month = escape_html(&stat.prev_month),
        prev_year = escape_html(&stat.prev_year),
    )
}

fn pastel_narrative(item: &BenchmarkNarrative) -> String {
    format!(
        r#"
            <p style="margin: 0 0 12px 0; font-size: 12px; line-height: 1.6; color: rgba(255,255,255,0.95);">
                <strong>{kind}:</strong> At <span style="color: #FFD700; font-weight: 700;">{price}</span>, the {description}
            </p>"#,
        kind = escape_html(&item.property_type),
        price = escape_html(&item.price),
        description = escape_html(&item.description),
    )
}

/// Pastel template: pink header, hero image, stats table, benchmark band
pub fn infographic_pastel_html(data: &VisualInfographicData, period: &ReportPeriod) -> String {
    let stats_rows: String = data.main_statistics.iter().map(pastel_stat_row).collect();
    let narratives: String = data
        .benchmark_price_narratives
        .iter()
        .map(pastel_narrative)
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Market Update - {period}</title>
</head>
<body style="margin: 0; padding: 0; font-family: 'Montserrat', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background-color: #f9fafb;">
    <div style="max-width: 1080px; margin: 0 auto; background: linear-gradient(to bottom, #ffffff 0%, #f9fafb 100%);">
        <div style="background: linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%); color: white; text-align: center; padding: 20px 30px;">
            <h1 style="font-size: 32px; font-weight: 800; margin: 0; letter-spacing: 2px; text-transform: uppercase; text-shadow: 0 2px 10px rgba(0,0,0,0.2);">{location}</h1>
            <div style="height: 3px; width: 70px; background: #FFD700; margin: 6px auto; border-radius: 10px;"></div>
            <h2 style="font-size: 16px; font-weight: 500; margin: 0; letter-spacing: 2.5px; text-transform: uppercase; opacity: 0.95;">REAL ESTATE MARKET UPDATE</h2>
        </div>
        <div style="width: 100%; height: 280px; overflow: hidden;">
            <img src="{hero}" alt="Interior" style="width: 100%; height: 100%; object-fit: cover; display: block;">
        </div>
        <div style="background: rgba(255, 255, 255, 0.98); margin: -200px 40px 0 40px; position: relative; border-radius: 15px; padding: 20px; box-shadow: 0 15px 40px rgba(0,0,0,0.15);">
            <div style="text-align: center; margin-bottom: 15px; font-size: 11.2px; color: #6b7280; font-weight: 600; letter-spacing: 1px; text-transform: uppercase;">AI-Powered Market Intelligence</div>
            <div style="text-align: center; margin-bottom: 12px;">
                <div style="font-size: 11.2px; color: #6b7280; font-weight: 600; text-transform: uppercase; letter-spacing: 1px;">{report_date}</div>
                <div style="font-size: 17.6px; font-weight: 700; color: #1f1f1f; margin-top: 2px;">Market Report</div>
            </div>
            <table style="width: 100%; border-collapse: collapse; margin-bottom: 15px; font-size: 11.2px;">
                <thead>
                    <tr style="background: linear-gradient(135deg, #ff9a9e 0%, #fad0c4 100%); color: white;">
                        <th style="padding: 8px 6px; text-align: left; font-size: 10.4px; text-transform: uppercase;">Metric</th>
                        <th style="padding: 8px 6px; text-align: left; font-size: 10.4px; text-transform: uppercase;">Current</th>
                        <th style="padding: 8px 6px; text-align: center; font-size: 10.4px; text-transform: uppercase;">Change</th>
                        <th style="padding: 8px 6px; text-align: left; font-size: 10.4px; text-transform: uppercase;">Prev Month</th>
                        <th style="padding: 8px 6px; text-align: left; font-size: 10.4px; text-transform: uppercase;">Prev Year</th>
                    </tr>
                </thead>
                <tbody>{stats_rows}
                </tbody>
            </table>
            <div style="text-align: center; font-size: 9.6px; color: #6b7280; font-weight: 600; letter-spacing: 1px; text-transform: uppercase; padding: 10px 0; border-top: 1px solid rgba(215, 25, 32, 0.1);">ALL AREAS &amp; PROPERTIES COMBINED</div>
            <div style="text-align: center; font-size: 8px; color: #9ca3af; margin-top: 4px;">SOURCE: MLS&reg; HOME PRICE INDEX MONTHLY STATISTICS PACKAGE</div>
        </div>
        <div style="background: linear-gradient(135deg, #1a1a1a 0%, #2d2d2d 100%); color: white; padding: 20px 40px; margin-top: 20px;">
            <h4 style="font-size: 16px; font-weight: 700; margin: 0 0 15px 0; text-align: center; text-transform: uppercase; letter-spacing: 1px; color: #FFD700;">MLS&reg; HPI Benchmark Price Activity</h4>
            <div>{narratives}
            </div>
        </div>
        <div style="background: linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%); color: white; padding: 15px 30px; text-align: center;">
            <h2 style="font-size: 19.2px; font-weight: 800; margin: 0 0 6px 0; letter-spacing: 2px; text-transform: uppercase;">REALTY GENIE</h2>
            <p style="font-size: 12px; margin: 0 0 10px 0; opacity: 0.9;">Empowering Real Estate Professionals with AI-Driven Insights</p>
            <div style="font-size: 11.2px; margin-bottom: 10px;">
                <a href="mailto:info@realtygenie.co" style="color: white; font-weight: 700; text-decoration: none;">info@realtygenie.co</a>
                <span style="margin: 0 8px;">&bull;</span>
                <a href="https://www.realtygenie.co" style="color: white; font-weight: 700; text-decoration: none;">www.realtygenie.co</a>
            </div>
            <div style="font-size: 9.6px; opacity: 0.8; font-style: italic;">This report is auto-generated using AI analysis of official MLS&reg; data. For realtor use only.</div>
        </div>
    </div>
</body>
</html>"#,
        period = escape_html(&period.to_string()),
        location = location_title(data),
        hero = HERO_IMAGE_URL,
        report_date = escape_html(&period.upper_label()),
    )
}

fn blue_stat_cell(idx: usize, stat: &MainStatistic) -> String {
    let change = stat.change();
    let (background, color, arrow) = if change >= 0.0 {
        ("#ecfdf5", BADGE_UP_COLOR, "&#9650;")
    } else {
        ("#fef2f2", "#ef4444", "&#9660;")
    };
    let icon = BLUE_ICONS.get(idx).unwrap_or(&BLUE_ICONS[0]);
    let row_break = if idx % 2 == 0 && idx > 0 { "</tr><tr>" } else { "" };

    format!(
        r#"{row_break}
            <td style="background: white; border-radius: 12px; padding: 25px; width: 48%; vertical-align: top; border: 1px solid #f1f5f9;">
                <table cellpadding="0" cellspacing="0" border="0" width="100%">
                    <tr><td>
                        <table cellpadding="0" cellspacing="0" border="0" width="100%"><tr>
                            <td style="color: {accent}; opacity: 0.8; vertical-align: middle; width: 30px;">{icon}</td>
                            <td style="font-size: 14px; font-weight: 700; color: #334155; text-transform: uppercase; letter-spacing: 0.5px; vertical-align: middle;">{label}</td>
                            <td style="text-align: right; vertical-align: middle;">
                                <span style="font-size: 16px; font-weight: 700; padding: 4px 8px; border-radius: 8px; background: {background}; color: {color}; white-space: nowrap;">{arrow} {magnitude}%</span>
                            </td>
                        </tr></table>
                    </td></tr>
                    <tr><td style="padding-top: 15px; font-size: 42px; font-weight: 800; color: #0f172a; line-height: 1; letter-spacing: -1px; font-family: 'Montserrat', sans-serif;">{current}</td></tr>
                    <tr><td style="padding-top: 20px; border-top: 1px solid #f1f5f9;">
                        <table cellpadding="0" cellspacing="0" border="0" width="100%"><tr>
                            <td style="font-size: 14px; color: #64748b; width: 50%;"><strong style="color: #334155; display: block; margin-bottom: 4px;">Prev Month:</strong> {prev_month}</td>
                            <td style="font-size: 14px; color: #64748b; text-align: right; width: 50%;"><strong style="color: #334155; display: block; margin-bottom: 4px;">Prev Year:</strong> {prev_year}</td>
                        </tr></table>
                    </td></tr>
                </table>
            </td>"#,
        accent = BLUE_ACCENT,
        label = escape_html(&stat.label),
        magnitude = change.abs(),
        current = escape_html(&stat.current),
        prev_month = escape_html(&stat.prev_month),
        prev_year = escape_html(&stat.prev_year),
    )
}

fn blue_narrative_cell(item: &BenchmarkNarrative) -> String {
    format!(
        r#"
            <td style="background: white; border-radius: 12px; padding: 25px; border-top: 5px solid {accent}; border-bottom: 1px solid #f1f5f9; border-left: 1px solid #f1f5f9; border-right: 1px solid #f1f5f9; width: 33.33%; vertical-align: top;">
                <div style="font-size: 14px; font-weight: 800; color: {accent}; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 10px;">{kind}</div>
                <div style="font-family: 'Montserrat', sans-serif; font-size: 29px; font-weight: 800; color: #0f172a; margin-bottom: 15px; line-height: 1;">{price}</div>
                <div style="font-size: 14px; line-height: 1.6; color: #64748b; font-weight: 500;">{description}</div>
            </td>"#,
        accent = BLUE_ACCENT,
        kind = escape_html(&item.property_type),
        price = escape_html(&item.price),
        description = escape_html(&item.description),
    )
}

fn blue_section_title(title: &str) -> String {
    format!(
        r#"<div style="font-family: 'Montserrat', sans-serif; font-size: 22px; font-weight: 800; margin-bottom: 25px; color: #0f172a; text-transform: uppercase;"><span style="display: inline-block; width: 8px; height: 24px; background: {BLUE_ACCENT}; margin-right: 15px; border-radius: 4px; vertical-align: middle;"></span><span style="vertical-align: middle;">{title}</span></div>"#
    )
}

/// Blue template: navy header, 2x2 stat cards, three benchmark cards
pub fn infographic_blue_html(data: &VisualInfographicData, period: &ReportPeriod) -> String {
    let stat_cells: String = data
        .main_statistics
        .iter()
        .enumerate()
        .map(|(idx, stat)| blue_stat_cell(idx, stat))
        .collect();
    let narrative_cells: String = data
        .benchmark_price_narratives
        .iter()
        .map(blue_narrative_cell)
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Real Estate Market Update</title>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&amp;family=Montserrat:wght@600;700;800&amp;display=swap" rel="stylesheet">
</head>
<body style="margin: 0; font-family: 'Inter', sans-serif; background-color: #f0f2f5; padding: 40px; color: #0f172a;">
    <table cellpadding="0" cellspacing="0" border="0" width="100%" style="max-width: 1000px; margin: 0 auto; background: #ffffff; border-radius: 16px; overflow: hidden;">
        <tr>
            <td style="background: linear-gradient(135deg, #0f172a 0%, #1e293b 100%); color: white; padding: 35px 45px; border-top: 4px solid {accent};">
                <table cellpadding="0" cellspacing="0" border="0" width="100%"><tr>
                    <td style="vertical-align: middle;">
                        <div style="font-size: 14px; opacity: 0.9; text-transform: uppercase; letter-spacing: 2px; font-weight: 600; color: {accent};">Market Report</div>
                        <h1 style="font-family: 'Montserrat', sans-serif; font-size: 45px; font-weight: 800; letter-spacing: -1px; text-transform: uppercase; line-height: 1.1; margin: 5px 0 0 0;">{location}</h1>
                    </td>
                    <td style="text-align: right; vertical-align: middle;">
                        <div style="font-size: 14px; color: rgba(255,255,255,0.8); text-transform: uppercase; letter-spacing: 1px;">{report_date}</div>
                    </td>
                </tr></table>
            </td>
        </tr>
        <tr>
            <td style="padding: 45px;">
                {activity_title}
                <table cellpadding="0" cellspacing="15" border="0" width="100%"><tr>{stat_cells}</tr></table>
            </td>
        </tr>
        <tr>
            <td style="padding: 0 45px 45px 45px; background: linear-gradient(to bottom, white, #f8fafc);">
                {benchmark_title}
                <table cellpadding="0" cellspacing="15" border="0" width="100%"><tr>{narrative_cells}</tr></table>
            </td>
        </tr>
        <tr>
            <td style="background: #0f172a; color: #ffffff; padding: 30px 45px; border-top: 3px solid rgba(6, 182, 212, 0.5);">
                <table cellpadding="0" cellspacing="0" border="0" width="100%"><tr>
                    <td style="font-weight: 600; font-size: 15px; width: 50%;"><a href="mailto:info@realtygenie.co" style="color: #ffffff; text-decoration: none; opacity: 0.8;">info@realtygenie.co</a></td>
                    <td style="text-align: right; font-weight: 600; font-size: 15px; width: 50%;"><a href="https://www.realtygenie.co" target="_blank" style="color: #ffffff; text-decoration: none; opacity: 0.8;">www.realtygenie.co</a></td>
                </tr></table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
        accent = BLUE_ACCENT,
        location = location_title(data),
        report_date = escape_html(&period.upper_label()),
        activity_title = blue_section_title("Market Activity"),
        benchmark_title = blue_section_title("Benchmark Price Analysis"),
    )
}
