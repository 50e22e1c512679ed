use realty_genie::presentation::{CityComparison, ReportPeriod, VisualInfographicData};
use realty_genie::render::{EmailTemplate, city_comparison_html};
use serde_json::json;

fn infographic() -> VisualInfographicData {
    serde_json::from_value(json!({
        "location_title": "GREATER VANCOUVER",
        "main_statistics": [
            {"label": "NEW LISTINGS", "current": "2,210", "pct_change": -25.5, "prev_month": "2,967", "prev_year": "2,367 (-6.6%)"},
            {"label": "ACTIVE LISTINGS", "current": "13,245", "pct_change": "5.2", "prev_month": "12,590", "prev_year": "11,000 (+20.4%)"},
            {"label": "TOTAL SALES", "current": "1,846", "pct_change": 0, "prev_month": "1,846", "prev_year": "1,800"},
            {"label": "AVERAGE PRICE", "current": "$1,245,600", "pct_change": null, "prev_month": "$1,250,000", "prev_year": "$1,300,000"}
        ],
        "benchmark_price_narratives": [
            {"type": "Single Family Detached", "price": "$1,405,500", "description": "benchmark price decreased 0.6%."},
            {"type": "Townhomes", "price": "$1,080,000", "description": "benchmark price held steady."},
            {"type": "Apartments", "price": "$740,000", "description": "benchmark price <dipped> 1%."}
        ],
        "poster_metrics": [
            {"label": "Active Listings", "value": "13,245", "change": "+5.2%", "trend": "up"}
        ]
    }))
    .unwrap()
}

#[test]
fn test_both_templates_render_every_statistic() {
    let period = ReportPeriod::parse("November", "2025").unwrap();
    let data = infographic();

    for template in [EmailTemplate::Pastel, EmailTemplate::Blue] {
        let html = template.render(&data, &period);
        assert!(html.starts_with("<!DOCTYPE html>"), "{template}");
        for label in ["NEW LISTINGS", "ACTIVE LISTINGS", "TOTAL SALES", "AVERAGE PRICE"] {
            assert!(html.contains(label), "{template} misses {label}");
        }
        assert!(html.contains("$1,405,500"));
        assert!(html.contains("&lt;dipped&gt;"));
        assert!(!html.contains("<dipped>"));
    }
}

#[test]
fn test_empty_infographic_uses_default_title() {
    let period = ReportPeriod::parse("May", "2024").unwrap();
    let html = EmailTemplate::Pastel.render(&VisualInfographicData::default(), &period);
    assert!(html.contains("GREATER VANCOUVER"));
    assert!(html.contains("MAY 2024"));
}

#[test]
fn test_comparison_html_from_model_json() {
    let comparison: CityComparison = serde_json::from_value(json!({
        "month": "November",
        "year": "2025",
        "cities": [
            {"name": "Richmond", "overall": {"activeListings": "2,345", "benchmarkPrice": "$1,180,000", "momChange": "-0.8%"}},
            {"name": "Surrey & Area", "overall": {"totalSales": 410}}
        ],
        "summary": "Richmond softened."
    }))
    .unwrap();

    let html = city_comparison_html(&comparison);
    assert!(html.contains("Richmond"));
    assert!(html.contains("Surrey &amp; Area"));
    assert!(html.contains("2,345"));
    assert!(html.contains("$1.2M"));
    assert!(html.contains("-0.8%"));
    assert!(html.contains("Richmond softened."));
}
