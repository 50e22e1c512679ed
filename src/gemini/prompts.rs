//! Prompts sent alongside the stats package PDF

use crate::presentation::ReportPeriod;

const MARKET_REPORT_PROMPT: &str = r#"You are a senior real estate economist and market analyst. Analyze the attached GVREALTORS monthly market report PDF and return ONLY a JSON object (no other text) with the schema below. Use ONLY actual data from the PDF.

JSON Schema:

{
  "executive_summary": "500 word executive summary: (1) opening paragraph with a market overview, (2) 5-7 bullet points with key metrics (benchmark price changes, market trends, absorption rates, sales and listings), (3) 2-3 embedded Markdown tables: area benchmarks with price changes, property type comparison, absorption rates by segment. Start bullets with '- '. Use actual numbers from the PDF.",
  "benchmark_table": "Markdown table of key areas. Columns: Area | Benchmark Price | Price Index | 1M % | 3M % | 6M % | 1Y % | Sales | Listings | Absorption %. Rows: Greater Vancouver (all types), Vancouver East, Vancouver West, Burnaby, Richmond, Coquitlam, North Vancouver, West Vancouver.",
  "city_benchmarks": {
    "Burnaby": number,
    "Coquitlam": number,
    "Richmond": number,
    "Vancouver_East": number,
    "Vancouver_West": number,
    "North_Vancouver": number,
    "West_Vancouver": number,
    "Maple_Ridge": number,
    "Port_Coquitlam": number,
    "Port_Moody": number,
    "Squamish": number,
    "Sunshine_Coast": number,
    "Whistler": number
  },
  "city_detail_table": "Markdown table with all 13 cities: City | Benchmark Price | Price Index | Sales | Listings | Absorption % | YoY Change %",
  "property_types": {
    "benchmark_prices": {"detached": number, "townhouse": number, "apartment": number},
    "sales": {"detached": number, "attached": number, "apartment": number},
    "listings": {"detached": number, "attached": number, "apartment": number}
  },
  "property_type_detail_table": "Markdown table: Property Type | Benchmark Price | Price Index | Sales | Listings | Absorption % | 1M % | 3M % | 6M % | 1Y %",
  "percentage_changes": {"moM": number, "qoQ": number, "six_month": number, "one_year": number},
  "absorption_rate": {
    "overall_ratio": "string (e.g. '12.6%')",
    "detached_ratio": "string",
    "attached_ratio": "string",
    "apartment_ratio": "string"
  },
  "buyer_insights": "100-150 words for home buyers: current conditions, buyer advantages, negotiation tips, best areas. Include one Markdown table: Area | Days on Market | Price Trend | Opportunity.",
  "seller_insights": "100-150 words for home sellers: conditions, pricing strategies, high-demand areas. Include one Markdown table: Area | Sales Volume | Price vs List | Market Strength.",
  "investment_analysis": "100-150 words for investors: outlook, opportunities, ROI potential, risks. Include one Markdown table: Area/Type | Price | 1Y Change | Investment Score.",
  "realtor_talking_points": ["10 specific, data-backed points realtors can use with clients, each citing numbers from the PDF"],
  "newsletter_article": "500-550 word newsletter article: headline and opening, market overview with statistics, buyer insights, seller insights, expert outlook, call to action. Use ## headers, bold text, bullets and 1-2 Markdown tables. Real numbers only.",
  "market_predictions": "200-250 words: 3 month outlook, 6-12 month outlook, key factors to watch, possible scenarios.",
  "facebook_posts": [
    "Post 1 (190-250 chars): emoji plus a hook, one key statistic, 2-3 emojis, hashtags #VancouverRealEstate #HousingMarket #RealtyGenie",
    "Post 2 (220-260 chars): a short story about the most surprising trend with numbers, one insight for buyers or sellers, hashtags #RealEstate #MarketUpdate #VancouverHomes",
    "Post 3 (200-240 chars): an urgent call to action citing one data point, ending with 'DM us for expert guidance! #RealEstateAdvice #VancouverMarket'"
  ],
  "visual_infographic_data": {
    "location_title": "string (e.g. 'GREATER VANCOUVER')",
    "main_statistics": [
      {"label": "NEW LISTINGS", "current": "string", "pct_change": number, "prev_month": "string", "prev_year": "string"},
      {"label": "ACTIVE LISTINGS", "current": "string", "pct_change": number, "prev_month": "string", "prev_year": "string with percentage"},
      {"label": "TOTAL SALES", "current": "string", "pct_change": number, "prev_month": "string", "prev_year": "string with percentage"},
      {"label": "AVERAGE PRICE", "current": "string (e.g. '$1,003,693')", "pct_change": number, "prev_month": "string", "prev_year": "string with percentage"}
    ],
    "benchmark_price_narratives": [
      {"type": "Single Family Detached", "price": "string (e.g. '$1,405,500')", "description": "string (e.g. 'Benchmark price decreased 0.6% compared to previous month and decreased 5.4% compared to previous year.')"},
      {"type": "Townhomes", "price": "string", "description": "string"},
      {"type": "Apartments", "price": "string", "description": "string"}
    ],
    "poster_metrics": [
      {"label": "string (e.g. 'NEW LISTINGS')", "value": "string (e.g. '2,210')", "change": "string (e.g. '-25.5%')", "positive": boolean}
    ]
  }
}

CRITICAL RULES:
- Return ONLY valid JSON, no markdown fences, no text before or after.
- Numeric values must be numbers, except absorption_rate and visual_infographic_data strings.
- All data must come from the PDF. Do not fabricate numbers.
- visual_infographic_data is mandatory with 4 main_statistics (new listings, active listings, total sales, average price) and 3 benchmark_price_narratives (detached, townhomes, apartments). Do not leave any value null.
- main_statistics pct_change is ((current - prev_month) / prev_month) * 100.
- Keep content concise to avoid truncation.
- Markdown tables must be complete, with every row filling every column.
- Inside JSON strings escape special characters: \\n for newlines (never raw line breaks), \\\\ for backslashes, \" for quotes.
- newsletter_article is mandatory.
- The output must parse with JSON.parse() without errors.
"#;

const INFOGRAPHIC_PROMPT: &str = r#"You are creating visual infographic data for real estate market reports. Analyze the attached GVREALTORS monthly market report PDF and return ONLY a JSON object for the visual_infographic_data field.

JSON Schema:

{
  "location_title": "string (e.g. 'GREATER VANCOUVER')",
  "main_statistics": [
    {
      "label": "NEW LISTINGS",
      "current": "string (e.g. '2,210')",
      "pct_change": number (e.g. -25.5 for a 25.5% decrease),
      "prev_month": "string (e.g. '2,967')",
      "prev_year": "string with % (e.g. '2,367 (-6.6%)')"
    },
    {"label": "ACTIVE LISTINGS", "current": "string", "pct_change": number, "prev_month": "string", "prev_year": "string with %"},
    {"label": "TOTAL SALES", "current": "string", "pct_change": number, "prev_month": "string", "prev_year": "string with %"},
    {"label": "AVERAGE PRICE", "current": "string (e.g. '$1,245,600')", "pct_change": number, "prev_month": "string", "prev_year": "string with %"}
  ],
  "benchmark_price_narratives": [
    {
      "type": "Single Family Detached",
      "price": "string (e.g. '$1,405,500')",
      "description": "string (e.g. 'The benchmark price for a detached home in Greater Vancouver decreased 0.6% in the past month to $1,405,500, down 6.8% from November 2023.')"
    },
    {"type": "Townhomes", "price": "string", "description": "string (similar format)"},
    {"type": "Apartments", "price": "string", "description": "string (similar format)"}
  ],
  "poster_metrics": [
    {"label": "string (e.g. 'Active Listings')", "value": "string (e.g. '13,245')", "change": "string (e.g. '+5.2%')", "trend": "string ('up' or 'down')"}
  ]
}

CRITICAL FORMATTING RULES:
1. Return ONLY valid JSON: no markdown, no backticks, no explanations.
2. Escape special characters inside strings: \\n for newlines, \" for quotes, \\\\ for backslashes.
3. No trailing commas before ] or }.
4. pct_change values are numbers (e.g. -25.5), not strings.
5. Use actual data from the PDF, no placeholders.
6. Format prices with commas and a $ sign: "$1,405,500".
7. pct_change is negative for decreases and positive for increases.
8. Descriptions are 1-2 sentences with specific numbers from the PDF.

Extract the most visually impactful statistics for infographic display.
"#;

/// Full market report: narrative sections, tables and the infographic block
pub fn market_report_prompt() -> &'static str {
    MARKET_REPORT_PROMPT
}

/// Only the `visual_infographic_data` object
pub fn infographic_prompt() -> &'static str {
    INFOGRAPHIC_PROMPT
}

/// Per area figures of `cities` for `period`, split by property type
pub fn city_comparison_prompt(cities: &[String], period: &ReportPeriod) -> String {
    let month = period.month();
    let year = period.year();
    let cities_list = cities.join(", ");

    format!(
        r#"You are a real estate data analyst. Analyze the attached Greater Vancouver Real Estate Board monthly report PDF for {month} {year}.

Extract and compare the following data for these cities/regions: {cities_list}

For EACH city, extract these metrics for ALL property types (Overall, Detached, Townhouse, Apartment/Condo):

1. **New Listings** (listings added this month)
2. **Active Listings** (current month)
3. **Total Sales** (current month)
4. **Benchmark Price** (current month)
5. **Month-over-Month Change** (% change against the previous month)
6. **Year-over-Year Change** (% change against the same month last year)

Return ONLY a valid JSON object with this EXACT structure:

{{
  "month": "{month}",
  "year": "{year}",
  "cities": [
    {{
      "name": "City Name",
      "overall": {{"newListings": 1234, "activeListings": 1234, "totalSales": 567, "benchmarkPrice": 1234567, "momChange": 2.5, "yoyChange": -5.3}},
      "detached": {{"newListings": 456, "activeListings": 456, "totalSales": 123, "benchmarkPrice": 2345678, "momChange": 1.8, "yoyChange": -6.2}},
      "townhouse": {{"newListings": number, "activeListings": number, "totalSales": number, "benchmarkPrice": number, "momChange": number, "yoyChange": number}},
      "apartment": {{"newListings": number, "activeListings": number, "totalSales": number, "benchmarkPrice": number, "momChange": number, "yoyChange": number}}
    }}
  ],
  "summary": "Brief 2-3 sentence summary of key trends across these cities"
}}

IMPORTANT:
- Use EXACT numeric values from the PDF, no approximations.
- Every figure is present in the PDF, do not return N/A.
- MoM and YoY changes are percentages, positive for increases and negative for decreases.
- Return ONLY the JSON object, no additional text or markdown formatting.
- All numbers must be JSON numbers, not strings.
"#
    )
}
