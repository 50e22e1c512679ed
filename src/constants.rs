/// User agent string sent with every outbound HTTP request
pub const USER_AGENT: &str = "realty-genie/0.1.0";
/// Where the monthly GVR stats packages are published
pub const DEFAULT_REPORT_BASE_URL: &str = "https://members.gvrealtors.ca/news";
/// File name prefix of a monthly stats package
pub const REPORT_FILE_PREFIX: &str = "GVR-Stats-Package";
/// Default directory for downloaded PDFs
pub const DEFAULT_PDF_CACHE_DIR: &str = "pdfs";
/// Generative Language API root
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used for the full market report and the infographic
pub const DEFAULT_REPORT_MODEL: &str = "gemini-2.5-flash";
/// Model used for city comparisons
pub const DEFAULT_COMPARISON_MODEL: &str = "gemini-2.5-pro";
/// Timeout in seconds for a single model call (PDF analysis is slow)
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 300;
/// Default delay between retries of a rate limited model call
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;
/// Default number of retries of a rate limited model call
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// imgbb upload endpoint
pub const DEFAULT_IMGBB_URL: &str = "https://api.imgbb.com/1/upload";
/// Width in pixels of rendered comparison images
pub const COMPARISON_IMAGE_WIDTH: u32 = 900;
/// Upper bound of comparisons returned by a listing
pub const DEFAULT_COMPARISON_LIMIT: i64 = 50;
/// Label stored with every generated report
pub const REPORT_SOURCE: &str = "Gemini API Analysis";
/// Location shown when the model did not provide one
pub const DEFAULT_LOCATION_TITLE: &str = "GREATER VANCOUVER";
/// Minimum number of cities in a comparison
pub const MIN_COMPARISON_CITIES: usize = 2;
/// Maximum number of cities in a comparison
pub const MAX_COMPARISON_CITIES: usize = 3;

/// Areas of Greater Vancouver that can be compared
pub const GREATER_VANCOUVER_CITIES: [&str; 18] = [
    "Vancouver East",
    "Vancouver West",
    "Burnaby East",
    "Burnaby North",
    "Burnaby South",
    "Coquitlam",
    "New Westminster",
    "North Vancouver",
    "Port Coquitlam",
    "Port Moody",
    "Richmond",
    "Surrey",
    "Pitt Meadows",
    "Maple Ridge",
    "Langley",
    "Delta",
    "White Rock",
    "West Vancouver",
];
