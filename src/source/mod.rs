/// Stats package download and cache
pub mod downloader;

pub use downloader::{ReportDownloader, ReportFetcher, is_pdf, report_url};
