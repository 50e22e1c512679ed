/// City comparison template
pub mod comparison;
/// Formatting helpers
pub mod format;
/// Image hosting
pub mod hosting;
/// Infographic templates
pub mod html;
/// HTML to PNG
pub mod image;

pub use comparison::city_comparison_html;
pub use hosting::{ImageHost, ImgbbHost};
pub use html::{EmailTemplate, infographic_blue_html, infographic_pastel_html};
pub use image::{ImageRenderer, WkHtmlToImage};
