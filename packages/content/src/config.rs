use std::time::Duration;

use crate::Lang;

pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_CAROUSEL_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_CATALOGUE_FILE: &str = "OmniSyn_Services_Catalogue_2025.pdf";

/// Presentation settings shared by the whole component tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub default_lang: Lang,
    /// Fade-out pause before a page swap; `None` swaps immediately.
    pub transition_delay: Option<Duration>,
    pub carousel_interval: Duration,
    /// Prefix for slide images and the catalogue document.
    pub media_base: String,
    pub catalogue_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_lang: Lang::default(),
            transition_delay: Some(DEFAULT_TRANSITION_DELAY),
            carousel_interval: DEFAULT_CAROUSEL_INTERVAL,
            media_base: "/".to_string(),
            catalogue_file: DEFAULT_CATALOGUE_FILE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Images are numbered from 1: slide 0 is `photo1.jpg`.
    pub fn slide_image(&self, slide: usize) -> String {
        self.media_url(&format!("photo{}.jpg", slide + 1))
    }

    pub fn catalogue_url(&self) -> String {
        self.media_url(&self.catalogue_file)
    }

    fn media_url(&self, file: &str) -> String {
        format!("{}/{}", self.media_base.trim_end_matches('/'), file)
    }
}
