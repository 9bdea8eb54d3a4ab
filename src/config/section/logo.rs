//! `[logo_image]` section.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Built-in logo settings: text branding, svg asset at 216x46.
pub const LOGO_IMAGE: LogoImageSettings = LogoImageSettings {
    enabled: false,
    is_svg: true,
    width: 216,
    height: 46,
};

/// Logo image display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "logo_image")]
pub struct LogoImageSettings {
    /// Replace the text title with a logo image.
    #[config(inline_doc)]
    pub enabled: bool,

    /// Logo asset is an svg.
    #[config(inline_doc)]
    pub is_svg: bool,

    /// Render width in pixels.
    #[config(inline_doc)]
    pub width: u32,

    /// Render height in pixels.
    #[config(inline_doc)]
    pub height: u32,
}

impl Default for LogoImageSettings {
    fn default() -> Self {
        LOGO_IMAGE
    }
}

impl LogoImageSettings {
    /// Dimensions must be positive even while the logo is disabled.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.width == 0 {
            diag.error(Self::FIELDS.width, "must be greater than 0");
        }
        if self.height == 0 {
            diag.error(Self::FIELDS.height, "must be greater than 0");
        }
    }
}
