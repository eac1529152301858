//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a file from `templates/` via [`include_str!`]. The
//! paths are relative to this source file.
//!
//! Do NOT rename or move template files without updating the paths here.
//! The contents are copied into new projects byte for byte; they are never
//! rendered.

use ewebpack_core::domain::TemplateKind;

pub const ELECTRON_MAIN: &str = include_str!("../templates/electron-main.js");
pub const MAIN_WEBPACK_CONFIG: &str = include_str!("../templates/main-webpack.config.js");
pub const RENDERER_WEBPACK_CONFIG: &str = include_str!("../templates/renderer-webpack.config.js");

/// The embedded contents for a template.
pub fn contents(template: TemplateKind) -> &'static str {
    match template {
        TemplateKind::ElectronMain => ELECTRON_MAIN,
        TemplateKind::MainWebpackConfig => MAIN_WEBPACK_CONFIG,
        TemplateKind::RendererWebpackConfig => RENDERER_WEBPACK_CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_is_embedded_and_non_empty() {
        for kind in TemplateKind::ALL {
            assert!(!contents(kind).trim().is_empty(), "{kind} is empty");
        }
    }

    #[test]
    fn build_configs_target_their_process() {
        assert!(MAIN_WEBPACK_CONFIG.contains("electron-main"));
        assert!(RENDERER_WEBPACK_CONFIG.contains("electron-renderer"));
    }
}
