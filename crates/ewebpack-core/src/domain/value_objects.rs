//! Domain value objects: ProcessKind, TemplateKind.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Each one knows
//! its string form and nothing about the filesystem.

use std::fmt;

// ── ProcessKind ──────────────────────────────────────────────────────────────

/// One of the two execution contexts of a scaffolded Electron application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    /// Primary/background process.
    Main,
    /// UI-facing process.
    Renderer,
}

impl ProcessKind {
    /// Both processes, in scaffolding order.
    pub const ALL: [ProcessKind; 2] = [ProcessKind::Main, ProcessKind::Renderer];

    /// Key of this process's section in `ewebpack.json`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Renderer => "renderer",
        }
    }

    /// File name of the entry script generated for this process.
    pub const fn entry_file_name(&self) -> &'static str {
        match self {
            Self::Main => "main.js",
            Self::Renderer => "renderer.js",
        }
    }

    /// Template copied into this process's build-config file.
    pub const fn build_config_template(&self) -> TemplateKind {
        match self {
            Self::Main => TemplateKind::MainWebpackConfig,
            Self::Renderer => TemplateKind::RendererWebpackConfig,
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// The static files shipped with ewebpack and copied verbatim into a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Entry script of the main process.
    ElectronMain,
    /// Webpack configuration for the main process.
    MainWebpackConfig,
    /// Webpack configuration for the renderer process.
    RendererWebpackConfig,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::ElectronMain,
        TemplateKind::MainWebpackConfig,
        TemplateKind::RendererWebpackConfig,
    ];

    /// File name of the template inside a templates directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::ElectronMain => "electron-main.js",
            Self::MainWebpackConfig => "main-webpack.config.js",
            Self::RendererWebpackConfig => "renderer-webpack.config.js",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ElectronMain => "electron-main",
            Self::MainWebpackConfig => "main-webpack-config",
            Self::RendererWebpackConfig => "renderer-webpack-config",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
