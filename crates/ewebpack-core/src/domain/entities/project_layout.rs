//! Where every generated file lives, derived from a root and a config.

use std::path::{Path, PathBuf};

use crate::domain::{
    entities::project_config::{CONFIG_FILE_NAME, ProjectConfig},
    value_objects::ProcessKind,
};

/// Paths owned by one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessPaths {
    pub source_dir: PathBuf,
    pub entry_file: PathBuf,
    pub build_config_file: PathBuf,
}

/// Filesystem layout of a scaffolded project.
///
/// ```text
/// <root>/
/// ├── ewebpack.json
/// ├── <main.src>/
/// │   ├── main.js
/// │   └── <main.webpack-config>
/// └── <renderer.src>/
///     ├── renderer.js
///     └── <renderer.webpack-config>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    main: ProcessPaths,
    renderer: ProcessPaths,
}

impl ProjectLayout {
    /// Location of `ewebpack.json` under `root`. Needed before a config exists.
    pub fn config_file_for(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    pub fn new(root: impl Into<PathBuf>, config: &ProjectConfig) -> Self {
        let root = root.into();
        let paths = |process: ProcessKind| {
            let section = config.section(process);
            let source_dir = root.join(&section.src);
            ProcessPaths {
                entry_file: source_dir.join(process.entry_file_name()),
                build_config_file: source_dir.join(&section.webpack_config),
                source_dir,
            }
        };

        Self {
            main: paths(ProcessKind::Main),
            renderer: paths(ProcessKind::Renderer),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        Self::config_file_for(&self.root)
    }

    pub fn process(&self, process: ProcessKind) -> &ProcessPaths {
        match process {
            ProcessKind::Main => &self.main,
            ProcessKind::Renderer => &self.renderer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_documented_tree() {
        let layout = ProjectLayout::new("/tmp/proj", &ProjectConfig::default());

        assert_eq!(layout.root(), Path::new("/tmp/proj"));
        assert_eq!(layout.config_file(), PathBuf::from("/tmp/proj/ewebpack.json"));

        let main = layout.process(ProcessKind::Main);
        assert_eq!(main.source_dir, PathBuf::from("/tmp/proj/src/main"));
        assert_eq!(main.entry_file, PathBuf::from("/tmp/proj/src/main/main.js"));
        assert_eq!(
            main.build_config_file,
            PathBuf::from("/tmp/proj/src/main/webpack.config.js")
        );

        let renderer = layout.process(ProcessKind::Renderer);
        assert_eq!(
            renderer.entry_file,
            PathBuf::from("/tmp/proj/src/renderer/renderer.js")
        );
    }

    #[test]
    fn layout_follows_config_overrides() {
        let mut config = ProjectConfig::default();
        config.renderer.src = "ui".into();
        config.renderer.webpack_config = "webpack.renderer.js".into();

        let layout = ProjectLayout::new("/p", &config);
        let renderer = layout.process(ProcessKind::Renderer);

        assert_eq!(renderer.source_dir, PathBuf::from("/p/ui"));
        assert_eq!(
            renderer.build_config_file,
            PathBuf::from("/p/ui/webpack.renderer.js")
        );
    }
}
