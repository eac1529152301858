use std::path::{Path, PathBuf};

use ewebpack_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateKind,
    error::EwebpackResult,
};
use tracing::{debug, instrument};

/// Templates read from a user-supplied directory.
///
/// The directory must hold one file per [`TemplateKind`], named by
/// [`TemplateKind::file_name`]. Files are read on every `load`, so edits are
/// picked up without a restart.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, template: TemplateKind) -> PathBuf {
        self.dir.join(template.file_name())
    }
}

impl TemplateSource for DirectoryTemplates {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, template: TemplateKind) -> EwebpackResult<Vec<u8>> {
        let path = self.path_for(template);
        debug!(path = %path.display(), "reading template from directory");

        std::fs::read(&path).map_err(|e| {
            ApplicationError::TemplateUnavailable {
                template,
                reason: format!("{}: {}", path.display(), e),
            }
            .into()
        })
    }
}
