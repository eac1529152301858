use ewebpack_core::{application::ports::TemplateSource, domain::TemplateKind, error::EwebpackResult};
use tracing::debug;

use crate::builtin_templates;

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, template: TemplateKind) -> EwebpackResult<Vec<u8>> {
        debug!(template = %template, "loading embedded template");
        Ok(builtin_templates::contents(template).as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_the_embedded_bytes() {
        let bytes = EmbeddedTemplates::new()
            .load(TemplateKind::ElectronMain)
            .unwrap();
        assert_eq!(bytes, builtin_templates::ELECTRON_MAIN.as_bytes());
    }
}
