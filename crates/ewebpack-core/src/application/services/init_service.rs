//! Init Service - the project initializer.
//!
//! This service coordinates the whole `init` workflow:
//! 1. Resolve the target and the configuration document
//! 2. Plan directory and file writes against the current filesystem state
//! 3. Apply the plan
//!
//! Planning is read-only, so `--dry-run` can show a plan without applying it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateSource},
    },
    domain::{
        ConfigOrigin, Conflict, FileContents, InitPlan, ProcessKind, ProjectConfig,
        ProjectLayout, ScaffoldStep, TemplateKind,
    },
    error::{EwebpackError, EwebpackResult},
};

/// Input of an `init` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitRequest {
    /// Project root as given by the user (relative or absolute).
    pub target: PathBuf,
    /// Overwrite existing entry files and re-create directories.
    pub force: bool,
}

impl InitRequest {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            force: false,
        }
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// `true` when the target was given as exactly `.`.
    ///
    /// Existing source directories are reused instead of rejected in that
    /// case, so re-running `init` inside a project only trips on the entry
    /// files. The comparison is textual: `./` and `./.` do not qualify.
    pub fn targets_current_dir(&self) -> bool {
        self.target.as_os_str() == "."
    }
}

/// Outcome of a successful `init` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub root: PathBuf,
    pub config_origin: ConfigOrigin,
    pub created_dirs: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
}

/// Main initialization service.
pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSource>,
}

impl InitService {
    /// Create a new init service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use ewebpack_core::application::{InitRequest, InitService};
    ///
    /// let service = InitService::new(
    ///     filesystem, // impl Filesystem
    ///     templates,  // impl TemplateSource
    /// );
    /// service.initialize(InitRequest::new("my-app")).unwrap();
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, templates: Box<dyn TemplateSource>) -> Self {
        Self {
            filesystem,
            templates,
        }
    }

    /// Initialize a project: plan, apply, and report a conflict as an error.
    ///
    /// Steps before a conflict are applied; nothing is rolled back.
    #[instrument(
        skip_all,
        fields(target = %request.target.display(), force = request.force)
    )]
    pub fn initialize(&self, request: InitRequest) -> EwebpackResult<InitReport> {
        info!("Initializing Electron + Webpack project");

        let plan = self.plan(&request)?;
        let report = self.apply(&plan)?;

        if let Some(conflict) = plan.conflict {
            debug!(%conflict, "Stopped on conflict");
            return Err(ApplicationError::from(conflict).into());
        }

        info!(
            dirs = report.created_dirs.len(),
            files = report.written_files.len(),
            "Project initialized"
        );
        Ok(report)
    }

    /// Resolve the configuration for `target` without writing anything.
    pub fn resolve_config(&self, target: &Path) -> EwebpackResult<ProjectConfig> {
        let root = resolve_root(target)?;
        self.load_config(&root).map(|(config, _)| config)
    }

    /// Compute every filesystem action of an `init` run. Read-only.
    #[instrument(
        skip_all,
        fields(target = %request.target.display(), force = request.force)
    )]
    pub fn plan(&self, request: &InitRequest) -> EwebpackResult<InitPlan> {
        let root = resolve_root(&request.target)?;
        debug!(provided = %request.target.display(), resolved = %root.display(), "Resolved path");

        let (config, config_origin) = self.load_config(&root)?;
        let layout = ProjectLayout::new(&root, &config);

        let mut steps = Vec::new();
        if config_origin == ConfigOrigin::Default {
            steps.push(ScaffoldStep::WriteConfig {
                path: layout.config_file(),
                contents: config.to_json_pretty()?,
            });
        }

        let conflict = match self.plan_directories(request, &layout, &mut steps) {
            Some(conflict) => Some(conflict),
            None => {
                let conflict = self.plan_entries(request, &layout, &mut steps);
                plan_build_configs(&layout, &mut steps);
                conflict
            }
        };

        Ok(InitPlan {
            root,
            config,
            config_origin,
            steps,
            conflict,
        })
    }

    /// Execute the steps of a plan in order.
    ///
    /// All templates the plan needs are loaded before the first write.
    #[instrument(skip_all, fields(root = %plan.root.display()))]
    pub fn apply(&self, plan: &InitPlan) -> EwebpackResult<InitReport> {
        let templates = self.load_templates(plan)?;

        let mut report = InitReport {
            root: plan.root.clone(),
            config_origin: plan.config_origin,
            created_dirs: Vec::new(),
            written_files: Vec::new(),
        };

        for step in &plan.steps {
            match step {
                ScaffoldStep::WriteConfig { path, contents } => {
                    debug!(path = %path.display(), "ewebpack.json does not exist; writing file");
                    self.filesystem.write_file(path, contents.as_bytes())?;
                    report.written_files.push(path.clone());
                }
                ScaffoldStep::CreateDir { path } => {
                    info!(path = %path.display(), "Creating directory");
                    self.filesystem.create_dir_all(path)?;
                    report.created_dirs.push(path.clone());
                }
                ScaffoldStep::ReuseDir { path } => {
                    debug!(path = %path.display(), "Reusing existing directory");
                }
                ScaffoldStep::WriteFile { path, contents } => {
                    info!(path = %path.display(), "Writing file");
                    let bytes: &[u8] = match contents {
                        FileContents::Template(kind) => preloaded(&templates, *kind)?,
                        FileContents::Empty => &[],
                    };
                    self.filesystem.write_file(path, bytes)?;
                    report.written_files.push(path.clone());
                }
            }
        }

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn load_config(&self, root: &Path) -> EwebpackResult<(ProjectConfig, ConfigOrigin)> {
        let path = ProjectLayout::config_file_for(root);

        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "No ewebpack.json; using defaults");
            return Ok((ProjectConfig::default(), ConfigOrigin::Default));
        }

        warn!(
            path = %path.display(),
            "ewebpack.json exists (using this configuration): delete this file to start over"
        );
        let contents = self.filesystem.read_to_string(&path)?;
        let config = ProjectConfig::from_json_str(&contents, &path)?;
        debug!(?config, "Loaded configuration");

        Ok((config, ConfigOrigin::Loaded))
    }

    /// Source directories, main first. Returns the conflict that stops the run.
    fn plan_directories(
        &self,
        request: &InitRequest,
        layout: &ProjectLayout,
        steps: &mut Vec<ScaffoldStep>,
    ) -> Option<Conflict> {
        // Directories created earlier in this pass count as existing.
        let mut planned: Vec<&Path> = Vec::new();

        for process in ProcessKind::ALL {
            let dir = layout.process(process).source_dir.as_path();
            let exists = planned.contains(&dir) || self.filesystem.exists(dir);

            if !exists || request.force {
                steps.push(ScaffoldStep::CreateDir {
                    path: dir.to_path_buf(),
                });
                planned.push(dir);
            } else if !request.targets_current_dir() {
                return Some(Conflict::Directory {
                    path: dir.to_path_buf(),
                });
            } else {
                steps.push(ScaffoldStep::ReuseDir {
                    path: dir.to_path_buf(),
                });
            }
        }

        None
    }

    /// Entry scripts, main first. The first existing one stops the entries.
    fn plan_entries(
        &self,
        request: &InitRequest,
        layout: &ProjectLayout,
        steps: &mut Vec<ScaffoldStep>,
    ) -> Option<Conflict> {
        let entries = [
            (
                ProcessKind::Main,
                FileContents::Template(TemplateKind::ElectronMain),
            ),
            (ProcessKind::Renderer, FileContents::Empty),
        ];

        for (process, contents) in entries {
            let path = &layout.process(process).entry_file;
            if request.force || !self.filesystem.exists(path) {
                steps.push(ScaffoldStep::WriteFile {
                    path: path.clone(),
                    contents,
                });
            } else {
                return Some(Conflict::Entry {
                    process,
                    path: path.clone(),
                });
            }
        }

        None
    }

    fn load_templates(&self, plan: &InitPlan) -> EwebpackResult<HashMap<TemplateKind, Vec<u8>>> {
        let mut loaded = HashMap::new();
        for step in &plan.steps {
            if let ScaffoldStep::WriteFile {
                contents: FileContents::Template(kind),
                ..
            } = step
            {
                if !loaded.contains_key(kind) {
                    loaded.insert(*kind, self.templates.load(*kind)?);
                }
            }
        }
        Ok(loaded)
    }
}

/// Build-config files are written on every run, whatever exists.
fn plan_build_configs(layout: &ProjectLayout, steps: &mut Vec<ScaffoldStep>) {
    for process in ProcessKind::ALL {
        steps.push(ScaffoldStep::WriteFile {
            path: layout.process(process).build_config_file.clone(),
            contents: FileContents::Template(process.build_config_template()),
        });
    }
}

fn preloaded(
    templates: &HashMap<TemplateKind, Vec<u8>>,
    kind: TemplateKind,
) -> EwebpackResult<&[u8]> {
    templates
        .get(&kind)
        .map(Vec::as_slice)
        .ok_or_else(|| EwebpackError::Internal {
            message: format!("template {kind} was not loaded before writing"),
        })
}

fn resolve_root(target: &Path) -> EwebpackResult<PathBuf> {
    std::path::absolute(target).map_err(|e| {
        ApplicationError::FilesystemError {
            path: target.to_path_buf(),
            reason: format!("Failed to resolve path: {e}"),
        }
        .into()
    })
}
