//! The ordered list of filesystem actions an `init` run performs.
//!
//! A plan is computed without touching the disk. It is a straight line of
//! [`ScaffoldStep`]s, optionally ending in a [`Conflict`] that stopped (part
//! of) the sequence. Applying a plan executes every step in order and then
//! reports the conflict, if any.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::project_config::ProjectConfig,
    value_objects::{ProcessKind, TemplateKind},
};

/// Where the configuration used by a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// An existing `ewebpack.json` was merged over the defaults.
    Loaded,
    /// No file existed; the defaults are written out.
    Default,
}

/// Contents of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileContents {
    /// Verbatim copy of a bundled template.
    Template(TemplateKind),
    /// Zero-byte file.
    Empty,
}

/// A single filesystem action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStep {
    /// Persist the default configuration document.
    WriteConfig { path: PathBuf, contents: String },
    /// Create a directory and any missing parents.
    CreateDir { path: PathBuf },
    /// Keep an existing directory as-is.
    ReuseDir { path: PathBuf },
    /// Write a generated file, replacing any existing one.
    WriteFile { path: PathBuf, contents: FileContents },
}

impl ScaffoldStep {
    pub fn path(&self) -> &Path {
        match self {
            Self::WriteConfig { path, .. }
            | Self::CreateDir { path }
            | Self::ReuseDir { path }
            | Self::WriteFile { path, .. } => path,
        }
    }

    /// `true` if applying this step changes the filesystem.
    pub fn is_write(&self) -> bool {
        !matches!(self, Self::ReuseDir { .. })
    }
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteConfig { path, .. } => write!(f, "write config   {}", path.display()),
            Self::CreateDir { path } => write!(f, "create dir     {}", path.display()),
            Self::ReuseDir { path } => write!(f, "reuse dir      {}", path.display()),
            Self::WriteFile {
                path,
                contents: FileContents::Template(template),
            } => write!(f, "write file     {} (from {template})", path.display()),
            Self::WriteFile {
                path,
                contents: FileContents::Empty,
            } => write!(f, "write file     {} (empty)", path.display()),
        }
    }
}

/// A pre-existing path that `init` refuses to overwrite without `--force`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// A source directory already exists.
    Directory { path: PathBuf },
    /// An entry script already exists.
    Entry { process: ProcessKind, path: PathBuf },
}

impl Conflict {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory { path } | Self::Entry { path, .. } => path,
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory { path } => write!(f, "{} already exists", path.display()),
            Self::Entry { process, path } => {
                write!(f, "{process} entry {} already exists", path.display())
            }
        }
    }
}

/// Everything an `init` run will do, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct InitPlan {
    pub root: PathBuf,
    pub config: ProjectConfig,
    pub config_origin: ConfigOrigin,
    pub steps: Vec<ScaffoldStep>,
    pub conflict: Option<Conflict>,
}

impl InitPlan {
    /// `true` if the plan runs to completion without a conflict.
    pub fn is_clean(&self) -> bool {
        self.conflict.is_none()
    }

    /// Steps that change the filesystem.
    pub fn writes(&self) -> impl Iterator<Item = &ScaffoldStep> {
        self.steps.iter().filter(|s| s.is_write())
    }

    /// `true` if some step writes `path`.
    pub fn writes_to(&self, path: &Path) -> bool {
        self.writes().any(|s| s.path() == path)
    }
}
