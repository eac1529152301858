pub mod project_config;
pub mod project_layout;
pub mod scaffold_plan;

pub use project_config::{CONFIG_FILE_NAME, ProcessSection, ProjectConfig};
pub use project_layout::{ProcessPaths, ProjectLayout};
pub use scaffold_plan::{ConfigOrigin, Conflict, FileContents, InitPlan, ScaffoldStep};
