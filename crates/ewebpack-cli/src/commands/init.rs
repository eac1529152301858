//! Implementation of the `ewebpack init` command.
//!
//! Responsibility: validate the target path, wire the adapters into an
//! `InitService`, and display the result. No business logic lives here.

use std::path::Path;

use tracing::{debug, instrument};

use ewebpack_adapters::{DirectoryTemplates, EmbeddedTemplates, LocalFilesystem};
use ewebpack_core::{
    application::{InitReport, InitRequest, InitService, ports::TemplateSource},
    domain::{ConfigOrigin, InitPlan},
};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `ewebpack init` command.
///
/// 1. Check that the target is an existing directory
/// 2. `--dry-run`: print the plan and stop
/// 3. `--force`: confirm unless `--yes`, `--quiet`, or not a terminal
/// 4. Initialize and report what was written
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(
    args: InitArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    check_target(&args.path)?;

    let service = build_service(&config);
    let request = InitRequest::new(&args.path).force(args.force);

    if args.dry_run {
        let plan = service.plan(&request)?;
        return show_plan(&plan, &output);
    }

    let needs_confirmation = args.force && !args.yes && !output.is_quiet() && output.is_interactive();
    if needs_confirmation && !confirm_force(&args.path)? {
        return Err(CliError::Cancelled);
    }

    let report = service.initialize(request)?;
    show_report(&report, &output)
}

/// Wire the production adapters, honouring `templates.dir`.
pub(crate) fn build_service(config: &AppConfig) -> InitService {
    let templates: Box<dyn TemplateSource> = match &config.templates.dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using templates from directory");
            Box::new(DirectoryTemplates::new(dir))
        }
        None => Box::new(EmbeddedTemplates::new()),
    };

    InitService::new(Box::new(LocalFilesystem::new()), templates)
}

fn check_target(path: &Path) -> CliResult<()> {
    if !path.exists() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' does not exist; create it first", path.display()),
        });
    }
    if !path.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", path.display()),
        });
    }
    Ok(())
}

fn show_plan(plan: &InitPlan, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Dry run: {}", plan.root.display()))?;
    if plan.config_origin == ConfigOrigin::Loaded {
        output.info("Using existing ewebpack.json")?;
    }

    for step in &plan.steps {
        output.print(&format!("  {step}"))?;
    }

    match &plan.conflict {
        Some(conflict) => output.warning(&format!("Would stop: {conflict}"))?,
        None => output.success("No conflicts")?,
    }
    Ok(())
}

fn show_report(report: &InitReport, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Electron + Webpack project initialized at {}",
        report.root.display()
    ))?;

    for dir in &report.created_dirs {
        output.print(&format!("  created {}/", relative(dir, &report.root).display()))?;
    }
    for file in &report.written_files {
        output.print(&format!("  wrote   {}", relative(file, &report.root).display()))?;
    }
    Ok(())
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(feature = "interactive")]
fn confirm_force(path: &Path) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!(
            "--force overwrites existing entry scripts in {}. Continue?",
            path.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

/// Without a prompt, `--force` is its own confirmation.
#[cfg(not(feature = "interactive"))]
fn confirm_force(_path: &Path) -> CliResult<bool> {
    Ok(true)
}
