//! The ordered install pipeline
//!
//! Steps execute strictly in sequence; a failure at any step halts the run
//! and surfaces that step's error. No step is skipped, retried, or rolled
//! back, and a failed run leaves the partially materialized project on disk.

use super::fsops::{self, FsError};
use crate::config::{resolver, ConfigError, Options, Selection};
use crate::product::ProductConfig;
use crate::runtime::exec::{ProcessRunner, StdioMode, ToolError};
use crate::runtime::installer::FrameworkInstaller;
use crate::runtime::report::Reporter;
use crate::runtime::version::{resolve_framework_version, VersionError};
use crate::templates::engine::{RenderError, TemplateEngine, TEMPLATE_SUFFIX};
use crate::templates::manifest::{self, ManifestFragment};
use crate::templates::{build_props, compose, COMMON_DIR, PACKAGE_TEMPLATE};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Scaffold artifacts the framework installer leaves behind that our own
/// scaffold supersedes
const SCAFFOLD_ARTIFACTS: &[&str] = &["__tests__", "App.js"];

/// Lines appended to the line-ending-normalization config
const GITATTRIBUTES_LINES: &[&str] = &["*.bat text eol=crlf", "*.cmd text eol=crlf"];

/// Lines appended to the version-control ignore file
const GITIGNORE_LINES: &[&str] = &["# Misc", ".env"];

/// Native link command for the i18n library; must run with output suppressed
/// or it hangs
const LINK_COMMAND: &str = "react-native link react-native-i18n";

const LINT_COMMAND: &str = "yarn run lint";

const GIT_SETUP_COMMAND: &str = r#"git init . && git add . && git commit -m "Initial commit.""#;

/// One ordered, named unit of work in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ResolveConfig,
    FrameworkInstall,
    CleanScaffold,
    CopySkeleton,
    RenderTemplates,
    AppendConfigLines,
    MergeManifest,
    LinkLibraries,
    AddonInstall,
    LintFix,
    GitInit,
}

impl Step {
    pub fn describe(&self) -> &'static str {
        match self {
            Step::ResolveConfig => "resolving configuration",
            Step::FrameworkInstall => "installing the native framework",
            Step::CleanScaffold => "cleaning installer scaffold",
            Step::CopySkeleton => "copying the skeleton",
            Step::RenderTemplates => "generating files",
            Step::AppendConfigLines => "updating config files",
            Step::MergeManifest => "merging the package manifest",
            Step::LinkLibraries => "linking native libraries",
            Step::AddonInstall => "installing the add-on",
            Step::LintFix => "running the linter",
            Step::GitInit => "configuring git",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// The underlying failure of a pipeline step
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("package manifest is not well formed: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// A failed run: the step that halted the pipeline and why
#[derive(Debug, Error)]
#[error("failed while {step}: {source}")]
pub struct InstallError {
    pub step: Step,
    #[source]
    pub source: StepError,
}

impl InstallError {
    /// Exit status for the process: a failing external tool's own status,
    /// 1 for everything else
    pub fn exit_status(&self) -> i32 {
        match &self.source {
            StepError::Tool(ToolError::NonZeroExit { code, .. }) => *code,
            _ => 1,
        }
    }
}

fn fail(step: Step, source: impl Into<StepError>) -> InstallError {
    InstallError {
        step,
        source: source.into(),
    }
}

/// What the caller asked for
pub struct InstallRequest {
    /// Target project name
    pub name: String,
    /// Preset or interactive configuration
    pub selection: Selection,
    /// Add-on to install after scaffolding; the product default when `None`
    pub addon: Option<String>,
    /// Framework version override
    pub framework_version: Option<String>,
    /// Pass `--debug` through to the add-on install
    pub debug: bool,
    /// Skip version-control initialization
    pub skip_git: bool,
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct InstallSummary {
    pub project_dir: PathBuf,
    pub options: Options,
    /// Wall-clock time from start to completion, for reporting only
    pub elapsed: Duration,
}

/// Drives the whole install sequence and reports a single terminal outcome
pub struct InstallPipeline<C: ProductConfig> {
    product: C,
    cli_version: String,
    boilerplate: PathBuf,
    /// Directory the project directory is created in
    target_dir: PathBuf,
    installer: Box<dyn FrameworkInstaller>,
    runner: Box<dyn ProcessRunner>,
    reporter: Box<dyn Reporter>,
}

impl<C: ProductConfig> InstallPipeline<C> {
    pub fn new(
        product: C,
        cli_version: impl Into<String>,
        boilerplate: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
        installer: Box<dyn FrameworkInstaller>,
        runner: Box<dyn ProcessRunner>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            product,
            cli_version: cli_version.into(),
            boilerplate: boilerplate.into(),
            target_dir: target_dir.into(),
            installer,
            runner,
            reporter,
        }
    }

    /// Run every step in order, failing fast on the first error
    pub async fn run(&mut self, request: InstallRequest) -> Result<InstallSummary, InstallError> {
        let started = Instant::now();

        // 1. Resolve configuration
        let options = resolver::resolve(&request.name, request.selection)
            .map_err(|e| fail(Step::ResolveConfig, e))?;
        self.reporter
            .succeed(&format!("using the {} base", self.product.display_name()));

        // 2. Install the native framework or die trying
        let version = resolve_framework_version(
            request.framework_version.as_deref(),
            self.product.framework_version(),
        )
        .map_err(|e| fail(Step::FrameworkInstall, e))?;
        let report = self
            .installer
            .install(&options.name, &version, &self.target_dir)
            .map_err(|e| fail(Step::FrameworkInstall, e))?;
        if report.exit_code != 0 {
            return Err(fail(
                Step::FrameworkInstall,
                ToolError::NonZeroExit {
                    command: format!("react-native init {}", options.name),
                    code: report.exit_code,
                },
            ));
        }
        let project_dir = self.target_dir.join(&options.name);

        // 3. Remove the installer's own scaffold that ours supersedes
        for artifact in SCAFFOLD_ARTIFACTS {
            fsops::remove_existing(&project_dir.join(artifact))
                .await
                .map_err(|e| fail(Step::CleanScaffold, e))?;
        }

        // 4. Materialize the skeleton (and the i18n folder when selected)
        let composition = compose(&options);
        for copy in &composition.copies {
            let src = self.boilerplate.join(&copy.source);
            let dst = if copy.target.is_empty() {
                project_dir.clone()
            } else {
                project_dir.join(&copy.target)
            };
            let exclude = copy.exclude_templates.then_some(TEMPLATE_SUFFIX);
            fsops::copy_dir(&src, &dst, exclude)
                .await
                .map_err(|e| fail(Step::CopySkeleton, e))?;
        }

        // 5. Render every template with the shared property bag
        self.reporter.begin("generating files");
        let engine = TemplateEngine::new(self.boilerplate.join(COMMON_DIR));
        let props = build_props(&options, &self.cli_version, &report.version);
        for spec in &composition.templates {
            let content = engine
                .render(&spec.template, &props)
                .await
                .map_err(|e| fail(Step::RenderTemplates, e))?;
            fsops::write_file(&project_dir.join(&spec.target), &content)
                .await
                .map_err(|e| fail(Step::RenderTemplates, e))?;
        }
        self.reporter.succeed("generated files");

        // 6. Append the fixed config lines (duplicated on re-runs, accepted)
        for line in GITATTRIBUTES_LINES {
            fsops::append_line(&project_dir.join(".gitattributes"), line)
                .await
                .map_err(|e| fail(Step::AppendConfigLines, e))?;
        }
        for line in GITIGNORE_LINES {
            fsops::append_line(&project_dir.join(".gitignore"), line)
                .await
                .map_err(|e| fail(Step::AppendConfigLines, e))?;
        }

        // 7. Merge our manifest overlay into the installer's package.json
        let overlay_text = engine
            .render(PACKAGE_TEMPLATE, &props)
            .await
            .map_err(|e| fail(Step::MergeManifest, e))?;
        let overlay = ManifestFragment::from_json(&overlay_text)
            .map_err(|e| fail(Step::MergeManifest, e))?;
        let manifest_path = project_dir.join("package.json");
        let base_text = fsops::read_to_string(&manifest_path)
            .await
            .map_err(|e| fail(Step::MergeManifest, e))?;
        let base = ManifestFragment::from_json(&base_text)
            .map_err(|e| fail(Step::MergeManifest, e))?;
        let merged = manifest::merge(&base, &overlay);
        let merged_text = merged
            .to_json_pretty()
            .map_err(|e| fail(Step::MergeManifest, e))?;
        fsops::write_file(&manifest_path, &merged_text)
            .await
            .map_err(|e| fail(Step::MergeManifest, e))?;

        // 8. Link native libraries for i18n, output suppressed
        if options.i18n {
            self.reporter.begin("linking native libraries");
            self.runner
                .spawn(LINK_COMMAND, &project_dir, StdioMode::Suppressed)
                .map_err(|e| fail(Step::LinkLibraries, e))?;
            self.reporter.succeed("linked native libraries");
        }

        // 9. Add-on install: the one step whose error is logged and re-raised
        let addon = request
            .addon
            .clone()
            .unwrap_or_else(|| self.product.default_addon().to_string());
        let mut addon_command = format!("{} add {}", self.product.name(), addon);
        if request.debug {
            addon_command.push_str(" --debug");
        }
        if let Err(e) = self
            .runner
            .spawn(&addon_command, &project_dir, StdioMode::Inherit)
        {
            self.reporter.error(&format!("add-on install failed: {}", e));
            return Err(fail(Step::AddonInstall, e));
        }

        // 10. Lint fix
        if options.linter {
            self.runner
                .spawn(LINT_COMMAND, &project_dir, StdioMode::Inherit)
                .map_err(|e| fail(Step::LintFix, e))?;
        }

        // 11. Initial commit, unless a repository already exists or the
        // caller opted out
        if !project_dir.join(".git").exists() && !request.skip_git && self.runner.which("git") {
            self.reporter.begin("configuring git");
            self.runner
                .run(GIT_SETUP_COMMAND, &project_dir)
                .map_err(|e| fail(Step::GitInit, e))?;
            self.reporter.succeed("configured git");
        }

        Ok(InstallSummary {
            project_dir,
            options,
            elapsed: started.elapsed(),
        })
    }
}
