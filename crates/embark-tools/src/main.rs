//! embark CLI - Scaffolds mobile app projects from a boilerplate

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use embark_core::config::Selection;
use embark_core::{
    android_sdk_installed, resolve_boilerplate_root, CliclackPrompts, ConsoleReporter,
    InstallPipeline, InstallRequest, ProductConfig, ReactNativeCli, ShellRunner,
};
use std::path::Path;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// embark product configuration
#[derive(Clone)]
pub struct EmbarkConfig;

impl ProductConfig for EmbarkConfig {
    fn name(&self) -> &'static str {
        "embark"
    }

    fn display_name(&self) -> &'static str {
        "Embark"
    }

    fn default_addon(&self) -> &'static str {
        "embark-base-plate"
    }

    fn framework_version(&self) -> &'static str {
        "0.57.8"
    }

    fn boilerplate_dir_env(&self) -> &'static str {
        "EMBARK_BOILERPLATE_DIR"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/embark-dev/embark"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding mobile app projects"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        vec![
            format!("cd {}", dir.display()),
            "react-native run-ios".to_string(),
            "react-native run-android".to_string(),
            "embark --help".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "embark")]
#[command(about = "CLI for scaffolding mobile app projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    New(NewArgs),
}

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Project name
    pub name: String,

    /// Add-on package to install after scaffolding
    #[arg(short = 'b', long = "boilerplate")]
    pub boilerplate: Option<String>,

    /// Use the minimal preset instead of prompting
    #[arg(long)]
    pub min: bool,

    /// Use the maximal preset instead of prompting
    #[arg(long)]
    pub max: bool,

    /// Use the function-first preset instead of prompting
    #[arg(long)]
    pub function: bool,

    /// Pass --debug through to the add-on install
    #[arg(long)]
    pub debug: bool,

    /// Skip version-control initialization
    #[arg(long = "skip-git")]
    pub skip_git: bool,
}

impl NewArgs {
    fn selection(&self) -> Selection {
        if self.min {
            Selection::Preset("min".to_string())
        } else if self.max {
            Selection::Preset("max".to_string())
        } else if self.function {
            Selection::Preset("function".to_string())
        } else {
            Selection::Interactive(Box::new(CliclackPrompts))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    match args.command {
        Command::New(new_args) => run_new(new_args).await,
    }
}

async fn run_new(args: NewArgs) -> Result<()> {
    let config = EmbarkConfig;
    let boilerplate = resolve_boilerplate_root(&config);
    let target_dir = std::env::current_dir()?;

    let mut pipeline = InstallPipeline::new(
        config.clone(),
        CLI_VERSION,
        boilerplate,
        target_dir,
        Box::new(ReactNativeCli),
        Box::new(ShellRunner),
        Box::new(ConsoleReporter),
    );

    let request = InstallRequest {
        name: args.name.clone(),
        selection: args.selection(),
        addon: args.boilerplate.clone(),
        framework_version: None,
        debug: args.debug,
        skip_git: args.skip_git,
    };

    let summary = match pipeline.run(request).await {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            let _ = console::Term::stderr().show_cursor();
            std::process::exit(err.exit_status());
        }
    };

    let elapsed = summary.elapsed.as_secs_f64();
    println!();
    println!(
        "    {} embarked {} in {}",
        config.display_name().red(),
        summary.options.name.yellow(),
        format!("{:.2}s", elapsed).dimmed()
    );
    println!();
    println!("    To get started:");
    println!();
    for step in config.next_steps(&summary.project_dir) {
        println!("      {}", step);
    }

    if !android_sdk_installed() {
        println!();
        println!(
            "    {}",
            "To run in Android, make sure the Android SDK is installed and ANDROID_HOME is set \
             before using react-native run-android."
                .yellow()
        );
    }

    println!();
    println!("    {}", "Now get cooking!".bold());

    let _ = console::Term::stderr().show_cursor();
    Ok(())
}
