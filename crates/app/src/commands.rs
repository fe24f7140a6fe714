//! Subcommand implementations.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use har2loli_application::lolicode::validate_script;
use har2loli_application::ports::FileSystem;
use har2loli_application::use_cases::{
    ExportScript, ExportScriptInput, GenerateScript, GenerateScriptInput,
};
use har2loli_domain::{GeneratorConfig, OrderingStrategy, SettingsPreset};
use har2loli_infrastructure::{
    HarImport, HarImporter, Project, ProjectRepository, TokioFileSystem, summarize,
    to_json_stable,
};

/// Options for `generate`, decoupled from the clap types.
#[derive(Debug)]
pub struct GenerateOptions {
    pub har: PathBuf,
    pub project: Option<PathBuf>,
    pub preset: Option<SettingsPreset>,
    pub auto_order: bool,
    pub out: Option<PathBuf>,
    pub force: bool,
}

pub async fn list(har: &Path) -> anyhow::Result<ExitCode> {
    let import = HarImporter::import_file(&TokioFileSystem::new(), har)
        .await
        .with_context(|| format!("importing {}", har.display()))?;

    for line in summarize(&import.exchanges) {
        println!("{line}");
    }
    report_skipped(&import);
    Ok(ExitCode::SUCCESS)
}

pub async fn generate(options: GenerateOptions) -> anyhow::Result<ExitCode> {
    let fs = TokioFileSystem::new();
    let import = HarImporter::import_file(&fs, &options.har)
        .await
        .with_context(|| format!("importing {}", options.har.display()))?;
    report_skipped(&import);

    let project = match &options.project {
        Some(path) => ProjectRepository::new(fs)
            .load(path)
            .await
            .with_context(|| format!("loading project {}", path.display()))?,
        None => Project {
            config: GeneratorConfig::selecting(0..import.exchanges.len()),
            ordering: OrderingStrategy::Capture,
        },
    };

    let mut config = project.config;
    if let Some(preset) = options.preset {
        config.settings = preset.settings();
    }
    let ordering = if options.auto_order {
        OrderingStrategy::Dependencies
    } else {
        project.ordering
    };

    let output = GenerateScript::new()
        .execute(GenerateScriptInput {
            exchanges: import.exchanges,
            config,
            ordering,
        })
        .await?;

    for error in &output.validation.errors {
        eprintln!("validation: {error}");
    }

    match options.out {
        Some(path) => {
            ExportScript::new(fs)
                .execute(ExportScriptInput {
                    path,
                    script: output.script,
                    overwrite: options.force,
                })
                .await?;
        }
        None => println!("{}", output.script),
    }

    Ok(ExitCode::SUCCESS)
}

pub async fn validate(script: &Path) -> anyhow::Result<ExitCode> {
    let content = TokioFileSystem::new()
        .read_file_string(script)
        .await
        .with_context(|| format!("reading {}", script.display()))?;

    let result = validate_script(&content);
    print!("{}", to_json_stable(&result)?);

    Ok(if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Exchange indices past a skipped entry shift down by one.
fn report_skipped(import: &HarImport) {
    let skipped = import.skipped_entries();
    if !skipped.is_empty() {
        let entries: Vec<String> = skipped.iter().map(ToString::to_string).collect();
        eprintln!(
            "import: skipped {} HAR entries ({})",
            skipped.len(),
            entries.join(", ")
        );
    }
}
