//! Command implementations

use std::path::{Path, PathBuf};

use colored::Colorize;
use vsix_codegen::emit;
use vsix_descriptor::{Document, io};
use vsix_inject::{InjectRequest, Severity, inject};
use vsix_manifest::ManifestMetadata;
use vsix_vsct::CommandTable;

use crate::error::{CliError, Result};

pub fn cmd_codegen(manifest: &Path, vsct: &[PathBuf], out: &Path) -> Result<()> {
    let doc = Document::load(manifest)?;
    let metadata = ManifestMetadata::extract(&doc)?;
    let table = CommandTable::extract_all(vsct)?;

    let artifact = emit(&metadata, &table)?;
    io::write_atomic(out, artifact.as_bytes())?;

    println!(
        "{} {} ({} GUID groups)",
        "generated".green().bold(),
        out.display(),
        table.groups().len()
    );
    Ok(())
}

pub struct InjectArgs {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub project_templates: bool,
    pub item_templates: bool,
    pub project_templates_path: String,
    pub item_templates_path: String,
    pub json: bool,
}

pub fn cmd_inject(args: InjectArgs) -> Result<()> {
    let mut request = InjectRequest::new(args.source, args.dest);
    request.has_project_templates = args.project_templates;
    request.has_item_templates = args.item_templates;
    request.project_templates_path = args.project_templates_path;
    request.item_templates_path = args.item_templates_path;

    let outcome = inject(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.diagnostics)?);
    } else {
        for diagnostic in &outcome.diagnostics {
            match diagnostic.severity {
                Severity::Error => {
                    eprintln!("{}: {}", "error".red().bold(), diagnostic)
                }
                Severity::Notice => println!("{diagnostic}"),
                Severity::Info => println!("{}", diagnostic.to_string().dimmed()),
            }
        }
    }

    if !outcome.success {
        return Err(CliError::user("manifest content injection failed"));
    }
    Ok(())
}
