//! The manifest content injection pipeline

use std::path::PathBuf;

use vsix_descriptor::{Document, ns};

use crate::diagnostics::{Code, Diagnostic};

/// One injection invocation: source/destination paths, discovery flags,
/// and the folder names to record. Constructed once, consumed once.
#[derive(Debug, Clone)]
pub struct InjectRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub has_project_templates: bool,
    pub has_item_templates: bool,
    pub project_templates_path: String,
    pub item_templates_path: String,
}

impl InjectRequest {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            has_project_templates: false,
            has_item_templates: false,
            project_templates_path: "ProjectTemplates".to_string(),
            item_templates_path: "ItemTemplates".to_string(),
        }
    }
}

/// Result record of one injection run. Diagnostics are the side channel;
/// nothing is thrown across the pipeline boundary.
#[derive(Debug, Clone)]
pub struct InjectOutcome {
    pub success: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl InjectOutcome {
    /// The diagnostics of fatal severity, if any.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == crate::Severity::Error)
    }
}

/// Produce a derived manifest at the destination with the requested
/// content entries present exactly once.
///
/// The source file is never mutated. A save always occurs once loading
/// succeeded, whether or not anything was modified; every fatal path
/// aborts before the destination is written, so no partial artifact is
/// ever left behind.
pub fn inject(request: &InjectRequest) -> InjectOutcome {
    let mut diagnostics = Vec::new();
    let success = match run(request, &mut diagnostics) {
        Ok(()) => true,
        Err(diagnostic) => {
            tracing::error!(code = ?diagnostic.code, "{}", diagnostic.message);
            diagnostics.push(diagnostic);
            false
        }
    };
    InjectOutcome {
        success,
        diagnostics,
    }
}

fn run(request: &InjectRequest, diagnostics: &mut Vec<Diagnostic>) -> Result<(), Diagnostic> {
    let vsix = Some(ns::VSIX_2011);

    if !request.source.exists() {
        return Err(Diagnostic::error(
            Code::SourceNotFound,
            format!("Source manifest not found: {}", request.source.display()),
        ));
    }

    let mut doc = Document::load(&request.source).map_err(descriptor_diag)?;

    if doc
        .find_single("PackageManifest", vsix)
        .map_err(descriptor_diag)?
        .is_none()
    {
        return Err(Diagnostic::error(
            Code::InvalidStructure,
            format!(
                "Invalid manifest {}: PackageManifest element not found",
                request.source.display()
            ),
        ));
    }

    let wants_content = request.has_project_templates || request.has_item_templates;
    let has_content = doc
        .find_single("PackageManifest/Content", vsix)
        .map_err(descriptor_diag)?
        .is_some();

    if wants_content && !has_content {
        doc.append_element("PackageManifest", vsix, "Content", &[])
            .map_err(descriptor_diag)?;
        diagnostics.push(Diagnostic::notice("Created Content element in manifest"));
    }

    if wants_content || has_content {
        // Project templates first; each kind is independent, so the order
        // never changes the result.
        if request.has_project_templates {
            inject_entry(
                &mut doc,
                diagnostics,
                "ProjectTemplate",
                &request.project_templates_path,
            )?;
        }
        if request.has_item_templates {
            inject_entry(
                &mut doc,
                diagnostics,
                "ItemTemplate",
                &request.item_templates_path,
            )?;
        }
    }

    // The derived manifest is always produced once loading succeeded.
    doc.save(&request.destination).map_err(|e| {
        Diagnostic::error(
            Code::IoFailure,
            format!(
                "Cannot write derived manifest {}: {e}",
                request.destination.display()
            ),
        )
    })?;

    if doc.is_modified() {
        diagnostics.push(Diagnostic::notice(format!(
            "Injected template Content entries into manifest: {}",
            request.destination.display()
        )));
    } else {
        diagnostics.push(Diagnostic::notice(format!(
            "No template Content injection needed, copied manifest to: {}",
            request.destination.display()
        )));
    }

    Ok(())
}

fn inject_entry(
    doc: &mut Document,
    diagnostics: &mut Vec<Diagnostic>,
    kind: &str,
    folder: &str,
) -> Result<(), Diagnostic> {
    let vsix = Some(ns::VSIX_2011);
    let path = format!("PackageManifest/Content/{kind}");

    if doc.find_single(&path, vsix).map_err(descriptor_diag)?.is_some() {
        diagnostics.push(Diagnostic::info(format!(
            "{kind} entry already exists, skipping injection"
        )));
    } else {
        doc.append_element(
            "PackageManifest/Content",
            vsix,
            kind,
            &[("Path", folder)],
        )
        .map_err(descriptor_diag)?;
        diagnostics.push(Diagnostic::notice(format!(
            "Added {kind} entry with Path='{folder}'"
        )));
    }
    Ok(())
}

fn descriptor_diag(error: vsix_descriptor::Error) -> Diagnostic {
    use vsix_descriptor::Error as E;
    let code = match &error {
        E::FileNotFound { .. } => Code::SourceNotFound,
        E::Io { .. } | E::LockFailed { .. } => Code::IoFailure,
        E::ElementNotFound { .. } | E::AmbiguousPath { .. } => Code::InvalidStructure,
        E::MalformedXml { .. } => Code::Unexpected,
    };
    Diagnostic::error(code, error.to_string())
}
