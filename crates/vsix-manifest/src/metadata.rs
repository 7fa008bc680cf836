//! Manifest metadata record and extraction

use serde::Serialize;
use vsix_descriptor::{Document, ns};

use crate::{Error, Result};

/// The scalar fields of a `source.extension.vsixmanifest`.
///
/// Text values hold the entity-decoded source text exactly; re-escaping
/// for emission is the emitter's job and must be lossless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestMetadata {
    pub identifier: String,
    pub version: String,
    pub display_name: String,
    pub publisher: String,
    pub language: String,
    pub description: String,
    pub more_info: String,
    pub license: String,
    pub getting_started_guide: String,
    pub release_notes: String,
    pub icon: String,
    pub preview_image: String,
    pub tags: String,
    pub preview: bool,
    pub all_users: bool,
}

impl ManifestMetadata {
    /// Extract metadata from a parsed manifest document.
    ///
    /// Identifier, version, and display name are required; their absence is
    /// a hard error. Every other field defaults to empty / false.
    pub fn extract(doc: &Document) -> Result<Self> {
        let vsix = Some(ns::VSIX_2011);

        let identity = doc
            .find_single("PackageManifest/Metadata/Identity", vsix)?
            .ok_or_else(|| Error::missing("Metadata/Identity"))?;

        let identifier = identity
            .attribute("Id")
            .ok_or_else(|| Error::missing("Identity/@Id"))?
            .to_string();
        let version = identity
            .attribute("Version")
            .ok_or_else(|| Error::missing("Identity/@Version"))?
            .to_string();
        let publisher = identity.attribute("Publisher").unwrap_or_default().to_string();
        let language = identity.attribute("Language").unwrap_or_default().to_string();

        let display_name = child_text(doc, "PackageManifest/Metadata/DisplayName")?
            .ok_or_else(|| Error::missing("Metadata/DisplayName"))?;

        let all_users = doc
            .find_single("PackageManifest/Installation", vsix)?
            .and_then(|e| e.attribute("AllUsers").map(parse_flag))
            .unwrap_or(false);

        let metadata = Self {
            identifier,
            version,
            display_name,
            publisher,
            language,
            description: optional_text(doc, "Description")?,
            more_info: optional_text(doc, "MoreInfo")?,
            license: optional_text(doc, "License")?,
            getting_started_guide: optional_text(doc, "GettingStartedGuide")?,
            release_notes: optional_text(doc, "ReleaseNotes")?,
            icon: optional_text(doc, "Icon")?,
            preview_image: optional_text(doc, "PreviewImage")?,
            tags: optional_text(doc, "Tags")?,
            preview: child_text(doc, "PackageManifest/Metadata/Preview")?
                .map(|t| parse_flag(&t))
                .unwrap_or(false),
            all_users,
        };

        tracing::debug!(id = %metadata.identifier, version = %metadata.version, "extracted manifest metadata");
        Ok(metadata)
    }
}

fn child_text(doc: &Document, path: &str) -> Result<Option<String>> {
    Ok(doc
        .find_single(path, Some(ns::VSIX_2011))?
        .and_then(|e| e.text))
}

fn optional_text(doc: &Document, name: &str) -> Result<String> {
    Ok(child_text(doc, &format!("PackageManifest/Metadata/{name}"))?.unwrap_or_default())
}

/// Lenient boolean: `true`/`1` in any casing, everything else false.
fn parse_flag(text: &str) -> bool {
    let text = text.trim();
    text.eq_ignore_ascii_case("true") || text == "1"
}
