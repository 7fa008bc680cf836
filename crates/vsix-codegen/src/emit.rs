//! Constant artifact emission

use std::fmt::Write;

use vsix_manifest::ManifestMetadata;
use vsix_vsct::CommandTable;

use crate::ident::{to_snake_case, to_screaming_snake_case};
use crate::{Error, Result};

/// Render the extracted models into a Rust source artifact.
///
/// Output is deterministic: identical inputs produce byte-identical bytes.
/// No timestamps; groups and IDs appear in extraction (document) order.
pub fn emit(metadata: &ManifestMetadata, table: &CommandTable) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "// Generated from VSIX descriptors by vsixgen. Do not edit.")?;
    writeln!(out)?;
    writeln!(out, "#![allow(dead_code)]")?;
    writeln!(out)?;

    emit_metadata(&mut out, metadata)?;

    for group in table.groups() {
        writeln!(out)?;
        emit_group(&mut out, group)?;
    }

    tracing::debug!(bytes = out.len(), "emitted constant artifact");
    Ok(out)
}

fn emit_metadata(out: &mut String, metadata: &ManifestMetadata) -> Result<()> {
    writeln!(out, "/// Constants extracted from the package manifest.")?;
    writeln!(out, "pub mod vsix_info {{")?;
    let fields = [
        ("ID", &metadata.identifier),
        ("VERSION", &metadata.version),
        ("DISPLAY_NAME", &metadata.display_name),
        ("PUBLISHER", &metadata.publisher),
        ("LANGUAGE", &metadata.language),
        ("DESCRIPTION", &metadata.description),
        ("MORE_INFO", &metadata.more_info),
        ("LICENSE", &metadata.license),
        ("GETTING_STARTED_GUIDE", &metadata.getting_started_guide),
        ("RELEASE_NOTES", &metadata.release_notes),
        ("ICON", &metadata.icon),
        ("PREVIEW_IMAGE", &metadata.preview_image),
        ("TAGS", &metadata.tags),
    ];
    for (name, value) in fields {
        writeln!(
            out,
            "    pub const {name}: &str = {};",
            string_literal(name, value)?
        )?;
    }
    writeln!(out, "    pub const PREVIEW: bool = {};", metadata.preview)?;
    writeln!(out, "    pub const ALL_USERS: bool = {};", metadata.all_users)?;
    writeln!(out, "}}")?;
    Ok(())
}

fn emit_group(out: &mut String, group: &vsix_vsct::GuidGroup) -> Result<()> {
    writeln!(out, "/// Symbols of the `{}` GUID group.", group.name)?;
    writeln!(out, "pub mod {} {{", to_snake_case(&group.name))?;
    writeln!(
        out,
        "    pub const GUID_STRING: &str = {};",
        string_literal(&group.name, &group.guid.braced_upper())?
    )?;
    writeln!(
        out,
        "    pub const GUID: ::uuid::Uuid = ::uuid::uuid!(\"{}\");",
        group.guid.dashed_lower()
    )?;
    for id in &group.ids {
        writeln!(
            out,
            "    pub const {}: u32 = {};",
            to_screaming_snake_case(&id.name),
            id.value
        )?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Render a Rust string literal whose compiled value equals `value`
/// byte for byte. Double quotes and backslashes are escaped; control
/// characters use `\u{..}` escapes.
fn string_literal(field: &str, value: &str) -> Result<String> {
    if value.contains('\0') {
        return Err(Error::Escaping {
            field: field.to_string(),
            reason: "contains a NUL character".to_string(),
        });
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let mut buf = String::new();
                write!(buf, "\\u{{{:x}}}", c as u32)?;
                out.push_str(&buf);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}
