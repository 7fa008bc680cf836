//! Command table model and extraction

use std::path::Path;

use serde::Serialize;
use vsix_descriptor::Document;

use crate::{Error, Guid, Result};

/// A named integer symbol inside a GUID group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdSymbol {
    pub name: String,
    pub value: u32,
}

/// A named set of command/menu/group IDs scoped under one GUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidGroup {
    pub name: String,
    pub guid: Guid,
    /// Symbols in document order.
    pub ids: Vec<IdSymbol>,
}

/// An ordered collection of GUID groups, possibly merged from several
/// `.vsct` documents. Group names are unique across the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandTable {
    groups: Vec<GuidGroup>,
}

impl CommandTable {
    /// Extract the `<Symbols>` section of a single command-table document.
    pub fn extract(doc: &Document) -> Result<Self> {
        // Revalidated parse of an already-loaded document.
        let tree = roxmltree::Document::parse(doc.source())
            .map_err(|e| vsix_descriptor::Error::malformed("<vsct>", &e))?;

        let mut table = Self::default();
        for node in tree
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "GuidSymbol")
        {
            let name = node
                .attribute("name")
                .ok_or(Error::MissingSymbolAttribute { attribute: "name" })?
                .to_string();
            let value = node
                .attribute("value")
                .ok_or(Error::MissingSymbolAttribute { attribute: "value" })?;
            let guid = Guid::parse(value)?;

            let mut ids = Vec::new();
            for id_node in node
                .children()
                .filter(|n| n.is_element() && n.tag_name().name() == "IDSymbol")
            {
                let id_name = id_node
                    .attribute("name")
                    .ok_or(Error::MissingSymbolAttribute { attribute: "name" })?
                    .to_string();
                let id_value = id_node
                    .attribute("value")
                    .ok_or(Error::MissingSymbolAttribute { attribute: "value" })?;
                if ids.iter().any(|s: &IdSymbol| s.name == id_name) {
                    return Err(Error::DuplicateIdName {
                        group: name,
                        name: id_name,
                    });
                }
                ids.push(IdSymbol {
                    value: parse_symbol_value(&name, &id_name, id_value)?,
                    name: id_name,
                });
            }

            table.push_group(GuidGroup { name, guid, ids })?;
        }

        tracing::debug!(groups = table.groups.len(), "extracted command table");
        Ok(table)
    }

    /// Extract and merge several command-table documents, in the given
    /// order. A group name appearing in more than one document fails the
    /// whole operation; nothing is silently overridden.
    pub fn extract_all<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut merged = Self::default();
        for path in paths {
            let doc = Document::load(path)?;
            let partial = Self::extract(&doc)?;
            for group in partial.groups {
                merged.push_group(group)?;
            }
        }
        Ok(merged)
    }

    /// Groups in extraction (document) order.
    pub fn groups(&self) -> &[GuidGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push_group(&mut self, group: GuidGroup) -> Result<()> {
        if self.groups.iter().any(|g| g.name == group.name) {
            return Err(Error::DuplicateGroupName { name: group.name });
        }
        self.groups.push(group);
        Ok(())
    }
}

/// Parse an ID value as written: `0x` prefix means hex, otherwise decimal.
/// The value is stored as the integer it denotes, never reinterpreted.
fn parse_symbol_value(group: &str, name: &str, value: &str) -> Result<u32> {
    let trimmed = value.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        trimmed.parse()
    };
    parsed.map_err(|_| Error::InvalidIdValue {
        group: group.to_string(),
        name: name.to_string(),
        value: value.to_string(),
    })
}
