//! Whitespace-preserving descriptor document

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::{Error, Result, io};

/// Handle for reading and mutating an XML descriptor while preserving its
/// original formatting.
///
/// Reading is done by parsing on demand via `roxmltree`. Mutations splice
/// the raw source string using byte-accurate positions from
/// `roxmltree::Node::range()`, so whitespace, comments, CDATA sections, and
/// attribute ordering are never touched outside the edited region. An
/// unmodified document therefore serializes to its original bytes exactly.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    origin: Option<PathBuf>,
    modified: bool,
}

/// Owned snapshot of a single element, detached from the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    pub local_name: String,
    pub namespace: Option<String>,
    /// Attributes in document order, values entity-decoded.
    pub attributes: Vec<(String, String)>,
    /// First text child, entity-decoded.
    pub text: Option<String>,
    /// Byte range of the whole element in the raw source.
    pub range: Range<usize>,
}

impl ElementInfo {
    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

enum Splice {
    Insert { at: usize, text: String },
    Replace { range: Range<usize>, text: String },
}

impl Document {
    /// Parse a descriptor from an XML source string.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        roxmltree::Document::parse(&source)
            .map_err(|e| Error::malformed("<string>", &e))?;
        Ok(Self {
            source,
            origin: None,
            modified: false,
        })
    }

    /// Load a descriptor from disk.
    ///
    /// A missing file is [`Error::FileNotFound`]; anything that does not
    /// parse is [`Error::MalformedXml`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = io::read_text(path)?;
        roxmltree::Document::parse(&source)
            .map_err(|e| Error::malformed(path.display().to_string(), &e))?;
        tracing::debug!(path = %path.display(), "loaded descriptor");
        Ok(Self {
            source,
            origin: Some(path.to_path_buf()),
            modified: false,
        })
    }

    /// The current raw XML source (reflects any mutations).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The path this document was loaded from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// True once any structural mutation has been applied.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Find the single element addressed by a slash-separated path of local
    /// names, rooted at the document element (e.g.
    /// `"PackageManifest/Content"`).
    ///
    /// When `namespace` is given, every segment must carry that namespace
    /// URI; otherwise namespaces are ignored. Returns `Ok(None)` when
    /// nothing matches and [`Error::AmbiguousPath`] when more than one
    /// element matches -- a multi-match is never silently resolved.
    pub fn find_single(
        &self,
        path: &str,
        namespace: Option<&str>,
    ) -> Result<Option<ElementInfo>> {
        let doc = self.tree()?;
        let nodes = find_nodes(&doc, path, namespace);
        match nodes.len() {
            0 => Ok(None),
            1 => Ok(Some(element_info(&nodes[0]))),
            count => Err(Error::AmbiguousPath {
                path: path.to_string(),
                count,
            }),
        }
    }

    /// Create a namespaced child element and append it as the last child of
    /// the element addressed by `parent_path`.
    ///
    /// The new element is emitted self-closing with the given attributes
    /// (values XML-escaped). Indentation is derived from the surrounding
    /// siblings; a self-closing parent is expanded in place. Marks the
    /// document modified.
    pub fn append_element(
        &mut self,
        parent_path: &str,
        namespace: Option<&str>,
        local_name: &str,
        attributes: &[(&str, &str)],
    ) -> Result<()> {
        let splice = {
            let doc = self.tree()?;
            let nodes = find_nodes(&doc, parent_path, namespace);
            let parent = match nodes.len() {
                0 => {
                    return Err(Error::ElementNotFound {
                        path: parent_path.to_string(),
                    });
                }
                1 => nodes[0],
                count => {
                    return Err(Error::AmbiguousPath {
                        path: parent_path.to_string(),
                        count,
                    });
                }
            };

            let tag = render_tag(&parent, local_name, namespace, attributes);

            let parent_range = parent.range();
            let parent_indent = line_indent(&self.source, parent_range.start);
            let child_indent = parent
                .children()
                .find(|c| c.is_element())
                .map(|c| line_indent(&self.source, c.range().start))
                .unwrap_or_else(|| format!("{parent_indent}  "));

            let parent_src = &self.source[parent_range.clone()];
            if parent_src.ends_with("/>") {
                // Expand `<Parent/>` into an open/close pair around the child.
                let open = parent_src[..parent_src.len() - 2].trim_end();
                let close_name = tag_name_text(parent_src);
                let text = format!(
                    "{open}>\n{child_indent}{tag}\n{parent_indent}</{close_name}>"
                );
                Splice::Replace {
                    range: parent_range,
                    text,
                }
            } else {
                // The last "</" inside the element's range is its own
                // closing tag.
                let close_rel = parent_src.rfind("</").ok_or_else(|| {
                    Error::MalformedXml {
                        origin: self.origin_label(),
                        message: format!("element at '{parent_path}' has no closing tag"),
                    }
                })?;
                let close_abs = parent_range.start + close_rel;
                match self.source[..close_abs].rfind('\n') {
                    Some(nl)
                        if self.source[nl + 1..close_abs]
                            .chars()
                            .all(|c| c == ' ' || c == '\t') =>
                    {
                        // Pretty-printed parent: slot the child in on its
                        // own line, keeping the closing tag's indent.
                        Splice::Insert {
                            at: nl + 1,
                            text: format!("{child_indent}{tag}\n"),
                        }
                    }
                    _ => Splice::Insert {
                        at: close_abs,
                        text: format!("\n{child_indent}{tag}\n{parent_indent}"),
                    },
                }
            }
        };

        match splice {
            Splice::Insert { at, text } => self.source.insert_str(at, &text),
            Splice::Replace { range, text } => self.source.replace_range(range, &text),
        }
        self.modified = true;
        tracing::debug!(parent = parent_path, element = local_name, "appended element");
        Ok(())
    }

    /// Write the (potentially mutated) source to disk atomically, creating
    /// any missing destination directories first.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        io::write_atomic(path, self.source.as_bytes())?;
        tracing::debug!(path = %path.display(), modified = self.modified, "saved descriptor");
        Ok(())
    }

    fn tree(&self) -> Result<roxmltree::Document<'_>> {
        // Validated at construction; a failure here means a splice broke
        // wellformedness.
        roxmltree::Document::parse(&self.source)
            .map_err(|e| Error::malformed(self.origin_label(), &e))
    }

    fn origin_label(&self) -> String {
        self.origin
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<string>".to_string())
    }
}

fn matches(node: &roxmltree::Node<'_, '_>, name: &str, namespace: Option<&str>) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && namespace.is_none_or(|uri| node.tag_name().namespace() == Some(uri))
}

fn find_nodes<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    path: &str,
    namespace: Option<&str>,
) -> Vec<roxmltree::Node<'a, 'input>> {
    let mut segments = path.trim_matches('/').split('/');
    let Some(first) = segments.next() else {
        return Vec::new();
    };

    let root = doc.root_element();
    if !matches(&root, first, namespace) {
        return Vec::new();
    }

    let mut current = vec![root];
    for segment in segments {
        current = current
            .iter()
            .flat_map(|n| n.children().filter(|c| matches(c, segment, namespace)))
            .collect();
    }
    current
}

fn element_info(node: &roxmltree::Node<'_, '_>) -> ElementInfo {
    ElementInfo {
        local_name: node.tag_name().name().to_string(),
        namespace: node.tag_name().namespace().map(str::to_string),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect(),
        text: node.text().map(str::to_string),
        range: node.range(),
    }
}

/// Render a self-closing element tag, resolving the namespace against the
/// bindings in scope at `context`. An unbound namespace gets an explicit
/// `xmlns` declaration on the new element.
fn render_tag(
    context: &roxmltree::Node<'_, '_>,
    local_name: &str,
    namespace: Option<&str>,
    attributes: &[(&str, &str)],
) -> String {
    let mut tag = String::from("<");
    let mut xmlns = None;

    match namespace {
        None => tag.push_str(local_name),
        Some(uri) => {
            let bindings: Vec<_> = context
                .namespaces()
                .filter(|ns| ns.uri() == uri)
                .collect();
            if bindings.iter().any(|ns| ns.name().is_none()) {
                // Bound as the default namespace: unprefixed.
                tag.push_str(local_name);
            } else if let Some(prefix) = bindings.iter().find_map(|ns| ns.name()) {
                tag.push_str(prefix);
                tag.push(':');
                tag.push_str(local_name);
            } else {
                tag.push_str(local_name);
                xmlns = Some(uri);
            }
        }
    }

    if let Some(uri) = xmlns {
        tag.push_str(&format!(" xmlns=\"{}\"", escape_attr(uri)));
    }
    for (name, value) in attributes {
        tag.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
    tag.push_str("/>");
    tag
}

/// XML-escape an attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// The leading whitespace of the line containing byte `pos`, or empty when
/// the position does not start a fresh line.
fn line_indent(source: &str, pos: usize) -> String {
    let line_start = source[..pos].rfind('\n').map_or(0, |nl| nl + 1);
    let prefix = &source[line_start..pos];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix.to_string()
    } else {
        String::new()
    }
}

/// The qualified tag name as written in the source, e.g. `vsix:Content`.
fn tag_name_text(element_src: &str) -> &str {
    let inner = element_src.strip_prefix('<').unwrap_or(element_src);
    let end = inner
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(inner.len());
    &inner[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_indent_of_indented_element() {
        let src = "<a>\n  <b/>\n</a>";
        assert_eq!(line_indent(src, 6), "  ");
    }

    #[test]
    fn line_indent_inline_is_empty() {
        let src = "<a><b/></a>";
        assert_eq!(line_indent(src, 3), "");
    }

    #[test]
    fn tag_name_with_prefix() {
        assert_eq!(tag_name_text("<vsix:Content attr=\"x\">"), "vsix:Content");
        assert_eq!(tag_name_text("<Content/>"), "Content");
    }

    #[test]
    fn escape_attr_covers_specials() {
        assert_eq!(escape_attr(r#"a&b<c>d"e"#), "a&amp;b&lt;c&gt;d&quot;e");
    }
}
