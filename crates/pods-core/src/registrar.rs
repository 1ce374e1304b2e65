//! Pod declarations and the registrars that receive them

use pods_fs::NormalizedPath;
use serde::Serialize;

use crate::{Error, Result};

/// A local, path-based pod dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodDeclaration {
    pub name: String,
    #[serde(serialize_with = "serialize_path")]
    pub path: NormalizedPath,
}

fn serialize_path<S: serde::Serializer>(path: &NormalizedPath, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(path.as_str())
}

impl PodDeclaration {
    pub fn new(name: impl Into<String>, path: NormalizedPath) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    /// Render as a Podfile DSL line, e.g. `pod 'camera', :path => '.symlinks/plugins/camera/ios'`.
    pub fn to_podfile_line(&self) -> String {
        format!(
            "pod '{}', :path => '{}'",
            ruby_quote(&self.name),
            ruby_quote(self.path.as_str())
        )
    }
}

/// Escape for a Ruby single-quoted string literal.
fn ruby_quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// The native build tool's dependency declaration API.
pub trait PodRegistrar {
    fn declare(&mut self, declaration: &PodDeclaration) -> Result<()>;
}

/// Registrar that records every declaration in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingRegistrar {
    declarations: Vec<PodDeclaration>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declarations(&self) -> &[PodDeclaration] {
        &self.declarations
    }
}

impl PodRegistrar for RecordingRegistrar {
    fn declare(&mut self, declaration: &PodDeclaration) -> Result<()> {
        self.declarations.push(declaration.clone());
        Ok(())
    }
}

/// Registrar that renders a Podfile fragment.
#[derive(Debug, Default, Clone)]
pub struct PodfileRegistrar {
    lines: Vec<String>,
    indent: String,
}

impl PodfileRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent every rendered line, for fragments placed inside a `target` block.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The fragment rendered so far, one declaration per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&self.indent);
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl PodRegistrar for PodfileRegistrar {
    fn declare(&mut self, declaration: &PodDeclaration) -> Result<()> {
        let breaks_line = |s: &str| s.contains(['\n', '\r']);
        if breaks_line(&declaration.name) || breaks_line(declaration.path.as_str()) {
            return Err(Error::Registration {
                name: declaration.name.clone(),
                message: "line breaks cannot be written to a Podfile".to_string(),
            });
        }
        self.lines.push(declaration.to_podfile_line());
        Ok(())
    }
}
