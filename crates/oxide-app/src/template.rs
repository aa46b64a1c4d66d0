//! Template tag registry.
//!
//! Extensions register tags under a namespace. A page template refers to a
//! tag with a `{{ tag_name }}` directive, which [`TemplateRegistry::expand`]
//! replaces with the nodes the tag produces.

use std::sync::{Arc, LazyLock};

use oxide_forms::Node;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::error::{AppError, Result};

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("Invalid directive regex")
});

/// A template directive that emits markup nodes.
pub trait TemplateTag: Send + Sync {
    /// Appends the tag's nodes to `top`.
    ///
    /// Implementations only append; existing nodes stay untouched.
    fn process(&self, top: &mut Vec<Node>);
}

/// A named group of template tags.
#[derive(Clone)]
pub struct TemplateExtension {
    namespace: String,
    tags: Vec<(String, Arc<dyn TemplateTag>)>,
}

impl std::fmt::Debug for TemplateExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateExtension")
            .field("namespace", &self.namespace)
            .field(
                "tags",
                &self.tags.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl TemplateExtension {
    /// Creates an empty extension.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            tags: Vec::new(),
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn tag(mut self, name: impl Into<String>, tag: impl TemplateTag + 'static) -> Self {
        self.tags.push((name.into(), Arc::new(tag)));
        self
    }

    /// Returns the namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// All template extensions known to an application.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    extensions: Vec<TemplateExtension>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extension.
    pub fn add(&mut self, extension: TemplateExtension) -> Result<()> {
        if self.extensions.iter().any(|e| e.namespace == extension.namespace) {
            warn!(namespace = %extension.namespace, "template namespace already registered");
            return Err(AppError::DuplicateNamespace(extension.namespace));
        }
        for (name, _) in &extension.tags {
            if self.find(name).is_some() {
                warn!(tag = %name, "template tag already registered");
                return Err(AppError::DuplicateTag(name.clone()));
            }
        }
        debug!(namespace = %extension.namespace, "registered template extension");
        self.extensions.push(extension);
        Ok(())
    }

    /// Returns whether a namespace is registered.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.extensions.iter().any(|e| e.namespace == namespace)
    }

    /// Looks a tag up by name.
    pub fn find(&self, name: &str) -> Option<&dyn TemplateTag> {
        self.extensions
            .iter()
            .flat_map(|e| e.tags.iter())
            .find(|(tag_name, _)| tag_name == name)
            .map(|(_, tag)| tag.as_ref())
    }

    /// Runs a tag and returns its nodes.
    pub fn process(&self, name: &str) -> Option<Vec<Node>> {
        self.find(name).map(|tag| {
            let mut top = Vec::new();
            tag.process(&mut top);
            top
        })
    }

    /// Replaces every registered `{{ tag }}` directive in `source`.
    ///
    /// Directives naming unknown tags are left as they are.
    pub fn expand(&self, source: &str) -> String {
        DIRECTIVE
            .replace_all(source, |caps: &Captures<'_>| match self.process(&caps[1]) {
                Some(nodes) => nodes
                    .iter()
                    .map(Node::render)
                    .collect::<Vec<_>>()
                    .join("\n"),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hello;

    impl TemplateTag for Hello {
        fn process(&self, top: &mut Vec<Node>) {
            top.push(Node::raw("<b>hello</b>"));
            top.push(Node::raw("<i>world</i>"));
        }
    }

    fn registry() -> TemplateRegistry {
        let mut registry = TemplateRegistry::new();
        registry
            .add(TemplateExtension::new("Greet").tag("hello", Hello))
            .unwrap();
        registry
    }

    #[test]
    fn test_expand_known_directive() {
        let html = registry().expand("<head>{{ hello }}</head>");
        assert_eq!(html, "<head><b>hello</b>\n<i>world</i></head>");
    }

    #[test]
    fn test_unknown_directive_untouched() {
        let html = registry().expand("{{ title }} {{hello}}");
        assert_eq!(html, "{{ title }} <b>hello</b>\n<i>world</i>");
    }

    #[test]
    fn test_process_appends() {
        let registry = registry();
        let nodes = registry.process("hello").unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(registry.process("missing").is_none());
    }

    #[test]
    fn test_duplicate_namespace() {
        let mut registry = registry();
        let err = registry
            .add(TemplateExtension::new("Greet"))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateNamespace(ns) if ns == "Greet"));
        assert!(registry.has_namespace("Greet"));
    }

    #[test]
    fn test_duplicate_tag() {
        let mut registry = registry();
        let err = registry
            .add(TemplateExtension::new("Other").tag("hello", Hello))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateTag(name) if name == "hello"));
    }
}
