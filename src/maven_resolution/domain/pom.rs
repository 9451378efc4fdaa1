//! Thin document-access layer over parsed POM XML.
//!
//! The parser functions only need child lookup by local name, element
//! iteration and text content, so they are written against [`PomElement`]
//! rather than a concrete XML library.

/// Read-only view of one XML element, matched by local tag name so that
/// namespaced (`xmlns="http://maven.apache.org/POM/4.0.0"`) and bare POMs
/// are treated alike.
pub trait PomElement: Sized {
    /// Local tag name, without namespace
    fn local_name(&self) -> String;

    /// Trimmed text content, `None` when empty
    fn text(&self) -> Option<String>;

    /// Element children in document order
    fn element_children(&self) -> Vec<Self>;

    /// First element child with the given local name
    fn child(&self, name: &str) -> Option<Self> {
        self.element_children()
            .into_iter()
            .find(|child| child.local_name() == name)
    }

    /// All element children with the given local name
    fn children_named(&self, name: &str) -> Vec<Self> {
        self.element_children()
            .into_iter()
            .filter(|child| child.local_name() == name)
            .collect()
    }

    /// Text of the first child with the given local name
    fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).and_then(|child| child.text())
    }
}

/// A parsed POM document backed by `roxmltree`
pub struct PomDocument<'input> {
    document: roxmltree::Document<'input>,
}

impl<'input> PomDocument<'input> {
    /// Parses POM text. A `<!DOCTYPE>` declaration is accepted.
    ///
    /// # Errors
    /// Returns the XML error for malformed documents
    pub fn parse(text: &'input str) -> Result<Self, roxmltree::Error> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let document = roxmltree::Document::parse_with_options(text, options)?;
        Ok(Self { document })
    }

    /// The `<project>` element
    pub fn root(&self) -> XmlElement<'_, 'input> {
        XmlElement(self.document.root_element())
    }
}

/// [`PomElement`] implementation for a `roxmltree` node
#[derive(Debug, Clone, Copy)]
pub struct XmlElement<'a, 'input>(roxmltree::Node<'a, 'input>);

impl PomElement for XmlElement<'_, '_> {
    fn local_name(&self) -> String {
        self.0.tag_name().name().to_string()
    }

    fn text(&self) -> Option<String> {
        self.0
            .text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }

    fn element_children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter(|node| node.is_element())
            .map(XmlElement)
            .collect()
    }
}
