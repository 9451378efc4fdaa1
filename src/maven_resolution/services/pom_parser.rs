//! Pure extraction functions over a parsed POM.
//!
//! Every function takes the `<project>` element through the [`PomElement`]
//! trait and returns plain data. Nothing here fetches or mediates.

use crate::maven_resolution::domain::{GavKey, ParentRef, PomElement, QueueEntry, DEFAULT_SCOPE};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Property name to value, in declaration order
pub type PropertyMap = IndexMap<String, String>;

/// Which declared dependencies are followed during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyFilter {
    include_scopes: HashSet<String>,
    blacklist: HashSet<GavKey>,
    ignore_optional: bool,
}

impl DependencyFilter {
    pub fn new(
        include_scopes: impl IntoIterator<Item = String>,
        blacklist: impl IntoIterator<Item = GavKey>,
        ignore_optional: bool,
    ) -> Self {
        Self {
            include_scopes: include_scopes.into_iter().collect(),
            blacklist: blacklist.into_iter().collect(),
            ignore_optional,
        }
    }

    pub fn is_blacklisted(&self, key: &GavKey) -> bool {
        self.blacklist.contains(key)
    }

    pub fn includes_scope(&self, scope: &str) -> bool {
        self.include_scopes.contains(scope)
    }

    pub fn ignores_optional(&self) -> bool {
        self.ignore_optional
    }
}

impl Default for DependencyFilter {
    /// compile and runtime scopes, no blacklist, optional dependencies skipped
    fn default() -> Self {
        Self::new(
            ["compile".to_string(), "runtime".to_string()],
            Vec::new(),
            true,
        )
    }
}

/// Text of `<packaging>`, if declared
pub fn parse_packaging<E: PomElement>(root: &E) -> Option<String> {
    root.child_text("packaging")
}

/// Children of `<properties>` keyed by local tag name. An empty element maps
/// to the empty string.
pub fn parse_properties<E: PomElement>(root: &E) -> PropertyMap {
    root.child("properties")
        .map(|properties| {
            properties
                .element_children()
                .into_iter()
                .map(|property| (property.local_name(), property.text().unwrap_or_default()))
                .collect()
        })
        .unwrap_or_default()
}

/// Substitutes `${name}` for every entry of `properties`, in one pass over
/// the map.
///
/// A placeholder whose name is not in the map stays as written. Values are
/// not re-scanned, so a property defined in terms of another property is
/// only expanded if the referenced entry comes later in the map.
pub fn resolve_property(value: &str, properties: &PropertyMap) -> String {
    properties
        .iter()
        .fold(value.to_string(), |resolved, (name, replacement)| {
            resolved.replace(&format!("${{{}}}", name), replacement)
        })
}

/// The `<parent>` coordinates, taken literally. All three of groupId,
/// artifactId and version must be present.
pub fn parse_parent_ref<E: PomElement>(root: &E) -> Option<ParentRef> {
    let parent = root.child("parent")?;
    Some(ParentRef {
        group_id: parent.child_text("groupId")?,
        artifact_id: parent.child_text("artifactId")?,
        version: parent.child_text("version")?,
    })
}

/// Direct dependencies under `<project><dependencies>` that pass `filter`
///
/// Entries in `<dependencyManagement>` are not dependencies and are ignored.
pub fn parse_dependencies<E: PomElement>(
    root: &E,
    properties: &PropertyMap,
    filter: &DependencyFilter,
) -> Vec<QueueEntry> {
    let Some(dependencies) = root.child("dependencies") else {
        return Vec::new();
    };

    dependencies
        .children_named("dependency")
        .iter()
        .filter_map(|dependency| parse_dependency(dependency, properties, filter))
        .collect()
}

fn parse_dependency<E: PomElement>(
    dependency: &E,
    properties: &PropertyMap,
    filter: &DependencyFilter,
) -> Option<QueueEntry> {
    let group_id = resolve_property(&declared_text(dependency, "groupId")?, properties);
    let artifact_id = resolve_property(&declared_text(dependency, "artifactId")?, properties);

    if filter.is_blacklisted(&GavKey::new(group_id.as_str(), artifact_id.as_str())) {
        return None;
    }

    if filter.ignores_optional() && dependency.child_text("optional").as_deref() == Some("true") {
        return None;
    }

    let version = declared_text(dependency, "version")
        .map(|version| resolve_property(&version, properties))
        .unwrap_or_default();
    let scope = declared_text(dependency, "scope")
        .map(|scope| resolve_property(&scope, properties))
        .unwrap_or_else(|| DEFAULT_SCOPE.to_string());

    if !filter.includes_scope(&scope) {
        return None;
    }

    if group_id.is_empty() || artifact_id.is_empty() || version.is_empty() {
        return None;
    }

    Some(QueueEntry::new(group_id, artifact_id, version, scope))
}

/// Text of a child element that is present, empty string for `<tag/>`
fn declared_text<E: PomElement>(element: &E, name: &str) -> Option<String> {
    element
        .child(name)
        .map(|child| child.text().unwrap_or_default())
}
