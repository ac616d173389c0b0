//! The in-memory page: section nodes, root layout and global design

use tracing::{debug, warn};

use super::config::{GlobalDesignConfig, LayoutConfig};
use super::fields::FieldValue;
use super::ids::{ItemId, NodeId};
use super::items::move_element;
use super::section::{SectionKind, SectionProps};
use crate::style::{DirectiveSet, StyleCategory};
use crate::template::TemplateRegistry;
use crate::theme::{ResolvedTheme, ThemeCatalog};

/// One section placed on the page
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    pub id: NodeId,
    /// Key into the kind's registered variants; `None` for kinds without any
    pub variant: Option<String>,
    pub props: SectionProps,
    /// The section's own style override
    pub style: DirectiveSet,
}

impl ComponentNode {
    /// Fresh node with default props and the kind's first variant
    pub fn new(kind: SectionKind) -> Self {
        Self::from_parts(
            SectionProps::defaults(kind),
            kind.default_variant().map(str::to_string),
        )
    }

    /// Fresh node from already built props
    pub fn from_parts(props: SectionProps, variant: Option<String>) -> Self {
        Self {
            id: NodeId::new(),
            variant,
            props,
            style: DirectiveSet::new(),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.props.kind()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

/// The page being assembled, and every operation that edits it.
///
/// Operations addressing a node or item that no longer exists do nothing and
/// return `false` (or an empty result); editors routinely race with removal.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    components: Vec<ComponentNode>,
    layout: LayoutConfig,
    design: GlobalDesignConfig,
    selected: Option<NodeId>,
    templates: TemplateRegistry,
    themes: ThemeCatalog,
}

impl PageModel {
    /// Empty page using the built-in template and theme catalogs
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_themes(mut self, themes: ThemeCatalog) -> Self {
        self.themes = themes;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_design(mut self, design: GlobalDesignConfig) -> Self {
        self.design = design;
        self
    }

    pub fn components(&self) -> &[ComponentNode] {
        &self.components
    }

    pub fn node(&self, id: NodeId) -> Option<&ComponentNode> {
        self.components.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut ComponentNode> {
        let node = self.components.iter_mut().find(|n| n.id == id);
        if node.is_none() {
            debug!(node = %id, "node not found, ignoring");
        }
        node
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    pub fn design(&self) -> &GlobalDesignConfig {
        &self.design
    }

    pub fn design_mut(&mut self) -> &mut GlobalDesignConfig {
        &mut self.design
    }

    /// Restore the global design defaults
    pub fn reset_design(&mut self) {
        debug!("resetting global design");
        self.design = GlobalDesignConfig::default();
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn themes(&self) -> &ThemeCatalog {
        &self.themes
    }

    /// Theme tokens for the current design settings
    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.themes
            .resolve(&self.design.theme, self.design.mode, self.design.radius)
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&ComponentNode> {
        self.selected.and_then(|id| self.node(id))
    }

    /// Select a node; false if it does not exist
    pub fn select(&mut self, id: NodeId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Append a section with default props and select it
    pub fn add_component(&mut self, kind: SectionKind) -> NodeId {
        let node = ComponentNode::new(kind);
        let id = node.id;
        debug!(node = %id, %kind, "adding section");
        self.components.push(node);
        self.selected = Some(id);
        id
    }

    /// Append an already built node and select it
    pub fn push_node(&mut self, node: ComponentNode) -> NodeId {
        let id = node.id;
        self.components.push(node);
        self.selected = Some(id);
        id
    }

    /// Append the sections of a template, selecting the first.
    ///
    /// Returns the new node ids in template order; empty for an unknown id.
    pub fn instantiate_template(&mut self, template_id: &str) -> Vec<NodeId> {
        let nodes = self.templates.expand(template_id);
        if nodes.is_empty() {
            debug!(template = template_id, "nothing to instantiate");
            return Vec::new();
        }
        let ids: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
        debug!(template = template_id, count = ids.len(), "instantiating template");
        self.components.extend(nodes);
        self.selected = ids.first().copied();
        ids
    }

    /// Remove a node, deselecting it if selected
    pub fn remove_component(&mut self, id: NodeId) -> bool {
        let before = self.components.len();
        self.components.retain(|n| n.id != id);
        if self.components.len() == before {
            debug!(node = %id, "node not found, ignoring removal");
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(node = %id, "removed section");
        true
    }

    /// Remove every node
    pub fn clear(&mut self) {
        debug!(count = self.components.len(), "clearing page");
        self.components.clear();
        self.selected = None;
    }

    /// Move the node at `old_index` to `new_index`
    pub fn reorder_components(&mut self, old_index: usize, new_index: usize) -> bool {
        let moved = move_element(&mut self.components, old_index, new_index);
        if !moved {
            debug!(old_index, new_index, "reorder out of range, ignoring");
        }
        moved
    }

    /// Replace one scalar props field. Item lists change only through item operations.
    pub fn update_field(&mut self, id: NodeId, field: &str, value: FieldValue) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        if node.kind().list_field() == Some(field) {
            debug!(node = %id, field, "item lists are edited per item");
            return false;
        }
        let changed = node.props.set_field(field, value);
        if !changed {
            debug!(node = %id, field, "field rejected");
        }
        changed
    }

    /// Switch the node to another registered variant
    pub fn update_variant(&mut self, id: NodeId, variant: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let kind = node.kind();
        if !kind.has_variant(variant) {
            warn!(node = %id, %kind, variant, "variant not registered for kind");
            return false;
        }
        node.variant = Some(variant.to_string());
        true
    }

    /// Replace the node's tokens in `category` with `value`
    pub fn set_style(&mut self, id: NodeId, category: StyleCategory, value: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        node.style.apply(category, value);
        debug!(node = %id, %category, style = %node.style, "style updated");
        true
    }

    /// Like [`PageModel::set_style`] with the category given by name
    pub fn set_style_named(&mut self, id: NodeId, category: &str, value: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let updated = crate::style::apply_named(&node.style.to_string(), category, value);
        node.style = DirectiveSet::parse(&updated);
        true
    }

    /// Replace the whole override string
    pub fn set_classes(&mut self, id: NodeId, raw: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        node.style = DirectiveSet::parse(raw);
        true
    }

    pub fn is_style_active(&self, id: NodeId, value: &str) -> bool {
        self.node(id).is_some_and(|n| n.style.is_active(value))
    }

    pub fn display_value(&self, id: NodeId, prefixes: &[&str]) -> Option<String> {
        self.node(id)?
            .style
            .display_value(prefixes)
            .map(str::to_string)
    }

    /// Duplicate the first item of the node's list with placeholder text
    pub fn add_item(&mut self, id: NodeId) -> Option<ItemId> {
        let items = self.node_mut(id)?.props.items_mut()?;
        let item = items.add_from_first();
        debug!(node = %id, added = item.is_some(), "add item");
        item
    }

    pub fn remove_item(&mut self, id: NodeId, item: ItemId) -> bool {
        self.node_mut(id)
            .and_then(|n| n.props.items_mut())
            .is_some_and(|items| items.remove_item(item))
    }

    pub fn update_item(&mut self, id: NodeId, item: ItemId, field: &str, value: FieldValue) -> bool {
        self.node_mut(id)
            .and_then(|n| n.props.items_mut())
            .is_some_and(|items| items.update_item(item, field, value))
    }

    pub fn reorder_items(&mut self, id: NodeId, old_index: usize, new_index: usize) -> bool {
        self.node_mut(id)
            .and_then(|n| n.props.items_mut())
            .is_some_and(|items| items.reorder_items(old_index, new_index))
    }
}
