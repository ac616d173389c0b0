//! Template expansion into page nodes

use tracing::{debug, warn};

use super::registry::{Template, TemplateRegistry};
use crate::model::{ComponentNode, SectionProps};

/// Build fresh nodes for every section of `template`, in order.
///
/// Each node starts from the kind's default props, with the template's props
/// replacing whole fields. Item lists are rebuilt with fresh ids, so two
/// expansions never share an identity.
pub fn expand(template: &Template) -> Vec<ComponentNode> {
    template
        .items
        .iter()
        .map(|item| {
            let mut props = SectionProps::defaults(item.kind);
            if let Err(err) = props.apply_fields(&item.props) {
                warn!(template = %template.id, kind = %item.kind, %err, "template props not applied");
            }
            let variant = item
                .variant
                .clone()
                .or_else(|| item.kind.default_variant().map(str::to_string));
            ComponentNode::from_parts(props, variant)
        })
        .collect()
}

impl TemplateRegistry {
    /// Expand a registered template; empty if the id is unknown
    pub fn expand(&self, id: &str) -> Vec<ComponentNode> {
        match self.get(id) {
            Some(template) => expand(template),
            None => {
                debug!(template = id, "unknown template");
                Vec::new()
            }
        }
    }
}
