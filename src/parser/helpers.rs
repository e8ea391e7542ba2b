//! Small lookups over `roxmltree` nodes.

use roxmltree::Node;

/// Value of `enable` that turns a step off. Any other value (or none) keeps it on.
pub const DISABLED_FLAG: &str = "False";

/// `true` unless the step carries `enable="False"` exactly.
pub fn is_enabled(step: Node<'_, '_>) -> bool {
    step.attribute("enable") != Some(DISABLED_FLAG)
}

/// First direct child element with the given tag name.
pub fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.has_tag_name(tag))
}

/// Text of the step's `<StepText>` child. `None` when the element is missing
/// or has no text.
pub fn step_text(step: Node<'_, '_>) -> Option<String> {
    child_element(step, "StepText")
        .and_then(|t| t.text())
        .map(|s| s.to_string())
}
