use crate::menu::{ItemNode, MenuNode, SectionNode};
use crate::Role;

/// Returns the part of the menu tree visible to `role`.
///
/// Items are kept when they are public or list `role`, and their children are filtered the
/// same way at every depth. A kept item whose children were all removed is still kept.
/// Sections are always kept. The input is never modified and sibling order is preserved.
pub fn filter_by_role(nodes: &[MenuNode], role: Option<Role>) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter_map(|node| match node {
            MenuNode::Section(section) => Some(MenuNode::Section(SectionNode {
                heading: section.heading.clone(),
                children: filter_items(&section.children, role),
            })),
            MenuNode::Item(item) => filter_item(item, role).map(MenuNode::Item),
        })
        .collect()
}

pub fn filter_items(items: &[ItemNode], role: Option<Role>) -> Vec<ItemNode> {
    items
        .iter()
        .filter_map(|item| filter_item(item, role))
        .collect()
}

fn filter_item(item: &ItemNode, role: Option<Role>) -> Option<ItemNode> {
    if !item.is_accessible_by(role) {
        return None;
    }
    Some(ItemNode {
        name: item.name.clone(),
        url: item.url.clone(),
        icon: item.icon.clone(),
        children: item
            .children
            .as_deref()
            .map(|children| filter_items(children, role)),
        allowed_roles: item.allowed_roles.clone(),
    })
}
