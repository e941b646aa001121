mod config;
mod filter;
mod filtered_menu;

pub use config::{default_sidebar, MenuConfig, MenuConfigError};
pub use filter::{filter_by_role, filter_items};
pub use filtered_menu::FilteredMenu;

use crate::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A node of the navigation tree.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuNode {
    /// A heading grouping items. Headings carry no access list.
    Section(SectionNode),
    Item(ItemNode),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SectionNode {
    pub heading: String,
    #[serde(default)]
    pub children: Vec<ItemNode>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemNode {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ItemNode>>,
    /// Roles allowed to see this item. An empty set means the item is public.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub allowed_roles: BTreeSet<Role>,
}

impl SectionNode {
    pub fn new(heading: impl Into<String>, children: Vec<ItemNode>) -> Self {
        Self {
            heading: heading.into(),
            children,
        }
    }
}

impl ItemNode {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: None,
            children: None,
            allowed_roles: BTreeSet::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn children(mut self, children: Vec<ItemNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn allowed_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles = roles.into_iter().collect();
        self
    }

    pub fn is_public(&self) -> bool {
        self.allowed_roles.is_empty()
    }

    /// Public items are visible to everyone, including a session with no role.
    pub fn is_accessible_by(&self, role: Option<Role>) -> bool {
        self.is_public() || role.is_some_and(|role| self.allowed_roles.contains(&role))
    }
}

impl From<SectionNode> for MenuNode {
    fn from(section: SectionNode) -> Self {
        MenuNode::Section(section)
    }
}

impl From<ItemNode> for MenuNode {
    fn from(item: ItemNode) -> Self {
        MenuNode::Item(item)
    }
}
