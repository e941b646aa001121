use crate::menu::{ItemNode, MenuNode, SectionNode};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref DEFAULT_SIDEBAR: Vec<MenuNode> = build_default_sidebar();
}

/// The sidebar shipped with the application. Built once and shared for the whole process.
pub fn default_sidebar() -> &'static [MenuNode] {
    &DEFAULT_SIDEBAR
}

#[derive(Debug, Error)]
pub enum MenuConfigError {
    #[error("Menu configuration is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Section headings must not be empty")]
    EmptyHeading,

    #[error("Menu item names must not be empty")]
    EmptyItemName,
}

/// A menu tree loaded from configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuConfig {
    pub nodes: Vec<MenuNode>,
}

impl MenuConfig {
    pub fn new(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    pub fn from_json(json: &str) -> Result<Self, MenuConfigError> {
        let config: MenuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MenuConfigError> {
        for node in &self.nodes {
            match node {
                MenuNode::Section(section) => {
                    if section.heading.trim().is_empty() {
                        return Err(MenuConfigError::EmptyHeading);
                    }
                    validate_items(&section.children)?;
                }
                MenuNode::Item(item) => validate_items(std::slice::from_ref(item))?,
            }
        }
        Ok(())
    }
}

fn validate_items(items: &[ItemNode]) -> Result<(), MenuConfigError> {
    for item in items {
        if item.name.trim().is_empty() {
            return Err(MenuConfigError::EmptyItemName);
        }
        if let Some(children) = &item.children {
            validate_items(children)?;
        }
    }
    Ok(())
}

fn build_default_sidebar() -> Vec<MenuNode> {
    vec![
        SectionNode::new(
            "HOME",
            vec![ItemNode::new("Dashboard", "").icon("solar:widget-add-line-duotone")],
        )
        .into(),
        SectionNode::new(
            "Auth",
            vec![
                ItemNode::new("Login", "/auth/login").icon("solar:login-2-linear"),
                ItemNode::new("Register", "/auth/register").icon("solar:shield-user-outline"),
            ],
        )
        .into(),
        SectionNode::new(
            "UTILITIES",
            vec![
                ItemNode::new("Typography", "/ui/typography").icon("solar:text-circle-outline"),
                ItemNode::new("Table", "/ui/table").icon("solar:bedside-table-3-linear"),
                ItemNode::new("Form", "/ui/form").icon("solar:password-minimalistic-outline"),
                ItemNode::new("Alert", "/ui/alert").icon("solar:airbuds-case-charge-outline"),
            ],
        )
        .into(),
    ]
}
