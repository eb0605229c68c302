//! Page-level actions shown next to the title ("Tambah", "Export", ...).

use serde::{Deserialize, Serialize};

/// What activating an action does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTarget {
    /// Navigate to a route
    Href(String),
    /// Invoke a named command in the host application
    Command(String),
}

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
    Ghost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAction {
    pub label: String,
    #[serde(flatten)]
    pub target: ActionTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub variant: ActionVariant,
}

impl PageAction {
    pub fn href(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: ActionTarget::Href(href.into()),
            icon: None,
            variant: ActionVariant::Default,
        }
    }

    pub fn command(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: ActionTarget::Command(command.into()),
            icon: None,
            variant: ActionVariant::Default,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub const fn with_variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_shape() {
        let action: PageAction = serde_json::from_str(
            r#"{"label": "Tambah", "href": "/rooms/create", "icon": "+", "variant": "outline"}"#,
        )
        .unwrap();
        assert_eq!(action.target, ActionTarget::Href("/rooms/create".to_string()));
        assert_eq!(action.variant, ActionVariant::Outline);

        let action: PageAction =
            serde_json::from_str(r#"{"label": "Export", "command": "export"}"#).unwrap();
        assert_eq!(action.target, ActionTarget::Command("export".to_string()));
        assert_eq!(action.variant, ActionVariant::Default);
    }
}
