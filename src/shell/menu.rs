//! The application menu as plain data.
//!
//! The tree is built once by [`MenuTree::application`] and handed to the
//! host, which renders it however the platform likes. Activating an entry
//! turns into a [`MenuCommand`] routed back to the shell.

use crate::types::ComponentId;

/// Platform-provided actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardAction {
    Quit,
    Reload,
    ForceReload,
    ToggleDevTools,
    ToggleFullscreen,
}

impl StandardAction {
    pub fn label(self) -> &'static str {
        match self {
            StandardAction::Quit => "Quit",
            StandardAction::Reload => "Reload",
            StandardAction::ForceReload => "Force Reload",
            StandardAction::ToggleDevTools => "Toggle DevTools",
            StandardAction::ToggleFullscreen => "Toggle Fullscreen",
        }
    }
}

/// Actions behind the shell's own menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SwitchComponent(ComponentId),
    About,
}

/// What activating a menu entry asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Standard(StandardAction),
    Custom(MenuAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Standard(StandardAction),
    Separator,
    Custom { label: String, action: MenuAction },
}

impl MenuEntry {
    fn custom(label: &str, action: MenuAction) -> Self {
        MenuEntry::Custom {
            label: label.to_string(),
            action,
        }
    }

    /// Display label; separators have none.
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Standard(action) => Some(action.label()),
            MenuEntry::Separator => None,
            MenuEntry::Custom { label, .. } => Some(label),
        }
    }

    pub fn command(&self) -> Option<MenuCommand> {
        match self {
            MenuEntry::Standard(action) => Some(MenuCommand::Standard(*action)),
            MenuEntry::Separator => None,
            MenuEntry::Custom { action, .. } => Some(MenuCommand::Custom(*action)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

/// Ordered, immutable menu hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    groups: Vec<MenuGroup>,
}

impl MenuTree {
    /// File / View / Help menu of the calculator.
    pub fn application() -> Self {
        let file = MenuGroup {
            label: "File".to_string(),
            entries: vec![MenuEntry::Standard(StandardAction::Quit)],
        };

        let view = MenuGroup {
            label: "View".to_string(),
            entries: vec![
                MenuEntry::custom(
                    "Magnetization Calculator",
                    MenuAction::SwitchComponent(ComponentId::Magnetization),
                ),
                MenuEntry::custom(
                    "Arbitrary Lattice",
                    MenuAction::SwitchComponent(ComponentId::Arbitrary),
                ),
                MenuEntry::Separator,
                MenuEntry::Standard(StandardAction::Reload),
                MenuEntry::Standard(StandardAction::ForceReload),
                MenuEntry::Standard(StandardAction::ToggleDevTools),
                MenuEntry::Standard(StandardAction::ToggleFullscreen),
            ],
        };

        let help = MenuGroup {
            label: "Help".to_string(),
            entries: vec![MenuEntry::custom("About", MenuAction::About)],
        };

        Self {
            groups: vec![file, view, help],
        }
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// Look up an entry by group and entry label.
    #[cfg(test)]
    pub fn find(&self, group: &str, label: &str) -> Option<&MenuEntry> {
        self.groups
            .iter()
            .find(|g| g.label == group)?
            .entries
            .iter()
            .find(|e| e.label() == Some(label))
    }
}
