//! Module keys, depths and the derived selection mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::questionnaire::PriorityModule;

/// The four coaching modules that can be studied in full or light depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKey {
    Coaching,
    Interfaces,
    Focus,
    Team,
}

impl ModuleKey {
    /// Keys in their natural listing order.
    pub const ALL: [ModuleKey; 4] = [
        ModuleKey::Coaching,
        ModuleKey::Interfaces,
        ModuleKey::Focus,
        ModuleKey::Team,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coaching => "coaching",
            Self::Interfaces => "interfaces",
            Self::Focus => "focus",
            Self::Team => "team",
        }
    }

    /// Position in [`MODULE_PRIORITY_ORDER`]; lower wins.
    pub fn priority_rank(&self) -> usize {
        MODULE_PRIORITY_ORDER
            .iter()
            .position(|key| key == self)
            .unwrap_or(MODULE_PRIORITY_ORDER.len())
    }
}

impl From<PriorityModule> for ModuleKey {
    fn from(module: PriorityModule) -> Self {
        match module {
            PriorityModule::TeamDevelopment => Self::Team,
            PriorityModule::InterfaceManagement => Self::Interfaces,
            PriorityModule::CoachingDevelopment => Self::Coaching,
            PriorityModule::ManagerialFocus => Self::Focus,
        }
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed ranking used to break every full/light constraint conflict.
/// This order is a product decision and is not derived from answers.
pub const MODULE_PRIORITY_ORDER: [ModuleKey; 4] = [
    ModuleKey::Focus,
    ModuleKey::Coaching,
    ModuleKey::Interfaces,
    ModuleKey::Team,
];

/// Treatment depth of a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleDepth {
    Full,
    #[default]
    Light,
}

impl ModuleDepth {
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
}

impl fmt::Display for ModuleDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Depth assigned to each of the four modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleSelection {
    pub coaching: ModuleDepth,
    pub interfaces: ModuleDepth,
    pub focus: ModuleDepth,
    pub team: ModuleDepth,
}

impl ModuleSelection {
    pub fn get(&self, key: ModuleKey) -> ModuleDepth {
        match key {
            ModuleKey::Coaching => self.coaching,
            ModuleKey::Interfaces => self.interfaces,
            ModuleKey::Focus => self.focus,
            ModuleKey::Team => self.team,
        }
    }

    pub fn set(&mut self, key: ModuleKey, depth: ModuleDepth) {
        match key {
            ModuleKey::Coaching => self.coaching = depth,
            ModuleKey::Interfaces => self.interfaces = depth,
            ModuleKey::Focus => self.focus = depth,
            ModuleKey::Team => self.team = depth,
        }
    }

    /// Keys and depths in [`ModuleKey::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (ModuleKey, ModuleDepth)> + '_ {
        ModuleKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn full_count(&self) -> usize {
        self.entries().filter(|(_, depth)| depth.is_full()).count()
    }

    /// Full modules, highest priority first.
    pub fn full_modules(&self) -> Vec<ModuleKey> {
        self.by_priority(ModuleDepth::Full)
    }

    /// Light modules, highest priority first.
    pub fn light_modules(&self) -> Vec<ModuleKey> {
        self.by_priority(ModuleDepth::Light)
    }

    fn by_priority(&self, depth: ModuleDepth) -> Vec<ModuleKey> {
        MODULE_PRIORITY_ORDER
            .into_iter()
            .filter(|key| self.get(*key) == depth)
            .collect()
    }
}
