//! Module prioritization ratings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::LikertScore;

/// The four modules the user rates on the prioritization screen,
/// in the fixed order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityModule {
    TeamDevelopment,
    InterfaceManagement,
    CoachingDevelopment,
    ManagerialFocus,
}

impl PriorityModule {
    pub const ALL: [PriorityModule; 4] = [
        PriorityModule::TeamDevelopment,
        PriorityModule::InterfaceManagement,
        PriorityModule::CoachingDevelopment,
        PriorityModule::ManagerialFocus,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TeamDevelopment => "Team Development",
            Self::InterfaceManagement => "Interface Management",
            Self::CoachingDevelopment => "Coaching & Employee Development",
            Self::ManagerialFocus => "Managerial Focus / Time",
        }
    }
}

impl fmt::Display for PriorityModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Three independent 1-5 ratings for one module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePriority {
    /// How valuable working on the module would be.
    #[serde(default)]
    pub value: LikertScore,
    /// How feasible it is right now.
    #[serde(default)]
    pub feasibility: LikertScore,
    /// How ready the manager feels.
    #[serde(default)]
    pub readiness: LikertScore,
}

impl ModulePriority {
    pub fn new(value: i64, feasibility: i64, readiness: i64) -> Self {
        Self {
            value: LikertScore::new(value),
            feasibility: LikertScore::new(feasibility),
            readiness: LikertScore::new(readiness),
        }
    }
}

/// Ratings for all four modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePriorities {
    #[serde(default)]
    pub team_development: ModulePriority,
    #[serde(default)]
    pub interface_management: ModulePriority,
    #[serde(default)]
    pub coaching_development: ModulePriority,
    #[serde(default)]
    pub managerial_focus: ModulePriority,
}

impl ModulePriorities {
    pub fn get(&self, module: PriorityModule) -> &ModulePriority {
        match module {
            PriorityModule::TeamDevelopment => &self.team_development,
            PriorityModule::InterfaceManagement => &self.interface_management,
            PriorityModule::CoachingDevelopment => &self.coaching_development,
            PriorityModule::ManagerialFocus => &self.managerial_focus,
        }
    }

    pub fn set(&mut self, module: PriorityModule, priority: ModulePriority) {
        match module {
            PriorityModule::TeamDevelopment => self.team_development = priority,
            PriorityModule::InterfaceManagement => self.interface_management = priority,
            PriorityModule::CoachingDevelopment => self.coaching_development = priority,
            PriorityModule::ManagerialFocus => self.managerial_focus = priority,
        }
    }

    /// Ratings in the fixed evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (PriorityModule, &ModulePriority)> + '_ {
        PriorityModule::ALL
            .into_iter()
            .map(move |module| (module, self.get(module)))
    }
}
