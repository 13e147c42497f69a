//! ECS resources - per-component session state shared by the UI systems.
//!
//! Each interactive component owns its state; nothing is shared between
//! them beyond the static scheme table. Everything here is ephemeral and
//! rebuilt from scratch on a scheme switch.

use bevy::prelude::*;

use crate::algebra::Evaluator;
use crate::camp::CampPuzzle;
use crate::constants::DEFAULT_CAMP_TARGET;
use crate::expansion::ExpansionState;
use crate::hierarchy::UnitScheme;
use crate::settings::UserSettings;

/// The scheme every panel currently renders against.
#[derive(Resource)]
pub struct ActiveScheme(pub &'static UnitScheme);

/// Expansion state of the hierarchy tree.
#[derive(Resource)]
pub struct HierarchyView {
    pub expansion: ExpansionState,
}

impl HierarchyView {
    pub fn for_scheme(scheme: &'static UnitScheme) -> Self {
        Self { expansion: ExpansionState::new(scheme.expansion) }
    }
}

/// Expression text plus the compiled term matcher for the active scheme.
#[derive(Resource)]
pub struct AlgebraSession {
    pub expr: String,
    pub evaluator: Evaluator,
}

impl AlgebraSession {
    pub fn for_scheme(scheme: &'static UnitScheme) -> Self {
        Self { expr: scheme.default_expr.to_string(), evaluator: Evaluator::new(scheme) }
    }
}

/// Camp puzzle state plus the raw target input text. The text re-parses on
/// every edit; empty or non-numeric input means a target of 0.
#[derive(Resource)]
pub struct CampSession {
    pub puzzle: CampPuzzle,
    pub target_text: String,
}

impl Default for CampSession {
    fn default() -> Self {
        Self { puzzle: CampPuzzle::default(), target_text: DEFAULT_CAMP_TARGET.to_string() }
    }
}

/// Which panels are open. Mirrored into [`UserSettings`] on change.
#[derive(Resource, Clone, PartialEq, Eq)]
pub struct UiState {
    pub algebra_open: bool,
    pub camp_open: bool,
    pub recap_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { algebra_open: true, camp_open: true, recap_open: true }
    }
}

impl UiState {
    pub fn from_settings(settings: &UserSettings) -> Self {
        Self {
            algebra_open: settings.algebra_open,
            camp_open: settings.camp_open,
            recap_open: settings.recap_open,
        }
    }
}
