//! Constants - scaling law and display tuning for the unit hierarchy.

/// Headcount of the base tier. Every other tier is a multiple of this.
pub const BASE_POPULATION: i64 = 10;

/// How many units of tier i-1 make one unit of tier i.
pub const TIER_FACTOR: i64 = 3;

/// Maximum marker boxes drawn for an algebra result. The numeric result is
/// never capped, only the rendered row.
pub const MARKER_DISPLAY_CAP: i64 = 50;

/// The camp puzzle uses the three smallest tiers (weights 10 / 30 / 90).
pub const CAMP_TIER_COUNT: usize = 3;

/// Target headcount the camp puzzle starts with.
pub const DEFAULT_CAMP_TARGET: i64 = 1000;

/// Suggested minimum target shown next to the input. Display hint only,
/// smaller values are accepted unchanged.
pub const MIN_TARGET_HINT: i64 = 10;

// ============================================================================
// UI TUNING
// ============================================================================

/// Horizontal indent per nested tier in the hierarchy panel.
pub const TIER_INDENT: f32 = 14.0;

/// Side length of one marker box in the algebra panel.
pub const MARKER_SIZE: f32 = 12.0;
