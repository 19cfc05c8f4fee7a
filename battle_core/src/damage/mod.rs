//! Damage system - the per-hit damage pipeline and its breakdown

mod breakdown;
mod calculation;

pub use breakdown::DamageBreakdown;
pub use calculation::{
    calculate_damage, calculate_damage_between, triangle_advantage, DamageOverrides,
};
