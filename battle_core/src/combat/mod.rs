//! Combat resolution - sequence the attacks of one round

mod follow_up;
mod options;
mod resolution;
mod result;

pub use follow_up::{grants_follow_up, grants_potent, resolve_follow_ups, FollowUps};
pub use options::BattleOptions;
pub use resolution::{preview_round, resolve_round};
pub use result::{AttackResult, BattleResult, DamageStep, Phase, RoundTrace};
