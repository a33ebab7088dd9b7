//! Attack resolution - apply one attack between two characters

mod resolution;
mod result;

pub use resolution::resolve_attack;
pub use result::AttackOutcome;
