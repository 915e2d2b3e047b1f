//! Lineup assembly: roster to forward lines, defense pairs and goalies.

mod assembler;
mod deployment;

pub use assembler::{assemble_lineup, lineup_for_today};
pub use deployment::{
    defense_pair_weight, forward_line_weight, DEFENSE_PAIR_WEIGHTS, FORWARD_LINE_WEIGHTS,
};
