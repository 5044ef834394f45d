//! Test fixtures and seeded scenario generators for foraging development.
//!
//! The canonical 3x3 layout used throughout the unit tests:
//!
//! ```text
//!   col:  0    1    2
//! row 0: A0₁  A1₂   .
//! row 1: A2₂  F0₄  A3₁
//! row 2: F1₃   .    .
//! ```
//!
//! (`A<id><level>` agents, `F<index><level>` food.)

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod scenario;

pub use scenario::{random_layout, shuffled_order, Layout};

use forage_core::{Agent, Food};

pub fn agent0() -> Agent {
    Agent::new(0, 1, (0, 0))
}

pub fn agent1() -> Agent {
    Agent::new(1, 2, (0, 1))
}

pub fn agent2() -> Agent {
    Agent::new(2, 2, (1, 0))
}

pub fn agent3() -> Agent {
    Agent::new(3, 1, (1, 2))
}

/// All four fixture agents, id order.
pub fn agents() -> Vec<Agent> {
    vec![agent0(), agent1(), agent2(), agent3()]
}

/// Level 4 in the centre: reachable by agents 1, 2 and 3 together.
pub fn food0() -> Food {
    Food::new(4, (1, 1))
}

/// Level 3 in the bottom-left corner: only agent 2 is adjacent.
pub fn food1() -> Food {
    Food::new(3, (2, 0))
}

pub fn foods() -> Vec<Food> {
    vec![food0(), food1()]
}
