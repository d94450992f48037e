#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod error;
pub mod linked_list;
pub mod node_arena;
pub mod queue;
pub mod rb_map;
pub mod rb_tree;
pub mod rng;
pub mod stack;

pub use error::InvariantViolation;
pub use linked_list::LinkedList;
pub use node_arena::NodeArena;
pub use queue::Queue;
pub use rb_map::RBMap;
pub use rb_tree::{Color, NodeContents, RBTree, TraversalOrder};
pub use rng::MersenneTwister64;
pub use stack::Stack;
