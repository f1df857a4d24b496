//! Menu tree composition.
//!
//! Turns the flat menu item table into the nested, ordered navigation
//! tree a principal is allowed to see.

mod composer;

pub use composer::{MenuTree, compose_tree};
