//! Move relations for simultaneous-move games.
//!
//! A variant is a finite set of named moves plus a directed "beats"
//! relation among them. Relations are built from static tables
//! ([`Variant`]) into a per-game arena ([`MoveRelation`]) where moves are
//! addressed by [`MoveId`] and edges are stored as indices.

mod moves;
mod variant;

pub use moves::{Move, MoveId, MoveRelation, Outcome};
pub use variant::Variant;
