/*!
A compact dictionary engine storing a finite set of lowercase strings as a
minimized Directed Acyclic Word Graph (DAWG).

Three operations: exact word membership ([`Graph::lookup`]), constrained
anagram enumeration over a letter rack with positional constraints
([`Graph::anagrams`]), and bidirectional binary serialization
([`Graph::serialize`]/[`Graph::deserialize`]).

Build a graph incrementally with [`Builder`], feeding it words in
strictly ascending lexicographic order, then call
[`Builder::finalize`] to get an immutable, minimized, index-addressed
[`Graph`].
*/

pub mod builder;
pub mod byte_buffer;
pub mod error;
pub mod graph;
pub mod letter;

pub use builder::Builder;
pub use error::{DawgError, Result};
pub use graph::Graph;
