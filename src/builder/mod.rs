/*!
Incremental DAWG minimization.

Words must arrive in strictly ascending byte order. The builder keeps a
spine of not-yet-canonicalized nodes (`unchecked`) that grows and shrinks
by exactly the common-prefix length between consecutive words, so each
node is minimized in depth-first post-order as soon as it's known no
further word will extend it.
*/

pub mod node;

use std::collections::HashMap;

use crate::error::{DawgError, Result};
use crate::graph::Graph;
use crate::letter::lowercase_word;
use node::{signature, BuilderNode};

/// A single-writer, synchronous constructor for a [`Graph`].
///
/// Builder nodes live in an arena (`Vec<BuilderNode>`) rather than behind
/// shared pointers, so a node's edges are plain indices into that arena
/// instead of `Rc`/`Weak` references that would otherwise form cycles.
pub struct Builder {
  arena: Vec<BuilderNode>,
  root: usize,
  previous: Vec<u8>,
  unchecked: Vec<(usize, u8, usize)>,
  minimized: HashMap<String, usize>,
  next_id: u64,
  finalized: bool,
}

impl Default for Builder {
  fn default() -> Self {
    Self::new()
  }
}

impl Builder {
  pub fn new() -> Self {
    let root = BuilderNode::new(0);
    Self {
      arena: vec![root],
      root: 0,
      previous: Vec::new(),
      unchecked: Vec::new(),
      minimized: HashMap::new(),
      next_id: 1,
      finalized: false,
    }
  }

  fn new_node(&mut self) -> usize {
    let id = self.next_id;
    self.next_id += 1;
    self.arena.push(BuilderNode::new(id));
    self.arena.len() - 1
  }

  fn signature_of(&self, idx: usize) -> String {
    signature(&self.arena[idx], |child_idx| self.arena[child_idx].id)
  }

  /// Inserts `word` into the builder. `word` must be non-empty and
  /// strictly greater (byte-wise) than the previously inserted word.
  pub fn insert(&mut self, word: &[u8]) -> Result<()> {
    if self.finalized {
      return Err(DawgError::PostFinalizeMutation);
    }
    if word.is_empty() {
      return Err(DawgError::InvalidArgument("word must not be empty".into()));
    }

    let word = lowercase_word(word);
    if word.as_slice() <= self.previous.as_slice() {
      return Err(DawgError::OrderViolation {
        previous: String::from_utf8_lossy(&self.previous).into_owned(),
        word: String::from_utf8_lossy(&word).into_owned(),
      });
    }

    log::trace!("inserting {:?}", String::from_utf8_lossy(&word));

    let common = word
      .iter()
      .zip(self.previous.iter())
      .take_while(|(a, b)| a == b)
      .count();

    self.minimize_down_to(common);

    let mut parent = self.unchecked.last().map_or(self.root, |&(_, _, c)| c);
    for &letter in &word[common..] {
      let child = self.new_node();
      self.arena[parent].set_edge(letter, child);
      self.unchecked.push((parent, letter, child));
      parent = child;
    }

    self.arena[parent].is_final = true;
    self.previous = word;
    Ok(())
  }

  fn minimize_down_to(&mut self, k: usize) {
    while self.unchecked.len() > k {
      let (parent, letter, child) = self.unchecked.pop().unwrap();
      let sig = self.signature_of(child);
      if let Some(&canonical) = self.minimized.get(&sig) {
        log::debug!("minimization table hit: node {child} collapses onto {canonical}");
        self.arena[parent].set_edge(letter, canonical);
      } else {
        self.minimized.insert(sig, child);
      }
    }
  }

  /// Minimizes the remaining spine and flattens the result into an
  /// immutable, index-addressed [`Graph`]. Marks the builder finalized;
  /// any subsequent [`Builder::insert`] call fails with
  /// [`DawgError::PostFinalizeMutation`].
  pub fn finalize(&mut self) -> Graph {
    self.minimize_down_to(0);
    self.finalized = true;
    let graph = flatten(&self.arena, self.root);
    log::debug!(
      "finalized builder: {} arena nodes minimized to {} graph nodes",
      self.arena.len(),
      graph.nodes().len()
    );
    graph
  }
}

/// Walks the reachable subset of the arena from `root`, assigns dense
/// indices by sorting on original builder identity, and
/// rewrites every edge to point at a dense index instead of an arena
/// index.
fn flatten(arena: &[BuilderNode], root: usize) -> Graph {
  let mut reachable = Vec::new();
  let mut seen = vec![false; arena.len()];
  let mut stack = vec![root];
  seen[root] = true;

  while let Some(idx) = stack.pop() {
    reachable.push(idx);
    for &child in arena[idx].edges.values() {
      if !seen[child] {
        seen[child] = true;
        stack.push(child);
      }
    }
  }

  reachable.sort_by_key(|&idx| arena[idx].id);

  let dense_index: HashMap<usize, usize> = reachable
    .iter()
    .enumerate()
    .map(|(dense, &arena_idx)| (arena_idx, dense))
    .collect();

  let nodes = reachable
    .iter()
    .map(|&arena_idx| {
      let node = &arena[arena_idx];
      let edges = node
        .edges
        .iter()
        .map(|(&letter, &child)| (letter, dense_index[&child]))
        .collect();
      crate::graph::node::Node::new(node.is_final, edges)
    })
    .collect();

  Graph::from_nodes(nodes)
}
