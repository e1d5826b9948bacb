/*!
Constrained anagram enumeration over a letter rack.

A depth-first search bounded by the DAWG's own edges: at each node we
only ever follow letters the graph actually offers, so the search never
wastes work exploring words that cannot possibly be in the dictionary.
*/

use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::letter::{lowercase_word, to_lowercase};

/// Which position in the output word each fixed letter must occupy.
pub type Fixed = std::collections::BTreeMap<usize, u8>;

/// Never errors: a `word_length` of zero or a fixed position outside
/// `[0, word_length)` can't possibly match anything, so both simply
/// produce an empty set.
pub fn anagrams(
  graph: &Graph,
  rack: &[u8],
  word_length: usize,
  fixed: &Fixed,
  blank: u8,
) -> BTreeSet<String> {
  if word_length == 0 || fixed.keys().any(|&position| position >= word_length) {
    log::debug!("anagram search with unsatisfiable constraints (word_length={word_length}, fixed={fixed:?})");
    return BTreeSet::new();
  }

  let rack = lowercase_word(rack);
  let blank = to_lowercase(blank);
  let mut fixed: Fixed = fixed
    .iter()
    .map(|(&position, &letter)| (position, to_lowercase(letter)))
    .collect();
  let original_fixed_len = fixed.len();

  let mut counts = [0usize; 256];
  for &byte in &rack {
    counts[byte as usize] += 1;
  }

  let mut results = BTreeSet::new();
  let mut prefix = Vec::with_capacity(word_length);
  search(
    graph,
    graph.root_index(),
    &mut prefix,
    &mut counts,
    &mut fixed,
    word_length,
    original_fixed_len,
    blank,
    &mut results,
  );

  log::debug!("anagram search found {} matches for word_length={word_length}", results.len());
  results
}

#[allow(clippy::too_many_arguments)]
fn search(
  graph: &Graph,
  node_index: usize,
  prefix: &mut Vec<u8>,
  counts: &mut [usize; 256],
  fixed: &mut Fixed,
  word_length: usize,
  original_fixed_len: usize,
  blank: u8,
  results: &mut BTreeSet<String>,
) {
  let position = prefix.len();

  if let Some(&letter) = fixed.get(&position) {
    if let Some(&child) = graph.node(node_index).edges.get(&letter) {
      fixed.remove(&position);
      prefix.push(letter);
      search(
        graph,
        child,
        prefix,
        counts,
        fixed,
        word_length,
        original_fixed_len,
        blank,
        results,
      );
      prefix.pop();
      fixed.insert(position, letter);
    }
    return;
  }

  if position == word_length {
    if graph.node(node_index).is_final && fixed.is_empty() && position > original_fixed_len {
      results.insert(String::from_utf8(prefix.clone()).expect("alphabet is single-byte ASCII"));
    }
    return;
  }

  for (&letter, &child) in &graph.node(node_index).edges {
    if counts[letter as usize] > 0 {
      counts[letter as usize] -= 1;
      prefix.push(letter);
      search(
        graph,
        child,
        prefix,
        counts,
        fixed,
        word_length,
        original_fixed_len,
        blank,
        results,
      );
      prefix.pop();
      counts[letter as usize] += 1;
    } else if counts[blank as usize] > 0 {
      counts[blank as usize] -= 1;
      prefix.push(letter);
      search(
        graph,
        child,
        prefix,
        counts,
        fixed,
        word_length,
        original_fixed_len,
        blank,
        results,
      );
      prefix.pop();
      counts[blank as usize] += 1;
    }
  }
}
