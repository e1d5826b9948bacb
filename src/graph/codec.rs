/*!
Binary codec for the indexed graph.

```text
u32 node_count
for each node in index order:
  u8  final            (0 or 1)
  u32 id               (the node's own index, redundant, validated on decode)
  u8  edge_count
  edge_count * (u8 letter, u32 child_index)
```

All integers little-endian. Edge counts are bounded by 256 since one byte
holds them; a graph with a node carrying 256+ distinct outgoing letters
can't be represented by this format (not a concern for a single-byte
alphabet with at most 256 possible letters anyway).
*/

use std::collections::BTreeMap;

use crate::byte_buffer::{ByteReader, ByteWriter};
use crate::error::{DawgError, Result};
use crate::graph::node::Node;
use crate::graph::Graph;

pub fn encode(graph: &Graph) -> Vec<u8> {
  let nodes = graph.nodes();
  log::debug!("encoding graph with {} nodes", nodes.len());
  let mut w = ByteWriter::new();
  w.write_u32(nodes.len() as u32);

  for (index, node) in nodes.iter().enumerate() {
    w.write_u8(u8::from(node.is_final));
    w.write_u32(index as u32);
    w.write_u8(node.edges.len() as u8);
    for (&letter, &child) in &node.edges {
      w.write_u8(letter);
      w.write_u32(child as u32);
    }
  }

  let bytes = w.into_bytes();
  log::trace!("encoded graph into {} bytes", bytes.len());
  bytes
}

pub fn decode(bytes: &[u8]) -> Result<Graph> {
  log::debug!("decoding graph from {} bytes", bytes.len());
  let mut r = ByteReader::new(bytes);
  let node_count = r.read_u32()? as usize;
  let mut nodes = Vec::with_capacity(node_count);

  for position in 0..node_count {
    let is_final = r.read_u8()? != 0;
    let id = r.read_u32()? as usize;
    if id != position {
      return Err(DawgError::Decode(format!(
        "node at position {position} has id {id}, expected {position}"
      )));
    }

    let edge_count = r.read_u8()? as usize;
    let mut edges = BTreeMap::new();
    for _ in 0..edge_count {
      let letter = r.read_u8()?;
      let child = r.read_u32()? as usize;
      if child >= node_count {
        return Err(DawgError::Decode(format!(
          "node {position} has an edge to out-of-range child {child} (node_count = {node_count})"
        )));
      }
      edges.insert(letter, child);
    }

    nodes.push(Node::new(is_final, edges));
  }

  if r.remaining() != 0 {
    return Err(DawgError::Decode(format!(
      "{} trailing bytes after decoding {node_count} nodes",
      r.remaining()
    )));
  }

  log::debug!("decoded graph with {node_count} nodes");
  Ok(Graph::from_nodes(nodes))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::builder::Builder;

  fn build(words: &[&str]) -> Graph {
    let mut b = Builder::new();
    for w in words {
      b.insert(w.as_bytes()).unwrap();
    }
    b.finalize()
  }

  #[test]
  fn round_trip_preserves_node_count_and_lookups() {
    let graph = build(&["car", "cars", "cart", "cat", "cats"]);
    let bytes = encode(&graph);
    let decoded = decode(&bytes).unwrap();

    assert_eq!(decoded.nodes().len(), graph.nodes().len());
    assert!(decoded.lookup("cats"));
    assert!(decoded.lookup("cart"));
    assert!(!decoded.lookup("carp"));
  }

  #[test]
  fn decode_rejects_truncated_buffer() {
    let graph = build(&["cat"]);
    let mut bytes = encode(&graph);
    bytes.truncate(bytes.len() - 1);
    assert!(decode(&bytes).is_err());
  }

  #[test]
  fn decode_rejects_out_of_range_child_index() {
    let mut w = ByteWriter::new();
    w.write_u32(1); // node_count
    w.write_u8(1); // final
    w.write_u32(0); // id
    w.write_u8(1); // edge_count
    w.write_u8(b'a');
    w.write_u32(5); // child index out of range
    assert!(decode(&w.into_bytes()).is_err());
  }

  #[test]
  fn decode_rejects_id_position_mismatch() {
    let mut w = ByteWriter::new();
    w.write_u32(1);
    w.write_u8(0);
    w.write_u32(7); // wrong id
    w.write_u8(0);
    assert!(decode(&w.into_bytes()).is_err());
  }
}
