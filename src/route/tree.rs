/* src/route/tree.rs */

use std::collections::HashMap;

use crate::context::PageEntry;
use crate::errors::PagegenError;
use crate::options::ResolvedOptions;

use super::segment::{count_slash, is_catch_all, is_dynamic, normalize};
use super::types::{JsonMap, RouteDraft};

/// Arena-backed prefix trie. Nodes are materialized only for real entries;
/// `by_prefix` maps a collapsed route prefix to its node so parent lookup is
/// O(depth) instead of a scan over siblings.
struct Forest {
  nodes: Vec<RouteDraft>,
  child_ids: Vec<Vec<usize>>,
  roots: Vec<usize>,
  by_prefix: HashMap<String, usize>,
}

impl Forest {
  fn new() -> Self {
    Self { nodes: Vec::new(), child_ids: Vec::new(), roots: Vec::new(), by_prefix: HashMap::new() }
  }

  fn push(&mut self, draft: RouteDraft, parent: Option<usize>) -> usize {
    let id = self.nodes.len();
    self.nodes.push(draft);
    self.child_ids.push(Vec::new());
    match parent {
      Some(p) => self.child_ids[p].push(id),
      None => self.roots.push(id),
    }
    id
  }

  /// Move the arena nodes into the nested draft shape. Children always have
  /// a higher id than their parent, so walking ids in reverse attaches every
  /// subtree before its parent is itself moved.
  fn into_drafts(mut self) -> Vec<RouteDraft> {
    for id in (0..self.nodes.len()).rev() {
      for child in std::mem::take(&mut self.child_ids[id]) {
        let node = std::mem::take(&mut self.nodes[child]);
        self.nodes[id].children.push(node);
      }
    }
    self.roots.iter().map(|&id| std::mem::take(&mut self.nodes[id])).collect()
  }
}

/// Build the draft forest from discovered page entries.
///
/// Entries are processed shallowest-first (stable on ties) so a parent node
/// always exists before any entry that nests beneath it, regardless of
/// discovery order.
pub fn build_route_tree(
  entries: &[PageEntry],
  overlays: &HashMap<String, JsonMap>,
  options: &ResolvedOptions,
) -> Result<Vec<RouteDraft>, PagegenError> {
  let style = options.dynamic_style;

  let mut sorted: Vec<&PageEntry> = entries.iter().collect();
  sorted.sort_by_key(|e| count_slash(&e.route_string));

  let mut forest = Forest::new();

  for entry in sorted {
    // Doubled separators yield empty segments; collapse them. A route made
    // only of separators (or nothing at all) cannot form a node.
    let segments: Vec<&str> = entry.route_string.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
      return Err(PagegenError::invalid_route(format!(
        "page \"{}\" has an empty route string",
        entry.source_path
      )));
    }

    let mut name = String::new();
    let mut path = String::new();
    let mut prefix = String::new();
    let mut parent: Option<usize> = None;

    for (i, &seg) in segments.iter().enumerate() {
      let dynamic = is_dynamic(seg, style);
      let normalized = normalize(seg, style);
      let normalized_path = normalized.to_lowercase();

      if !name.is_empty() {
        name.push('-');
      }
      name.push_str(&normalized);

      if i > 0 {
        prefix.push('/');
      }
      prefix.push_str(seg);

      if let Some(&id) = forest.by_prefix.get(prefix.as_str()) {
        // Nested under an existing node: descend and restart the path.
        parent = Some(id);
        path.clear();
      } else if normalized_path == "index" {
        // Index segments contribute no named path token.
        if path.is_empty() {
          path.push('/');
        }
      } else if dynamic {
        path.push_str("/:");
        path.push_str(&normalized);
        if is_catch_all(seg, style) {
          // A top-level catch-all also absorbs deeper unmatched segments; a
          // nested one only matches at its own level.
          path.push_str(if i == 0 { "(.*)*" } else { "(.*)" });
        }
      } else {
        path.push('/');
        path.push_str(&normalized_path);
      }
    }

    let draft = RouteDraft {
      name,
      path,
      component: component_path(&entry.source_path, &options.project_root),
      raw_route: prefix.clone(),
      overlay: overlays.get(&entry.source_path).cloned(),
      children: Vec::new(),
    };
    let id = forest.push(draft, parent);

    // First insertion wins; a later duplicate nests under the original.
    forest.by_prefix.entry(prefix).or_insert(id);

    // An index leaf also answers for its directory, so `a/index` can parent
    // a later `a/b`.
    let last = segments[segments.len() - 1];
    if segments.len() > 1 && normalize(last, style).to_lowercase() == "index" {
      forest.by_prefix.entry(segments[..segments.len() - 1].join("/")).or_insert(id);
    }
  }

  Ok(forest.into_drafts())
}

/// Component reference relative to the project root, with a leading slash.
fn component_path(source_path: &str, project_root: &str) -> String {
  let rel = source_path.strip_prefix(project_root).unwrap_or(source_path);
  if rel.starts_with('/') { rel.to_string() } else { format!("/{rel}") }
}
