/* src/route/types.rs */

use serde::Serialize;
use serde_json::Value;

pub type JsonMap = serde_json::Map<String, Value>;

// -- Builder record --

/// Mutable record used while the tree is assembled. Carries bookkeeping
/// (`raw_route`, `overlay`) that never reaches the finalized shape.
#[derive(Debug, Clone, Default)]
pub struct RouteDraft {
  /// Hyphen-joined chain of normalized segment names.
  pub name: String,
  /// Router pattern contributed by this node relative to its parent.
  pub path: String,
  /// Originating source entry, relative to the project root.
  pub component: String,
  /// Collapsed route string, used for prefix matching during the build.
  pub raw_route: String,
  /// Opaque per-page metadata merged onto the finalized node.
  pub overlay: Option<JsonMap>,
  pub children: Vec<RouteDraft>,
}

// -- Finalized record --

/// Immutable route node handed to the serializer.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
  /// Present only on leaf routes; grouping nodes are anonymous.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  pub path: String,
  pub component: String,
  pub props: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub children: Option<Vec<Route>>,
  /// Fields contributed by overlay metadata or the extension hook.
  #[serde(flatten)]
  pub extra: JsonMap,
}

impl Route {
  /// Merge a metadata payload onto the node. Known keys override the typed
  /// fields, everything else lands in `extra`; the payload wins on conflict.
  pub fn merge(&mut self, payload: JsonMap) {
    for (key, value) in payload {
      if key == "name" {
        match value {
          Value::String(s) => self.name = Some(s),
          Value::Null => self.name = None,
          other => {
            self.extra.insert(key, other);
          }
        }
      } else if key == "path" {
        match value {
          Value::String(s) => self.path = s,
          other => {
            self.extra.insert(key, other);
          }
        }
      } else if key == "component" {
        match value {
          Value::String(s) => self.component = s,
          other => {
            self.extra.insert(key, other);
          }
        }
      } else if key == "props" {
        match value {
          Value::Bool(b) => self.props = b,
          other => {
            self.extra.insert(key, other);
          }
        }
      } else {
        self.extra.insert(key, value);
      }
    }
  }
}
