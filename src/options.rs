/* src/options.rs */

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::PagegenError;
use crate::route::{JsonMap, Route};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Dynamic-segment syntax accepted in route strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicStyle {
  /// `[id]` parameters, `[...all]` catch-all.
  Bracket,
  /// `_id` parameters, `_` / `_all` catch-all marker.
  Underscore,
}

/// Per-route extension hook, invoked with the node being finalized and its
/// already-finalized parent. A returned map is merged onto the node and wins
/// on conflict.
pub type ExtendRouteFn =
  Arc<dyn Fn(&Route, Option<&Route>) -> Result<Option<JsonMap>, PagegenError> + Send + Sync>;

/// Whole-forest transform hook, awaited after post-processing. Receives a
/// copy of the forest; return `None` to keep it unchanged.
pub type RoutesHookFn =
  Arc<dyn Fn(Vec<Route>) -> BoxFuture<Result<Option<Vec<Route>>, PagegenError>> + Send + Sync>;

/// Client text transform hook, awaited after serialization. Receives a copy
/// of the text; `None` or an empty replacement keeps the previous value.
pub type ClientHookFn =
  Arc<dyn Fn(String) -> BoxFuture<Result<Option<String>, PagegenError>> + Send + Sync>;

/// Configuration for one generation pass.
#[derive(Clone)]
pub struct ResolvedOptions {
  pub dynamic_style: DynamicStyle,
  /// Prefix stripped from source paths to form component references.
  pub project_root: String,
  pub extend_route: Option<ExtendRouteFn>,
  pub on_routes_generated: Option<RoutesHookFn>,
  pub on_client_generated: Option<ClientHookFn>,
}

impl ResolvedOptions {
  pub fn new(dynamic_style: DynamicStyle, project_root: impl Into<String>) -> Self {
    Self {
      dynamic_style,
      project_root: project_root.into(),
      extend_route: None,
      on_routes_generated: None,
      on_client_generated: None,
    }
  }
}
