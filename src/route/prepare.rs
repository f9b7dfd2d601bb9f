/* src/route/prepare.rs */

use crate::errors::PagegenError;
use crate::options::ResolvedOptions;

use super::types::{JsonMap, Route, RouteDraft};

/// Convert the draft forest into the finalized shape handed to the
/// serializer: name suffix cleanup, parent-relative paths, anonymous
/// grouping nodes, overlay and extension-hook merges. The bookkeeping
/// fields of the draft are simply not carried over.
pub fn prepare_routes(
  drafts: Vec<RouteDraft>,
  options: &ResolvedOptions,
) -> Result<Vec<Route>, PagegenError> {
  prepare_level(drafts, options, None)
}

fn prepare_level(
  drafts: Vec<RouteDraft>,
  options: &ResolvedOptions,
  parent: Option<&Route>,
) -> Result<Vec<Route>, PagegenError> {
  let mut routes = Vec::with_capacity(drafts.len());
  for draft in drafts {
    routes.push(prepare_one(draft, options, parent)?);
  }
  Ok(routes)
}

fn prepare_one(
  draft: RouteDraft,
  options: &ResolvedOptions,
  parent: Option<&Route>,
) -> Result<Route, PagegenError> {
  // A trailing `-index` never reaches the finalized name.
  let name = draft.name.strip_suffix("-index").unwrap_or(&draft.name).to_string();

  // Child paths are router-relative to their parent.
  let mut path = draft.path;
  if parent.is_some() {
    if let Some(stripped) = path.strip_prefix('/') {
      path = stripped.to_string();
    }
  }

  let has_children = !draft.children.is_empty();
  let mut route = Route {
    // Grouping nodes are anonymous; only leaf routes carry names.
    name: (!has_children).then_some(name),
    path,
    component: draft.component,
    props: true,
    children: None,
    extra: JsonMap::new(),
  };

  if has_children {
    // Children see their parent before its overlay and hook merges.
    let children = prepare_level(draft.children, options, Some(&route))?;
    route.children = Some(children);
  }

  if let Some(overlay) = draft.overlay {
    route.merge(overlay);
  }

  if let Some(hook) = &options.extend_route {
    if let Some(payload) = hook(&route, parent)? {
      route.merge(payload);
    }
  }

  Ok(route)
}
