/* src/context.rs */

use std::collections::HashMap;

use crate::errors::PagegenError;
use crate::options::ResolvedOptions;
use crate::route::{JsonMap, Route, build_route_tree, prepare_routes};

/// One discovered page source, as reported by the crawler. The route string
/// is the slash-delimited logical route already computed from the path.
#[derive(Debug, Clone)]
pub struct PageEntry {
  pub source_path: String,
  pub route_string: String,
}

/// Collects discovered pages and drives a generation pass.
///
/// Entries are kept in discovery order and keyed uniquely by source path;
/// re-inserting a path updates the entry in place so the output stays stable
/// across watch-triggered regenerations.
pub struct PageContext {
  pub options: ResolvedOptions,
  pages: Vec<PageEntry>,
  overlays: HashMap<String, JsonMap>,
}

impl PageContext {
  pub fn new(options: ResolvedOptions) -> Self {
    Self { options, pages: Vec::new(), overlays: HashMap::new() }
  }

  /// Register a discovered page. Replaces an existing entry for the same
  /// source path without changing its discovery position.
  pub fn add_page(&mut self, entry: PageEntry) {
    match self.pages.iter_mut().find(|p| p.source_path == entry.source_path) {
      Some(existing) => *existing = entry,
      None => self.pages.push(entry),
    }
  }

  /// Drop a page and its overlay metadata.
  pub fn remove_page(&mut self, source_path: &str) {
    self.pages.retain(|p| p.source_path != source_path);
    self.overlays.remove(source_path);
  }

  /// Attach opaque metadata merged onto the page's finalized node.
  pub fn set_overlay(&mut self, source_path: impl Into<String>, overlay: JsonMap) {
    self.overlays.insert(source_path.into(), overlay);
  }

  pub fn pages(&self) -> &[PageEntry] {
    &self.pages
  }

  /// Build and post-process the forest, then await the tree transform hook.
  pub async fn resolve_routes(&self) -> Result<Vec<Route>, PagegenError> {
    let drafts = build_route_tree(&self.pages, &self.overlays, &self.options)?;
    let mut routes = prepare_routes(drafts, &self.options)?;

    if let Some(hook) = &self.options.on_routes_generated {
      if let Some(replaced) = hook(routes.clone()).await? {
        routes = replaced;
      }
    }
    Ok(routes)
  }

  /// Full generation pass: resolve the forest, hand it to the external
  /// serializer, then await the client text transform hook. The stages run
  /// strictly in sequence.
  pub async fn generate_client<F>(&self, serialize: F) -> Result<String, PagegenError>
  where
    F: Fn(&[Route]) -> Result<String, PagegenError>,
  {
    let routes = self.resolve_routes().await?;
    let mut client = serialize(&routes)?;

    if let Some(hook) = &self.options.on_client_generated {
      // An empty replacement keeps the previous text.
      match hook(client.clone()).await? {
        Some(replaced) if !replaced.is_empty() => client = replaced,
        _ => {}
      }
    }
    Ok(client)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::options::{ClientHookFn, DynamicStyle, RoutesHookFn};

  fn ctx(pages: &[(&str, &str)]) -> PageContext {
    let mut ctx = PageContext::new(ResolvedOptions::new(DynamicStyle::Bracket, "/proj"));
    for &(source, route) in pages {
      ctx.add_page(PageEntry {
        source_path: format!("/proj{source}"),
        route_string: route.to_string(),
      });
    }
    ctx
  }

  fn to_json(routes: &[Route]) -> Result<String, PagegenError> {
    serde_json::to_string(routes).map_err(|e| PagegenError::serialize(e.to_string()))
  }

  #[tokio::test]
  async fn generate_without_hooks() {
    let ctx = ctx(&[("/pages/about.vue", "about")]);
    let client = ctx.generate_client(to_json).await.unwrap();
    assert!(client.contains("\"path\":\"/about\""));
    assert!(client.contains("\"component\":\"/pages/about.vue\""));
  }

  #[tokio::test]
  async fn routes_hook_replaces_forest() {
    let mut ctx = ctx(&[("/pages/about.vue", "about")]);
    let hook: RoutesHookFn = Arc::new(|mut routes| {
      Box::pin(async move {
        for route in &mut routes {
          route.path = format!("/prefixed{}", route.path);
        }
        Ok(Some(routes))
      })
    });
    ctx.options.on_routes_generated = Some(hook);

    let client = ctx.generate_client(to_json).await.unwrap();
    assert!(client.contains("\"path\":\"/prefixed/about\""));
  }

  #[tokio::test]
  async fn routes_hook_none_keeps_forest() {
    let mut ctx = ctx(&[("/pages/about.vue", "about")]);
    let hook: RoutesHookFn = Arc::new(|_routes| Box::pin(async { Ok(None) }));
    ctx.options.on_routes_generated = Some(hook);

    let client = ctx.generate_client(to_json).await.unwrap();
    assert!(client.contains("\"path\":\"/about\""));
  }

  #[tokio::test]
  async fn client_hook_replaces_text() {
    let mut ctx = ctx(&[("/pages/about.vue", "about")]);
    let hook: ClientHookFn =
      Arc::new(|client| Box::pin(async move { Ok(Some(format!("// generated\n{client}"))) }));
    ctx.options.on_client_generated = Some(hook);

    let client = ctx.generate_client(to_json).await.unwrap();
    assert!(client.starts_with("// generated\n["));
  }

  #[tokio::test]
  async fn client_hook_empty_keeps_text() {
    let mut ctx = ctx(&[("/pages/about.vue", "about")]);
    let hook: ClientHookFn = Arc::new(|_client| Box::pin(async { Ok(Some(String::new())) }));
    ctx.options.on_client_generated = Some(hook);

    let client = ctx.generate_client(to_json).await.unwrap();
    assert!(client.contains("\"path\":\"/about\""));
  }

  #[tokio::test]
  async fn hook_error_propagates() {
    let mut ctx = ctx(&[("/pages/about.vue", "about")]);
    let hook: RoutesHookFn =
      Arc::new(|_routes| Box::pin(async { Err(PagegenError::hook("boom")) }));
    ctx.options.on_routes_generated = Some(hook);

    let err = ctx.generate_client(to_json).await.unwrap_err();
    assert_eq!(err.code(), "HOOK_FAILED");
  }

  #[tokio::test]
  async fn serializer_error_propagates() {
    let ctx = ctx(&[("/pages/about.vue", "about")]);
    let err = ctx
      .generate_client(|_routes| Err(PagegenError::serialize("refused")))
      .await
      .unwrap_err();
    assert_eq!(err.code(), "SERIALIZE_FAILED");
  }

  #[test]
  fn add_page_replaces_in_place() {
    let mut ctx = ctx(&[("/pages/a.vue", "a"), ("/pages/b.vue", "b")]);
    ctx.add_page(PageEntry {
      source_path: "/proj/pages/a.vue".to_string(),
      route_string: "renamed".to_string(),
    });

    let routes: Vec<&str> = ctx.pages().iter().map(|p| p.route_string.as_str()).collect();
    assert_eq!(routes, vec!["renamed", "b"]);
  }

  #[test]
  fn remove_page_drops_overlay() {
    let mut ctx = ctx(&[("/pages/a.vue", "a")]);
    let mut overlay = JsonMap::new();
    overlay.insert("meta".to_string(), serde_json::json!({"requiresAuth": true}));
    ctx.set_overlay("/proj/pages/a.vue", overlay);

    ctx.remove_page("/proj/pages/a.vue");
    assert!(ctx.pages().is_empty());
    assert!(ctx.overlays.is_empty());
  }
}
