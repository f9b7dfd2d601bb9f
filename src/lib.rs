/* src/lib.rs */

pub mod context;
pub mod errors;
pub mod options;
pub mod route;

// Re-exports for ergonomic use
pub use context::{PageContext, PageEntry};
pub use errors::PagegenError;
pub use options::{
  BoxFuture, ClientHookFn, DynamicStyle, ExtendRouteFn, ResolvedOptions, RoutesHookFn,
};
pub use route::{JsonMap, Route, RouteDraft, build_route_tree, prepare_routes};
