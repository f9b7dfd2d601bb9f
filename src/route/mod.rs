/* src/route/mod.rs */

// Route tree assembly: segment classification, trie-backed tree
// construction, and conversion into the finalized shape handed to the
// serializer.

mod prepare;
mod segment;
mod tree;
mod types;


pub use prepare::prepare_routes;
pub use tree::build_route_tree;
pub use types::{JsonMap, Route, RouteDraft};
