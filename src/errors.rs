/* src/errors.rs */

use std::fmt;

/// Error surfaced by the generation pipeline. Carries a stable
/// machine-readable code alongside the human-facing message.
#[derive(Debug)]
pub struct PagegenError {
  code: String,
  message: String,
}

impl PagegenError {
  pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
    Self { code: code.into(), message: message.into() }
  }

  /// A page entry whose route string cannot form a tree node.
  pub fn invalid_route(msg: impl Into<String>) -> Self {
    Self::new("INVALID_ROUTE", msg)
  }

  /// A user-supplied hook failed; the pass is aborted, no partial output.
  pub fn hook(msg: impl Into<String>) -> Self {
    Self::new("HOOK_FAILED", msg)
  }

  /// The external serializer rejected the finalized forest.
  pub fn serialize(msg: impl Into<String>) -> Self {
    Self::new("SERIALIZE_FAILED", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for PagegenError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for PagegenError {}
