/* src/route/segment.rs */

use crate::options::DynamicStyle;

/// Count of `/` separators in a raw route string.
pub(crate) fn count_slash(route: &str) -> usize {
  route.matches('/').count()
}

/// Whether a segment is a route parameter rather than a literal component.
pub(crate) fn is_dynamic(segment: &str, style: DynamicStyle) -> bool {
  match style {
    DynamicStyle::Bracket => {
      segment.len() > 2 && segment.starts_with('[') && segment.ends_with(']')
    }
    DynamicStyle::Underscore => segment.starts_with('_'),
  }
}

/// Whether a dynamic segment matches trailing path components too.
pub(crate) fn is_catch_all(segment: &str, style: DynamicStyle) -> bool {
  match style {
    DynamicStyle::Bracket => segment.starts_with("[..."),
    DynamicStyle::Underscore => segment == "_" || segment == "_all",
  }
}

/// Normalized segment name with dynamic markers stripped. The underscore
/// catch-all marker normalizes to the literal name `all`.
pub(crate) fn normalize(segment: &str, style: DynamicStyle) -> String {
  if !is_dynamic(segment, style) {
    return segment.to_string();
  }
  match style {
    DynamicStyle::Bracket => {
      let inner = segment.strip_prefix("[...").or_else(|| segment.strip_prefix('['));
      let inner = inner.unwrap_or(segment);
      inner.strip_suffix(']').unwrap_or(inner).to_string()
    }
    DynamicStyle::Underscore => {
      if is_catch_all(segment, style) {
        "all".to_string()
      } else {
        segment.strip_prefix('_').unwrap_or(segment).to_string()
      }
    }
  }
}
