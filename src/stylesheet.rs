//! Cache-bust removal for font URLs in a stylesheet.
//!
//! Font build pipelines append a `?t=<timestamp>` query string to font
//! URLs for cache busting. Served as static addon assets the query string
//! only defeats caching, so it is stripped in place.

use anyhow::Context;
use regex::Regex;
use std::path::Path;

use crate::shared::{fsio, Result};

/// Matches a `?t=<digits>` query string directly after a font file
/// extension. The fragment (`#iefix`) and anything after the URL are left
/// untouched.
const FONT_CACHE_BUST: &str = r"(\.(?:eot|svg|ttf|woff2?))\?t=\d+";

/// Strip every cache-busting query string from the content, treating it as
/// a single unit (matches may sit anywhere, including across line
/// boundaries of the original file). Returns the transformed content and
/// the number of replacements.
///
/// A second pass over the output finds no further matches: once the query
/// string is gone the pattern cannot match again.
pub fn strip_cache_bust(content: &str) -> Result<(String, usize)> {
    let re = Regex::new(FONT_CACHE_BUST).context("Invalid font cache-bust pattern")?;
    let count = re.find_iter(content).count();
    let rewritten = re.replace_all(content, "$1").into_owned();
    Ok((rewritten, count))
}

/// Rewrite the stylesheet at `path` in place, truncating residual content.
///
/// The file is fully read and transformed before the write begins; the
/// file is rewritten even when nothing matched, keeping the single
/// open-modify-close cycle uniform. Returns the number of replacements.
pub fn rewrite_stylesheet(path: &Path) -> Result<usize> {
    let content = fsio::read_file_checked(path)?;
    let (rewritten, count) = strip_cache_bust(&content)?;
    fsio::write_file_checked(path, &rewritten)?;
    Ok(count)
}
