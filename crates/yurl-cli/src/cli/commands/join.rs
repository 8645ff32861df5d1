//! `yurl join` – resolve references against a base URL.

use anyhow::Result;
use std::io::Write;
use yurl_core::UrlCache;

pub fn run_join<W: Write>(
    cache: &mut UrlCache,
    base: &str,
    references: &[String],
    out: &mut W,
) -> Result<()> {
    let base = cache.get_or_parse(base);
    for reference in references {
        let resolved = &base + &cache.get_or_parse(reference);
        tracing::debug!(%base, reference = %reference, %resolved, "resolved reference");
        writeln!(out, "{resolved}")?;
    }
    Ok(())
}
