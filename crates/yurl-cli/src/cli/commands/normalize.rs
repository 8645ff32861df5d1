//! `yurl normalize` – print the canonical form of each URL.

use anyhow::Result;
use std::io::Write;
use yurl_core::{remove_dot_segments, Replace, UrlCache};

pub fn run_normalize<W: Write>(
    cache: &mut UrlCache,
    urls: &[String],
    remove_dots: bool,
    out: &mut W,
) -> Result<()> {
    for input in urls {
        let mut url = cache.get_or_parse(input);
        if remove_dots {
            url = url.replace(Replace::new().path(remove_dot_segments(url.path())))?;
        }
        writeln!(out, "{url}")?;
    }
    Ok(())
}
