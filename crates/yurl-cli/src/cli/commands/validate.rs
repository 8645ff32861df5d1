//! `yurl validate` – report the first invalid component of each URL.

use anyhow::{bail, Result};
use std::io::Write;
use yurl_core::UrlCache;

pub fn run_validate<W: Write>(cache: &mut UrlCache, urls: &[String], out: &mut W) -> Result<()> {
    let mut failed = 0usize;
    for input in urls {
        match cache.get_or_parse(input).validate() {
            Ok(_) => writeln!(out, "{input}: ok")?,
            Err(err) => {
                failed += 1;
                writeln!(out, "{input}: {}", err.kind())?;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} urls failed validation", urls.len());
    }
    Ok(())
}
