//! `yurl parse` – print the components of each URL.

use anyhow::{Context, Result};
use std::io::Write;
use yurl_core::{Url, UrlCache};

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub json: bool,
    pub validate: bool,
}

pub fn run_parse<W: Write>(
    cache: &mut UrlCache,
    urls: &[String],
    opts: ParseOptions,
    out: &mut W,
) -> Result<()> {
    for (i, input) in urls.iter().enumerate() {
        let url = cache.get_or_parse(input);
        if opts.validate {
            url.validate()
                .with_context(|| format!("invalid url {input:?}"))?;
        }

        if opts.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&url)?)?;
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            write_components(&url, out)?;
        }
    }
    Ok(())
}

fn write_components<W: Write>(url: &Url, out: &mut W) -> Result<()> {
    let rows = [
        ("scheme", url.scheme().to_string()),
        ("userinfo", url.userinfo().to_string()),
        ("host", url.host().to_string()),
        ("port", url.port().to_string()),
        ("path", url.path().to_string()),
        ("query", url.query().to_string()),
        ("fragment", url.fragment().to_string()),
        ("authority", url.authority()),
        ("full_path", url.full_path()),
    ];
    for (name, value) in rows {
        writeln!(out, "{:<10} {}", format!("{name}:"), value)?;
    }
    Ok(())
}
