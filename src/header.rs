use serde::Serialize;
use std::path::Path;
use tinytemplate::{TinyTemplate, format_unescaped};

pub const TOOL: &str = "goat";
pub const URL: &str = "https://www.github.com/fluhus/goat";

/// Provenance comment prepended to generated files. `{from}` expands to
/// `from '<template path>' ` when the template came from a file.
pub const DEFAULT_TEMPLATE: &str = "// ***** DO NOT EDIT THIS FILE MANUALLY. *****
//
// This file was auto-generated {from}using {tool}.
//
// {tool}: {url}

";

#[derive(Serialize)]
struct HeaderContext<'a> {
    from: String,
    tool: &'a str,
    url: &'a str,
}

pub fn render_header(
    template: &str,
    source: Option<&Path>,
) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("header", template)?;
    let ctx = HeaderContext {
        from: source
            .map(|p| format!("from '{}' ", p.display()))
            .unwrap_or_default(),
        tool: TOOL,
        url: URL,
    };
    tt.render("header", &ctx)
}

pub fn prepend(header: &str, body: String) -> String {
    let mut out = String::with_capacity(header.len() + body.len());
    out.push_str(header);
    out.push_str(&body);
    out
}
