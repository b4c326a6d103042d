//! Output formatting for command results.
//!
//! Route summaries are rendered by the library; this module picks the
//! renderer for the requested [`OutputFormat`] and handles the simple list
//! outputs of the browsing commands.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use skyroute_lib::{RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Write a route summary.
    pub fn write_route<W: Write>(self, out: &mut W, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                out.write_all(summary.render(RouteRenderMode::PlainText).as_bytes())
            }
            OutputFormat::Rich => out.write_all(summary.render(RouteRenderMode::RichText).as_bytes()),
            OutputFormat::Json => write_json(out, summary),
        }
    }

    /// Write a titled list of names.
    ///
    /// JSON output is the bare array so it can be piped into other tools.
    pub fn write_list<W: Write>(self, out: &mut W, heading: &str, items: &[String]) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                writeln!(out, "{} ({}):", heading, items.len())?;
                for item in items {
                    writeln!(out, "  {item}")?;
                }
                Ok(())
            }
            OutputFormat::Rich => {
                writeln!(out, "**{heading}**")?;
                for item in items {
                    writeln!(out, "* {item}")?;
                }
                Ok(())
            }
            OutputFormat::Json => write_json(out, items),
        }
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
