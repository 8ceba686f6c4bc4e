//! Subcommand handlers and their text output.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use folio_state::{RootAttributeSink, ScrollSpy, Shell, ViewportHub, Visibility};

/// Parse one batch such as `about:1,projects:0.6`
///
/// A bare id (`about`) means fully visible.
pub fn parse_batch(raw: &str) -> Result<Vec<Visibility>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once(':') {
            Some((id, ratio)) => {
                let ratio: f32 = ratio
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid ratio in {part:?}"))?;
                if !(0.0..=1.0).contains(&ratio) {
                    bail!("ratio in {part:?} must be within 0..=1");
                }
                Ok(Visibility::new(id.trim(), ratio))
            }
            None => Ok(Visibility::new(part, 1.0)),
        })
        .collect()
}

/// Current state of every domain, one `key: value` per line
pub fn render_state(shell: &Shell, sink: &RootAttributeSink) -> String {
    let settings = shell.feedback().settings();
    let mut out = String::new();
    let _ = writeln!(out, "theme: {}", shell.preference().theme());
    let _ = writeln!(
        out,
        "data-theme: {}",
        sink.attribute().unwrap_or("(unset)")
    );
    let _ = writeln!(out, "collapsed: {}", shell.layout().collapsed());
    let _ = writeln!(out, "sound: {}", if settings.enabled { "on" } else { "off" });
    let _ = writeln!(out, "volume: {:.2}", settings.volume);
    out
}

/// Navigation rail, marking the highlighted link
pub fn render_nav(shell: &Shell, spy: Option<&ScrollSpy>) -> String {
    let mut out = String::new();
    for item in shell.nav_items(spy) {
        let marker = if item.active { '>' } else { ' ' };
        let label = if item.compact {
            item.name.chars().next().map(String::from).unwrap_or_default()
        } else {
            item.name.clone()
        };
        let _ = writeln!(out, "{marker} {label:<10} {}", item.href);
    }
    out
}

/// Feed each batch through a fresh scroll-spy and report the active section
/// after every batch
pub fn run_spy(shell: &Shell, batches: &[String]) -> Result<String> {
    let hub = ViewportHub::new();
    let spy = shell.mount_scroll_spy(&hub);
    let mut out = String::new();

    for raw in batches {
        let batch = parse_batch(raw)?;
        hub.report(&batch);
        let active = spy
            .active_section_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "(none)".to_string());
        let _ = writeln!(out, "{raw} -> {active}");
    }
    out.push_str(&render_nav(shell, Some(&spy)));

    spy.unmount();
    Ok(out)
}
