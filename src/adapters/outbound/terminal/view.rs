//! Colored console implementation of the presentation port.
//!
//! Entity renderings are displayed verbatim; only the framing around them is
//! decorated.

use crate::adapters::outbound::terminal::colors;
use crate::ports::outbound::view::SessionView;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub struct TerminalView;

impl SessionView for TerminalView {
    fn section(&self, title: &str) {
        let formatted = format!("⟦ {} ⟧", title.to_uppercase());
        let width = UnicodeWidthStr::width(formatted.as_str());

        let dash_count = TOTAL_WIDTH.saturating_sub(width);
        let left = dash_count / 2;
        let right = dash_count - left;

        println!(
            "{}{}{}",
            "─".repeat(left).color(colors::SEPARATOR),
            formatted.color(colors::PRIMARY),
            "─".repeat(right).color(colors::SEPARATOR)
        );
    }

    fn block(&self, text: &str) {
        for line in text.lines() {
            println!("{}", line.color(colors::TEXT_DEFAULT));
        }
    }

    fn status(&self, msg: &str) {
        println!(
            "{} {}",
            ">".color(colors::SEPARATOR),
            msg.color(colors::TEXT_DEFAULT)
        );
    }

    fn error(&self, err: anyhow::Error) {
        eprintln!("{} {:#}", "[-]".red().bold(), err);
    }
}
