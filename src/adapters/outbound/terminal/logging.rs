//! Diagnostic log rendering for the terminal.
//!
//! Events print as a right-aligned lowercase level tag in the shop palette,
//! a separator dot, and the event fields. Presentation of shop output goes
//! through the view; this is diagnostics only.

use crate::adapters::outbound::terminal::colors;
use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct ShopFormatter;

impl<S, N> FormatEvent<S, N> for ShopFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();

        // Pad before coloring so escape codes do not skew the alignment.
        let label = format!("{:>5}", level.to_string().to_lowercase());
        let tag: ColoredString = match level {
            Level::TRACE => label.dimmed(),
            Level::DEBUG => label.color(colors::SEPARATOR),
            Level::INFO => label.color(colors::PRIMARY),
            Level::WARN => label.yellow().bold(),
            Level::ERROR => label.red().bold(),
        };

        write!(writer, "{} {} ", tag, "·".color(colors::SEPARATOR))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ShopFormatter)
        .init();
}
