//! The formatting engine behind a [`Logger`](crate::Logger).
//!
//! One `tracing_subscriber::fmt` layer on a private registry. The layer
//! owns rendering, timestamps, and the minimum level; the logger only emits
//! events and flushes.

use std::sync::Arc;

use tracing::Dispatch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::encoding::Encoding;
use crate::level::Level;
use crate::sink::{Sink, SinkWriter};
use crate::time::TimeEncoder;

/// Build the dispatch that renders records to `sink`.
pub(crate) fn build(
    encoding: Encoding,
    time_encoder: &TimeEncoder,
    level: Level,
    sink: Arc<Sink>,
) -> Dispatch {
    let filter = EnvFilter::new(level.as_tracing().as_str().to_ascii_lowercase());
    let writer = SinkWriter::new(sink);
    let timer = time_encoder.timer();

    let fmt_layer = match encoding {
        Encoding::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_timer(timer)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
        Encoding::Console => tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_timer(timer)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
    };

    Dispatch::new(tracing_subscriber::registry().with(fmt_layer))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
