//! Sink that forwards records to the `tracing` ecosystem
//!
//! Each record becomes one `tracing` event at the matching level. The
//! message is the event message and every other field is rendered as
//! logfmt into a single `fields` field, since `tracing` field names must
//! be known at compile time.
//!
//! Subscribers stamp events with their own time, so this sink asks for
//! no `timestamp` enrichment.

use crate::core::{
    standard_enrichment, ContextField, ContextValue, Format, Level, Options, Record, Result,
    Sink,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }

    fn render_fields(record: &Record) -> String {
        let mut rest = Record::with_capacity(record.len());
        rest.extend(
            record
                .fields()
                .iter()
                .filter(|(key, _)| key != "message" && key != "level")
                .cloned(),
        );
        // Console encoding is infallible
        Format::Console.encode(&rest).unwrap_or_default()
    }
}

impl Sink for TracingSink {
    fn log(&self, level: Level, record: &Record) -> Result<()> {
        let message = record.message().unwrap_or_default();
        let fields = Self::render_fields(record);

        match level {
            Level::Error => tracing::error!(fields = %fields, "{}", message),
            Level::Warn => tracing::warn!(fields = %fields, "{}", message),
            Level::Info => tracing::info!(fields = %fields, "{}", message),
            Level::Debug => tracing::debug!(fields = %fields, "{}", message),
            Level::None => {}
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }

    fn enrichment(&self, opts: &Options) -> Vec<ContextField> {
        standard_enrichment(opts)
            .into_iter()
            .filter(|field| !matches!(field.value, ContextValue::Timestamp(_)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kv, Logger};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tracing::field::{Field, Visit};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug, Clone, PartialEq)]
    struct Captured {
        level: tracing::Level,
        message: String,
        fields: String,
    }

    #[derive(Default)]
    struct CaptureVisitor {
        message: String,
        fields: String,
    }

    impl Visit for CaptureVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            match field.name() {
                "message" => self.message = format!("{value:?}"),
                "fields" => self.fields = format!("{value:?}"),
                _ => {}
            }
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = CaptureVisitor::default();
            event.record(&mut visitor);
            self.events.lock().push(Captured {
                level: *event.metadata().level(),
                message: visitor.message,
                fields: visitor.fields,
            });
        }
    }

    #[test]
    fn test_enrichment_skips_timestamp() {
        let mut opts = Options::default();
        opts.name = "svc".into();
        let keys: Vec<_> = TracingSink.enrichment(&opts).into_iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["caller", "logger"]);
    }

    #[test]
    fn test_events_reach_subscriber() {
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            let logger = Logger::tracing(Options {
                name: "svc".into(),
                level: "info".into(),
                ..Options::default()
            });
            logger.warn("slow query", kv!["ms" => 1200]);
            logger.debug("filtered", kv![]);
            logger.errorf(format_args!("failed: {}", "disk full"));
        });

        let events = events.lock().clone();
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].level, tracing::Level::WARN);
        assert_eq!(events[0].message, "slow query");
        assert!(events[0].fields.contains("logger=svc"));
        assert!(events[0].fields.contains("ms=1200"));
        assert!(!events[0].fields.contains("timestamp="));

        assert_eq!(events[1].level, tracing::Level::ERROR);
        assert_eq!(events[1].message, "failed: disk full");
    }
}
