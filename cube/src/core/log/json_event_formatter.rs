// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Formats each [`tracing`] event as one line of JSON:
//!
//! ```text
//! {"timestamp":"2025-01-31T10:00:00.000+00:00","level":"DEBUG","name":"rgb_cube::cube::net",
//!  "msg":"edge lookup","event":{"edge":"Left","found_in":"bgr"},"context":{"command":"net"}}
//! ```
//!
//! - `name` is the event's target (module path unless overridden).
//! - `msg` is the `message` field, all other fields go into `event`.
//! - `context` holds static key/values from [`crate::TracingConfig::context`], and is
//!   omitted when empty.

use chrono::{Local, SecondsFormat};
use ordermap::OrderMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{Event, Subscriber,
              field::{Field, Visit}};
use tracing_subscriber::{fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
                         registry::LookupSpan};

#[derive(Debug, Clone, Default)]
pub struct JsonEventFormatter {
    pub context: OrderMap<String, String>,
}

impl JsonEventFormatter {
    #[must_use]
    pub fn new(context: OrderMap<String, String>) -> Self { Self { context } }
}

#[derive(Debug, Serialize)]
struct JsonLogLine<'a> {
    timestamp: String,
    level: &'a str,
    name: &'a str,
    msg: String,
    event: OrderMap<&'static str, Value>,
    #[serde(skip_serializing_if = "is_empty_context")]
    context: &'a OrderMap<String, String>,
}

fn is_empty_context(context: &&OrderMap<String, String>) -> bool { context.is_empty() }

impl<S, N> FormatEvent<S, N> for JsonEventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut f: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let mut msg = String::new();
        let mut fields = OrderMap::new();
        event.record(&mut VisitEventAndPopulateJsonFields {
            msg: &mut msg,
            fields: &mut fields,
        });

        let line = JsonLogLine {
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Millis, false),
            level: metadata.level().as_str(),
            name: metadata.target(),
            msg,
            event: fields,
            context: &self.context,
        };

        let json = serde_json::to_string(&line).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

/// Collects the `message` field into `msg`, and every other field into `fields`,
/// keeping numbers and booleans typed.
#[derive(Debug)]
pub struct VisitEventAndPopulateJsonFields<'a> {
    pub msg: &'a mut String,
    pub fields: &'a mut OrderMap<&'static str, Value>,
}

impl VisitEventAndPopulateJsonFields<'_> {
    fn insert(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            *self.msg = match value {
                Value::String(it) => it,
                other => other.to_string(),
            };
        } else {
            self.fields.insert(field.name(), value);
        }
    }
}

impl Visit for VisitEventAndPopulateJsonFields<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, Value::String(format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::String(value.to_string()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) { self.insert(field, value.into()); }

    fn record_u64(&mut self, field: &Field, value: u64) { self.insert(field, value.into()); }

    fn record_f64(&mut self, field: &Field, value: f64) { self.insert(field, value.into()); }

    fn record_bool(&mut self, field: &Field, value: bool) { self.insert(field, value.into()); }
}
