//! Callsites for key-value events.
//!
//! A `tracing` callsite fixes its field names at compile time, but a
//! key-value call picks its keys at runtime. Each distinct shape (level,
//! source location, field names) gets one leaked callsite, registered with
//! `tracing` like a macro-generated one and reused by every later call with
//! the same shape. The number of shapes is bounded by the call sites in the
//! program and the key lists they use.
//!
//! Events carry `message` first, then `severity` for the levels `tracing`
//! has no name for, then the caller's fields in order. A caller key that
//! collides with a name the formatter writes itself is prefixed with
//! [`RENAMED_PREFIX`], so the record's own level, timestamp, message, and
//! location always win.

use std::collections::HashMap;
use std::panic::Location;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::{Dispatch, Event, Metadata};
use tracing_core::callsite::{self, Callsite};
use tracing_core::field::{self, FieldSet};
use tracing_core::metadata::Kind;
use tracing_core::subscriber::Interest;

use crate::level::Level;

/// Target of every event the facade emits.
pub(crate) const TARGET: &str = "oncelog";

/// Field naming the facade level of dpanic, panic, and fatal records.
pub const SEVERITY_FIELD: &str = "severity";

/// Prefix given to caller keys that collide with record keys.
pub const RENAMED_PREFIX: &str = "fields.";

const MESSAGE_FIELD: &str = "message";

/// Keys the formatter writes for every record.
const RECORD_KEYS: &[&str] = &[
    MESSAGE_FIELD,
    SEVERITY_FIELD,
    "timestamp",
    "level",
    "filename",
    "line_number",
];

static CALLSITES: Lazy<Mutex<HashMap<Shape, &'static Metadata<'static>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[derive(PartialEq, Eq, Hash)]
struct Shape {
    level: tracing::Level,
    file: &'static str,
    line: u32,
    names: Vec<String>,
}

struct KeyedCallsite {
    metadata: OnceCell<Metadata<'static>>,
}

impl Callsite for KeyedCallsite {
    fn set_interest(&self, _interest: Interest) {}

    fn metadata(&self) -> &Metadata<'_> {
        match self.metadata.get() {
            Some(metadata) => metadata,
            None => unreachable!("metadata is set before the callsite is registered"),
        }
    }
}

/// A field value in one of the shapes `tracing` records natively.
enum FieldValue<'a> {
    Str(&'a str),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Json(field::DisplayValue<&'a Value>),
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::Str(s),
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::I64)
                .or_else(|| n.as_u64().map(Self::U64))
                .or_else(|| n.as_f64().map(Self::F64))
                .unwrap_or_else(|| Self::Json(field::display(value))),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Json(field::display(value)),
        }
    }
}

impl FieldValue<'_> {
    fn as_value(&self) -> &dyn field::Value {
        match self {
            Self::Str(s) => s,
            Self::I64(n) => n,
            Self::U64(n) => n,
            Self::F64(n) => n,
            Self::Bool(b) => b,
            Self::Json(v) => v,
        }
    }
}

/// Emit one facade event on `dispatch`.
pub(crate) fn emit(
    dispatch: &Dispatch,
    level: Level,
    caller: &'static Location<'static>,
    message: &str,
    fields: &Map<String, Value>,
) {
    let severity = level.is_terminal().then_some(level.as_str());

    let mut names = Vec::with_capacity(fields.len() + 2);
    names.push(MESSAGE_FIELD.to_string());
    if severity.is_some() {
        names.push(SEVERITY_FIELD.to_string());
    }
    names.extend(fields.keys().map(String::as_str).map(field_name));

    let metadata = metadata_for(Shape {
        level: level.as_tracing(),
        file: caller.file(),
        line: caller.line(),
        names,
    });
    if !dispatch.enabled(metadata) {
        return;
    }

    let values: Vec<FieldValue<'_>> = fields.values().map(FieldValue::from).collect();
    let mut slots: Vec<Option<&dyn field::Value>> = Vec::with_capacity(values.len() + 2);
    slots.push(Some(&message as &dyn field::Value));
    if let Some(severity) = &severity {
        slots.push(Some(severity as &dyn field::Value));
    }
    slots.extend(values.iter().map(|value| Some(value.as_value())));

    let value_set = metadata.fields().value_set_all(&slots);
    dispatch.event(&Event::new(metadata, &value_set));
}

fn field_name(key: &str) -> String {
    if RECORD_KEYS.contains(&key) {
        format!("{RENAMED_PREFIX}{key}")
    } else {
        key.to_string()
    }
}

fn metadata_for(shape: Shape) -> &'static Metadata<'static> {
    let mut callsites = CALLSITES.lock();
    if let Some(&metadata) = callsites.get(&shape) {
        return metadata;
    }

    let names: Vec<&'static str> = shape
        .names
        .iter()
        .map(|name| -> &'static str { Box::leak(name.clone().into_boxed_str()) })
        .collect();
    let names: &'static [&'static str] = Box::leak(names.into_boxed_slice());

    let site: &'static KeyedCallsite = Box::leak(Box::new(KeyedCallsite {
        metadata: OnceCell::new(),
    }));
    let metadata = site.metadata.get_or_init(|| {
        Metadata::new(
            "oncelog event",
            TARGET,
            shape.level,
            Some(shape.file),
            Some(shape.line),
            None,
            FieldSet::new(names, tracing_core::identify_callsite!(site)),
            Kind::EVENT,
        )
    });
    callsite::register(site);

    let _ = callsites.insert(shape, metadata);
    metadata
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
