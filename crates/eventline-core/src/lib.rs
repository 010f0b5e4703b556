//! Core types: announcement parsing, events, timeline, formatting

pub mod event;
pub mod format;
pub mod normalize;
pub mod parser;
pub mod timeline;
pub mod tracing;

pub use event::{Event, EventStatus, ExtractionOptions, ValidationError};
pub use format::{
    FormatOptions, JsonTimeline, OutputFormat, ellipsis, format_details, format_preview,
    format_timeline, to_json,
};
pub use normalize::{normalize, segment};
pub use parser::{parse_announcement, parse_announcement_at};
pub use timeline::{DateRange, DaySlot, RangeFilter, build_timeline, date_range, day_label};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
