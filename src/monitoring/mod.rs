/*!
 * Monitoring
 * Structured tracing setup
 */

mod tracer;

pub use tracer::{init_tracing, span_ticks, TRACE_JSON_ENV};
