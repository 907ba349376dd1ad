//! W3C trace-context extraction for storefront requests.
//!
//! Only consulted when parent propagation is enabled; otherwise every request
//! starts a fresh trace.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// Parent context from `traceparent`/`tracestate`, if the headers carry a
/// valid span.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let extractor = HeaderExtractor(headers);

    global::get_text_map_propagator(|propagator| {
        // Fresh base context: a request without trace headers must not join
        // whatever span happens to be active on this task.
        let context = propagator.extract_with_context(&Context::new(), &extractor);

        context.span().span_context().is_valid().then_some(context)
    })
}

#[derive(Debug)]
struct HeaderExtractor<'a>(&'a HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.to_str().ok()
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}
