use super::*;
use crate::net::error::status_failure_message;

#[test]
fn endpoint_joins_api_root() {
    assert_eq!(endpoint("jobs"), "/api/jobs");
    assert_eq!(endpoint("/stats"), "/api/stats");
    assert_eq!(endpoint("jobs/mark-viewed"), "/api/jobs/mark-viewed");
}

#[test]
fn status_failure_message_prefers_backend_error() {
    assert_eq!(status_failure_message(Some("rate limited"), "Internal Server Error"), "rate limited");
}

#[test]
fn status_failure_message_falls_back_to_status_text() {
    assert_eq!(status_failure_message(None, "Bad Gateway"), "Bad Gateway");
    assert_eq!(status_failure_message(Some("  "), "Bad Gateway"), "Bad Gateway");
}

#[test]
fn status_failure_message_falls_back_to_unknown() {
    assert_eq!(status_failure_message(None, ""), "Unknown error");
}

#[cfg(not(feature = "hydrate"))]
mod native {
    use super::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::task::{Context, Poll, Waker};
        let mut fut = std::pin::pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn helpers_are_unavailable_outside_the_browser() {
        assert_eq!(block_on(fetch_jobs()), Err(ApiError::Unavailable));
        assert_eq!(block_on(fetch_stats()), Err(ApiError::Unavailable));
        assert_eq!(block_on(trigger_scrape()), Err(ApiError::Unavailable));
        assert_eq!(block_on(mark_jobs_viewed()), Err(ApiError::Unavailable));
    }
}
