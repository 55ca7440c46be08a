//! Worker thread body.
//!
//! Each worker loops: pop an item, run one step if it is a route,
//! acknowledge, repeat. A shutdown token is acknowledged and ends the
//! loop. Steps that panic are contained here so a single bad branch
//! cannot take the worker (and the outstanding count) down with it.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::frontier::FrontierItem;
use crate::step::SearchContext;

/// What a worker did before it exited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct WorkerReport {
    pub(crate) steps: u64,
    pub(crate) failures: u64,
}

pub(crate) fn worker_loop(ctx: Arc<SearchContext>, worker_id: usize) -> WorkerReport {
    let mut report = WorkerReport::default();
    loop {
        let (item, _ack) = ctx.frontier().pop_guarded();
        let route = match item {
            FrontierItem::Route(route) => route,
            FrontierItem::Shutdown => break,
        };

        report.steps += 1;
        let result = panic::catch_unwind(AssertUnwindSafe(|| ctx.step(route)));
        if let Err(payload) = result {
            report.failures += 1;
            ctx.metrics().record_failure();
            tracing::warn!(
                worker_id,
                reason = panic_message(&*payload),
                "search step panicked; branch abandoned"
            );
        }
        // `_ack` drops here: the route is acknowledged after every child
        // it produced has been pushed.
    }
    tracing::trace!(worker_id, steps = report.steps, "worker exiting");
    report
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::VecSink;
    use lexgrid_core::PrefixIndex;
    use lexgrid_grid::Grid;
    use std::thread;

    struct Everything;

    impl PrefixIndex for Everything {
        fn is_prefix(&self, _: &str) -> bool {
            true
        }

        fn is_word(&self, _: &str) -> bool {
            false
        }
    }

    struct Explodes;

    impl PrefixIndex for Explodes {
        fn is_prefix(&self, s: &str) -> bool {
            if s == "A" {
                panic!("index failure on {s}");
            }
            false
        }

        fn is_word(&self, _: &str) -> bool {
            false
        }
    }

    fn context(index: Arc<dyn PrefixIndex>) -> Arc<SearchContext> {
        Arc::new(SearchContext::new(
            Arc::new(Grid::parse("CA/TS").unwrap()),
            index,
            Arc::new(VecSink::new()),
            1,
        ))
    }

    #[test]
    fn exits_on_shutdown_token() {
        let ctx = context(Arc::new(Everything));
        ctx.frontier().push_shutdown();
        let report = worker_loop(Arc::clone(&ctx), 0);
        assert_eq!(report, WorkerReport::default());
        assert_eq!(ctx.frontier().outstanding(), 0);
    }

    #[test]
    fn single_worker_drains_all_paths() {
        let ctx = context(Arc::new(Everything));
        ctx.seed();
        let wctx = Arc::clone(&ctx);
        let handle = thread::spawn(move || worker_loop(wctx, 0));
        ctx.frontier().await_idle();
        ctx.frontier().push_shutdown();
        let report = handle.join().unwrap();

        // Simple paths on a 2x2 king graph: 4 + 12 + 24 + 24.
        assert_eq!(report.steps, 64);
        assert_eq!(report.failures, 0);
        assert_eq!(ctx.metrics().snapshot().routes_pushed, 64);
        assert_eq!(ctx.frontier().outstanding(), 0);
    }

    #[test]
    fn panicking_step_is_contained_and_acknowledged() {
        let ctx = context(Arc::new(Explodes));
        ctx.seed();
        ctx.frontier().push_shutdown();
        let report = worker_loop(Arc::clone(&ctx), 3);
        assert_eq!(report.steps, 4);
        assert_eq!(report.failures, 1);
        let m = ctx.metrics().snapshot();
        assert_eq!(m.routes_failed, 1);
        assert_eq!(m.routes_pruned, 3);
        assert_eq!(ctx.frontier().outstanding(), 0);
    }

    #[test]
    fn panic_message_reads_common_payloads() {
        let s: Box<dyn std::any::Any + Send> = Box::new("static");
        assert_eq!(panic_message(s.as_ref()), "static");
        let s: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(s.as_ref()), "owned");
        let s: Box<dyn std::any::Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(s.as_ref()), "non-string panic payload");
    }
}
