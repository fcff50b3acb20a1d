use futures::future::{AbortHandle, Abortable};
use futures::stream::{FuturesUnordered, StreamExt};
use gloo_timers::future::IntervalStream;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

use crate::application::series_cache::{RoundTag, SeriesCache};
use crate::domain::{
    logging::LogComponent,
    market_data::{PriceHistorySource, Symbol},
};

/// Auto-refresh cadence of the dashboard
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// What happened to one fetch round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub tag: RoundTag,
    pub applied: usize,
    pub discarded: usize,
    pub failed: usize,
}

/// Fetches every tracked symbol concurrently and writes each result as it
/// lands, so views may briefly mix old and new series within a round.
///
/// `on_update` runs after every write that reached the cache. No cache borrow
/// is held across an await point.
pub async fn run_refresh_round<S, F>(
    source: &S,
    cache: &RefCell<SeriesCache>,
    mut on_update: F,
) -> RoundSummary
where
    S: PriceHistorySource,
    F: FnMut(&Symbol),
{
    let (tag, symbols) = {
        let mut cache = cache.borrow_mut();
        (cache.begin_round(), cache.symbols().to_vec())
    };

    let mut pending: FuturesUnordered<_> = symbols
        .into_iter()
        .map(move |symbol| async move {
            let result = source.fetch_price_history(&symbol, tag.window).await;
            (symbol, result)
        })
        .collect();

    let mut summary = RoundSummary { tag, applied: 0, discarded: 0, failed: 0 };
    while let Some((symbol, result)) = pending.next().await {
        match result {
            Ok(series) => {
                let landed = cache.borrow_mut().apply(tag, &symbol, series);
                if landed {
                    summary.applied += 1;
                    on_update(&symbol);
                } else {
                    summary.discarded += 1;
                }
            }
            Err(error) => {
                cache.borrow().record_failure(tag, &symbol, &error);
                summary.failed += 1;
            }
        }
    }

    crate::log_debug!(
        LogComponent::Application("RefreshLoop"),
        "Round {} finished: applied={} discarded={} failed={}",
        tag.generation,
        summary.applied,
        summary.discarded,
        summary.failed
    );

    summary
}

/// Handle to a running refresh loop. Dropping it stops the loop.
pub struct RefreshHandle {
    abort: AbortHandle,
}

impl RefreshHandle {
    pub fn stop(&self) {
        self.abort.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Runs a round immediately, then starts one on every `interval` tick, until
/// the returned handle is stopped or dropped.
///
/// Ticks never wait for the previous round: a fetch that hangs only stalls its
/// own round. Overlapping rounds are ordered by their generation tags.
pub fn start_refresh_loop<S, F>(
    source: Rc<S>,
    cache: Rc<RefCell<SeriesCache>>,
    interval: Duration,
    on_update: F,
) -> RefreshHandle
where
    S: PriceHistorySource + 'static,
    F: Fn(&Symbol) + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    let interval_ms = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
    let on_update = Rc::new(on_update);

    let start_round = move || {
        let source = Rc::clone(&source);
        let cache = Rc::clone(&cache);
        let on_update = Rc::clone(&on_update);
        async move { run_refresh_round(source.as_ref(), &cache, |symbol| on_update(symbol)).await }
    };

    let task = async move {
        let mut ticks = IntervalStream::new(interval_ms).fuse();
        let mut rounds = FuturesUnordered::new();
        rounds.push(start_round());
        loop {
            futures::select! {
                tick = ticks.next() => match tick {
                    Some(()) => {
                        if !rounds.is_empty() {
                            crate::log_debug!(
                                LogComponent::Application("RefreshLoop"),
                                "{} round(s) still in flight at tick",
                                rounds.len()
                            );
                        }
                        rounds.push(start_round());
                    }
                    None => break,
                },
                _ = rounds.select_next_some() => {}
            }
        }
    };

    spawn_local(async move {
        if Abortable::new(task, registration).await.is_err() {
            crate::log_debug!(LogComponent::Application("RefreshLoop"), "Refresh loop stopped");
        }
    });

    crate::log_info!(
        LogComponent::Application("RefreshLoop"),
        "Refresh loop started, every {}s",
        interval.as_secs()
    );

    RefreshHandle { abort }
}
