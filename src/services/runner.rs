//! Poll runner.
//!
//! Drives the registered change sources: an optional tick at launch,
//! then a fixed-interval loop. Every change returned by a source is
//! forwarded to the host's change-ingestion sink. Poll and forward
//! failures are logged and do not stop the loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::MissedTickBehavior;

use crate::domain::ports::{ChangeSink, ChangeSource};

/// Drives change sources on a fixed interval and forwards their
/// changes to the host.
pub struct PollRunner {
    /// Sources polled on every tick.
    sources: Vec<Arc<dyn ChangeSource>>,
    /// Host change-ingestion sink.
    sink: Arc<dyn ChangeSink>,
    /// Time between ticks.
    interval: Duration,
    /// Whether to tick immediately at startup.
    poll_at_launch: bool,
    /// Watermark passed to sources as `last_poll`.
    last_poll: Option<DateTime<Utc>>,
}

impl PollRunner {
    /// Create a runner over the given sources and sink.
    pub fn new(
        sources: Vec<Arc<dyn ChangeSource>>,
        sink: Arc<dyn ChangeSink>,
        interval: Duration,
        poll_at_launch: bool,
    ) -> Self {
        Self {
            sources,
            sink,
            interval,
            poll_at_launch,
            last_poll: None,
        }
    }

    /// The current incremental-poll watermark.
    pub fn last_poll(&self) -> Option<DateTime<Utc>> {
        self.last_poll
    }

    /// Run one poll tick across every source.
    ///
    /// Returns the number of changes forwarded to the sink. The tick
    /// start time becomes the next watermark, so entries landing while
    /// the tick runs are picked up by the following one.
    pub async fn tick(&mut self) -> usize {
        let watermark = self.last_poll;
        let tick_started = Utc::now();
        let mut forwarded = 0usize;

        for source in &self.sources {
            let changes = match source.poll(watermark).await {
                Ok(changes) => changes,
                Err(e) => {
                    tracing::error!(source = source.name(), error = %e, "poll failed");
                    continue;
                }
            };

            for change in &changes {
                match self.sink.add_change(change).await {
                    Ok(()) => forwarded += 1,
                    Err(e) => {
                        tracing::error!(
                            source = source.name(),
                            author = %change.author,
                            error = %e,
                            "failed to forward change to host"
                        );
                    }
                }
            }
        }

        self.last_poll = Some(tick_started);
        tracing::info!(forwarded, "poll tick complete");
        forwarded
    }

    /// Run the poll loop until the task is cancelled.
    pub async fn run(&mut self) {
        if self.poll_at_launch {
            self.tick().await;
        }

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            self.tick().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::errors::{DomainError, DomainResult};
    use crate::domain::models::Change;

    struct FixedSource {
        changes: Vec<Change>,
        seen_watermarks: Mutex<Vec<Option<DateTime<Utc>>>>,
    }

    impl FixedSource {
        fn new(changes: Vec<Change>) -> Self {
            Self {
                changes,
                seen_watermarks: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChangeSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn poll(&self, last_poll: Option<DateTime<Utc>>) -> DomainResult<Vec<Change>> {
            self.seen_watermarks.lock().unwrap().push(last_poll);
            Ok(self.changes.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ChangeSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn poll(&self, _last_poll: Option<DateTime<Utc>>) -> DomainResult<Vec<Change>> {
            Err(DomainError::ExecutionFailed("boom".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        changes: Mutex<Vec<Change>>,
    }

    #[async_trait]
    impl ChangeSink for RecordingSink {
        async fn add_change(&self, change: &Change) -> DomainResult<()> {
            self.changes.lock().unwrap().push(change.clone());
            Ok(())
        }
    }

    fn make_change(author: &str) -> Change {
        Change::new(author, "2024-01-15T10:30:00.000+0000", "Issue CI-1 changelog", 1)
    }

    #[tokio::test]
    async fn test_tick_forwards_all_changes() {
        let source = Arc::new(FixedSource::new(vec![
            make_change("alice"),
            make_change("bob"),
        ]));
        let sink = Arc::new(RecordingSink::default());
        let mut runner = PollRunner::new(
            vec![source.clone()],
            sink.clone(),
            Duration::from_secs(10),
            true,
        );

        let forwarded = runner.tick().await;
        assert_eq!(forwarded, 2);
        assert_eq!(sink.changes.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_tick_advances_watermark() {
        let source = Arc::new(FixedSource::new(vec![]));
        let sink = Arc::new(RecordingSink::default());
        let mut runner =
            PollRunner::new(vec![source.clone()], sink, Duration::from_secs(10), true);

        assert!(runner.last_poll().is_none());
        runner.tick().await;
        let after_first = runner.last_poll();
        assert!(after_first.is_some());
        runner.tick().await;

        let seen = source.seen_watermarks.lock().unwrap();
        assert_eq!(seen[0], None);
        assert_eq!(seen[1], after_first);
    }

    #[tokio::test]
    async fn test_failing_source_does_not_stop_others() {
        let good = Arc::new(FixedSource::new(vec![make_change("alice")]));
        let sink = Arc::new(RecordingSink::default());
        let mut runner = PollRunner::new(
            vec![Arc::new(FailingSource), good],
            sink.clone(),
            Duration::from_secs(10),
            true,
        );

        let forwarded = runner.tick().await;
        assert_eq!(forwarded, 1);
        assert_eq!(sink.changes.lock().unwrap().len(), 1);
    }
}
