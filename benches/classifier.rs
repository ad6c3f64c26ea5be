//! New-tab classifier and dispatch benchmarks.
//!
//! Benchmarks the per-event hot path:
//! - Scoring snapshots of each shape against the default tables
//! - Building log records
//! - Dispatching a created event through the full handler table
//!
//! Run with: cargo bench --bench classifier
//! Results saved to: target/criterion/

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::Value;
use tab_steward::{
    Dispatcher, EventLogger, LogRecord, NewTabClassifier, NewTabMover, Repositioner, Result,
    TabEvent, TabHost, TabId, TabSnapshot, WindowId,
};
use tokio::runtime::Runtime;

// ============================================================================
// Fixtures
// ============================================================================

fn snapshots() -> Vec<(&'static str, TabSnapshot)> {
    let base = TabSnapshot::new(TabId::new(42), WindowId::new(1));
    vec![
        ("blank", base.clone().with_active(true)),
        (
            "chrome_newtab",
            base.clone()
                .with_url("chrome://newtab/")
                .with_title("New Tab")
                .with_active(true),
        ),
        (
            "web_page",
            base.clone()
                .with_url("https://example.com/articles/1")
                .with_title("Example")
                .with_active(true),
        ),
        (
            "link_opened",
            base.with_url("https://example.com/")
                .with_title("Example")
                .with_opener(TabId::new(7)),
        ),
    ]
}

/// Host whose calls succeed immediately.
struct NullHost;

#[async_trait]
impl TabHost for NullHost {
    async fn move_tab(&self, _tab_id: TabId, _index: u32) -> Result<()> {
        Ok(())
    }

    async fn activate_tab(&self, _tab_id: TabId) -> Result<()> {
        Ok(())
    }

    async fn query_window(&self, window_id: WindowId) -> Result<Vec<TabSnapshot>> {
        Ok(vec![
            TabSnapshot::new(TabId::new(42), window_id),
            TabSnapshot::new(TabId::new(1), window_id).with_index(1),
        ])
    }

    async fn query_active(&self) -> Result<Option<TabSnapshot>> {
        Ok(None)
    }

    async fn execute_script(
        &self,
        _tab_id: TabId,
        _script: &str,
        _args: Vec<Value>,
    ) -> Result<Value> {
        Ok(Value::Null)
    }
}

// ============================================================================
// Benchmark: Classification
// ============================================================================

fn bench_classify(c: &mut Criterion) {
    let classifier = NewTabClassifier::default();
    let mut group = c.benchmark_group("classify");

    for (name, tab) in snapshots() {
        group.bench_with_input(BenchmarkId::new("score", name), &tab, |b, tab| {
            b.iter(|| classifier.score(black_box(tab)).count());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Log Records
// ============================================================================

fn bench_log_record(c: &mut Criterion) {
    let now = Utc::now();
    let event = TabEvent::Created(
        TabSnapshot::new(TabId::new(42), WindowId::new(1)).with_url("https://example.com/"),
    );

    c.bench_function("log_record/created", |b| {
        b.iter(|| {
            LogRecord::from_event(black_box(&event), now).map(|record| record.to_string())
        });
    });
}

// ============================================================================
// Benchmark: Dispatch
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let dispatcher = Dispatcher::new()
        .with_handler(Arc::new(EventLogger::new()))
        .with_handler(Arc::new(NewTabMover::new(
            NewTabClassifier::default(),
            Repositioner::new(Duration::ZERO),
        )));

    let mut group = c.benchmark_group("dispatch");

    for (name, tab) in snapshots() {
        let event = TabEvent::Created(tab);
        group.bench_with_input(BenchmarkId::new("created", name), &event, |b, event| {
            b.to_async(&rt)
                .iter(|| async { dispatcher.dispatch(&NullHost, black_box(event)).await });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_log_record, bench_dispatch);
criterion_main!(benches);
