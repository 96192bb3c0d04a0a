use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use criterion::{Criterion, criterion_group, criterion_main};
use leveled_slogger::{Context, Handler, Level, Logger, Record, SLogger, Severity, keyvals};

/// Accepts every severity and drops the record after touching its fields.
struct Sink;

impl Handler for Sink {
    fn enabled(&self, _ctx: &Context, _severity: Severity) -> bool {
        true
    }

    fn emit(&self, _ctx: &Context, record: &Record<'_>) {
        black_box(record.message());
        black_box(record.attrs());
    }
}

fn bench_log(c: &mut Criterion) {
    let logger = SLogger::new(Sink);

    c.bench_function("simple debug log", |b| {
        b.iter(|| {
            logger.log(
                Level::Debug,
                black_box(&keyvals!["msg", "test message", "key1", "value1", "key2", 42]),
            )
        })
    });

    c.bench_function("complex log with multiple fields", |b| {
        b.iter(|| {
            logger.log(
                Level::Info,
                black_box(&keyvals![
                    "msg",
                    "complex log message",
                    "user_id",
                    12345,
                    "email",
                    "test@example.com",
                    "active",
                    true,
                    "score",
                    98.76,
                ]),
            )
        })
    });

    c.bench_function("malformed keyvals", |b| {
        b.iter(|| logger.log(Level::Error, black_box(&keyvals!["output", "error", "except warn"])))
    });
}

fn bench_concurrent(c: &mut Criterion) {
    let logger = Arc::new(SLogger::new(Sink));

    c.bench_function("concurrent logging", |b| {
        b.iter(|| {
            thread::scope(|s| {
                for _ in 0..4 {
                    let logger = logger.clone();
                    s.spawn(move || {
                        for count in 0..64 {
                            let _ = logger.log(
                                Level::Info,
                                &keyvals!["msg", "concurrent log message", "thread", "bench", "count", count],
                            );
                        }
                    });
                }
            })
        })
    });
}

criterion_group!(log_benches, bench_log, bench_concurrent);
criterion_main!(log_benches);
