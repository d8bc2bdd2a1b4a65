//! Tests for the diagnostics emitted through `tracing`.

#![cfg(all(feature = "sequence", feature = "sort"))]

use lazy_seq::sequence::{RangeDescriptor, range};
use lazy_seq::sort::sort;
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(action: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("lazy_seq=trace"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, action);
    buffer.contents()
}

#[rstest]
fn sort_traces_each_partition() {
    let output = capture(|| {
        let _ = sort(&[3, 1, 2]);
    });

    assert!(output.contains("partitioned around pivot"));
    assert!(output.contains("TRACE"));
}

#[rstest]
fn range_traces_construction() {
    let output = capture(|| {
        let _ = range(0_i32, Some(3), 1).count();
    });

    assert!(output.contains("range constructed"));
}

#[rstest]
fn rejected_descriptor_is_logged_at_debug() {
    let output = capture(|| {
        let _ = RangeDescriptor::new(0.0_f64, None, f64::NAN).validate();
    });

    assert!(output.contains("DEBUG"));
    assert!(output.contains("rejected range descriptor"));
    assert!(output.contains("parameter=\"step\"") || output.contains("parameter=step"));
}

#[rstest]
fn nothing_is_logged_at_info_level() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let _ = sort(&[5, 4, 3, 2, 1]);
        let _ = range(0_i64, Some(10), 2).count();
    });

    assert!(buffer.contents().is_empty());
}
