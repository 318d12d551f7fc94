pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use trellis::{CacheError, CssCache, Engine, EngineBuilder, InMemoryCssCache};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn engine() -> Result<Engine, trellis::EngineError> {
    init_logging();
    EngineBuilder::new().build()
}

/// An in-memory cache that counts the calls made against it.
#[derive(Debug, Default)]
pub struct RecordingCache {
    inner: InMemoryCssCache,
    gets: AtomicUsize,
    puts: AtomicUsize,
    invalidations: AtomicUsize,
    /// When set, every `put` fails.
    pub fail_writes: bool,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }
}

impl CssCache for RecordingCache {
    fn get(&self, page_id: &str) -> Result<Option<String>, CacheError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(page_id)
    }

    fn put(&self, page_id: &str, css: &str) -> Result<(), CacheError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(CacheError::WriteFailed {
                page: page_id.to_string(),
                message: "storage offline".to_string(),
            });
        }
        self.inner.put(page_id, css)
    }

    fn invalidate(&self, page_id: &str) -> Result<(), CacheError> {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        self.inner.invalidate(page_id)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Scope ids replaced by a placeholder, for comparing renders.
pub fn strip_scope_numbers(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '-' && chars.peek().is_some_and(|n| n.is_ascii_digit()) {
            out.push('N');
            while chars.peek().is_some_and(|n| n.is_ascii_digit()) {
                chars.next();
            }
        }
    }
    out
}
