//! Test Module
//!
//! Comprehensive test suite for the SentiScope core engine.
//!
//! ## Test Categories
//! - `sentiment_tests`: classification, aggregation, emotions, insights
//! - `cache_tests`: TTL expiry, overwrite, capacity bounds
//! - `export_tests`: CSV sections, DOCX rendering, fallback chain
//! - `client_tests`: HTTP contract against a mock backend
//! - `integration_tests`: full service workflows

pub mod cache_tests;

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::cache::Clock;

/// Controllable time source for cache tests.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock mutex poisoned");
        *now = *now + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex poisoned")
    }
}
