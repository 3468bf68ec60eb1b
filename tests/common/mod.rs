//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

use chrono::{NaiveDate, NaiveDateTime};
use image::{Rgba, RgbaImage};
use std::sync::Arc;
use std::time::Instant;
use transit_pass::clock::ManualClock;
use transit_pass::config::Config;
use transit_pass::profile_image::ProfileImage;
use transit_pass::store::{KeyValueStore, MemoryStore, PersistenceAdapter, StoreError, StoredValue};
use transit_pass::ui::app::App;
use transit_pass::ui::ticket::TicketController;

pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 13)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

pub fn manual_clock() -> ManualClock {
    ManualClock::new(at(9, 30, 0))
}

/// Controller over `store`, as if the screen had just been mounted.
pub fn make_controller(store: &MemoryStore) -> TicketController {
    make_controller_with_clock(store, manual_clock())
}

pub fn make_controller_with_clock(store: &MemoryStore, clock: ManualClock) -> TicketController {
    let adapter = PersistenceAdapter::new(Arc::new(store.clone()));
    TicketController::new(adapter, Box::new(clock))
}

pub fn make_app(store: &MemoryStore) -> App {
    let mut config = Config::default();
    config.display.splash_ms = 0;
    App::new(config, make_controller(store), Instant::now())
}

/// Small opaque test image, distinct per `seed`.
pub fn sample_image(width: u32, height: u32, seed: u8) -> ProfileImage {
    ProfileImage::from_rgba(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([seed, (x * 7) as u8, (y * 13) as u8, 255])
    }))
}

/// Store whose reads and writes always fail.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<StoredValue>, StoreError> {
        Err(StoreError::ReadError {
            path: "broken.json".into(),
            source: std::io::Error::other("disk unplugged"),
        })
    }

    fn set(&self, _key: &str, _value: StoredValue) -> Result<(), StoreError> {
        Err(StoreError::WriteError {
            path: "broken.json".into(),
            source: std::io::Error::other("disk unplugged"),
        })
    }
}
