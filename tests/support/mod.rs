#![allow(dead_code)]

pub mod pets;

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Poll `buffer` until it holds `count` entries or the deadline passes.
///
/// Emitter listeners run on background threads.
pub fn wait_for_len(buffer: &Arc<Mutex<Vec<String>>>, count: usize) -> Vec<String> {
    let deadline = Instant::now() + Duration::from_millis(500);
    loop {
        let snapshot = buffer.lock().unwrap().clone();
        if snapshot.len() >= count || Instant::now() >= deadline {
            return snapshot;
        }
        thread::sleep(Duration::from_millis(5));
    }
}
