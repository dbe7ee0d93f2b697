//! Lock-protected handoff of reconstructed pixels to an external display
//! consumer, modelled directly on a lock + dirty-flag + atomic-counter
//! synced-image pattern: the renderer writes the raw accumulator-sized
//! surface under a short critical section; a consumer thread lazily
//! rescales it to the current display size only when something changed.

use crate::core::Colour;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

pub type Rgba8 = [u8; 4];

fn make_rgba(c: Colour) -> Rgba8 {
    let chan = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
    [chan(c.r), chan(c.g), chan(c.b), 255]
}

const OPAQUE_WHITE: Rgba8 = [255, 255, 255, 255];

struct ScreenSurface {
    width: usize,
    height: usize,
    pixels: Vec<Rgba8>,
}

/// The renderer-side half of the handoff: a fixed-size raw surface matching
/// the render resolution, plus a lazily-rescaled copy sized for whatever the
/// display currently wants.
pub struct PresentBuffer {
    width: usize,
    height: usize,
    raw: Mutex<Vec<Rgba8>>,
    screen: Mutex<ScreenSurface>,
    needs_update: AtomicBool,
    counter: AtomicU64,
}

/// An exclusive handle to the raw surface, held only for the duration of a
/// single `present` copy.
pub struct RawGuard<'a> {
    guard: MutexGuard<'a, Vec<Rgba8>>,
    width: usize,
}

impl<'a> RawGuard<'a> {
    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        self.guard[y * self.width + x] = make_rgba(colour);
    }
}

impl PresentBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            raw: Mutex::new(vec![[0, 0, 0, 255]; width * height]),
            screen: Mutex::new(ScreenSurface { width, height, pixels: vec![OPAQUE_WHITE; width * height] }),
            needs_update: AtomicBool::new(false),
            counter: AtomicU64::new(0),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Acquires exclusive access to the raw surface.
    pub fn acquire(&self) -> RawGuard<'_> {
        RawGuard { guard: self.raw.lock().expect("present buffer mutex poisoned"), width: self.width }
    }

    /// Marks the screen-sized copy stale; safe to call from any thread.
    pub fn notify(&self) {
        self.needs_update.store(true, Ordering::Release);
    }

    pub fn increment_counter(&self) {
        self.counter.fetch_add(1, Ordering::AcqRel);
    }

    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    /// Updates the requested display size and marks the screen copy stale.
    pub fn set_screen_size(&self, width: usize, height: usize) {
        let mut screen = self.screen.lock().expect("present buffer mutex poisoned");
        screen.width = width;
        screen.height = height;
        drop(screen);
        self.notify();
    }

    /// Returns the current screen-sized pixel copy, rescaling it first if
    /// stale. Regions of the destination beyond the raw surface's extent
    /// (display larger than render resolution) are padded opaque white.
    pub fn screen_pixels(&self) -> (Vec<Rgba8>, usize, usize, u64) {
        if self.needs_update.load(Ordering::Acquire) {
            let raw = self.raw.lock().expect("present buffer mutex poisoned");
            let mut screen = self.screen.lock().expect("present buffer mutex poisoned");

            let mut pixels = vec![OPAQUE_WHITE; screen.width * screen.height];
            for y in 0..screen.height {
                for x in 0..screen.width {
                    if y < self.height && x < self.width {
                        pixels[y * screen.width + x] = raw[y * self.width + x];
                    }
                }
            }
            screen.pixels = pixels;
            self.needs_update.store(false, Ordering::Release);
        }

        let screen = self.screen.lock().expect("present buffer mutex poisoned");
        (screen.pixels.clone(), screen.width, screen.height, self.counter())
    }

    /// Test/debug helper: a snapshot of the raw surface.
    pub fn raw_pixels_snapshot(&self) -> Vec<Rgba8> {
        self.raw.lock().expect("present buffer mutex poisoned").clone()
    }
}
