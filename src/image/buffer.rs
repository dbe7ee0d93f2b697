//! The render accumulator: per-iteration sample scratch plus the persistent
//! filter-weighted accumulation buffer.

use crate::core::targets;
use crate::core::types::{Number, Point2};
use crate::core::Colour;
use crate::shared::math::mitchell_filter;
use crate::shared::Sample;
use ndarray::{Array2, Array3, ArrayViewMut2, Axis};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// One accumulated pixel: a filter-weighted radiance sum plus the sum of
/// filter weights that produced it. `rgb / w` is the reconstructed colour;
/// `w` is always `>= 0`.
#[derive(Copy, Clone, Debug, Default)]
pub struct RawPixel {
    pub r: Number,
    pub g: Number,
    pub b: Number,
    pub w: Number,
}

impl RawPixel {
    /// Reconstructed colour, or black if no sample has ever landed here.
    pub fn resolve(&self) -> Colour {
        if self.w <= 0.0 {
            Colour::BLACK
        } else {
            Colour::new(self.r / self.w, self.g / self.w, self.b / self.w)
        }
    }
}

/// The image accumulator: per-iteration sample scratch (`current_iteration`)
/// and the persistent filter-weighted accumulator (`raw_data`).
pub struct Image {
    width: usize,
    height: usize,
    samples_per_pixel: usize,
    filter_width: Number,
    current_iteration: Array3<Sample>,
    raw_data: Mutex<Array2<RawPixel>>,
    counter: AtomicU64,
}

impl Image {
    pub fn new(width: usize, height: usize, samples_per_pixel: usize, filter_width: Number) -> Self {
        Self {
            width,
            height,
            samples_per_pixel,
            filter_width,
            current_iteration: Array3::from_elem((height, width, samples_per_pixel), Sample::default()),
            raw_data: Mutex::new(Array2::from_elem((height, width), RawPixel::default())),
            counter: AtomicU64::new(0),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn samples_per_pixel(&self) -> usize {
        self.samples_per_pixel
    }

    pub fn filter_width(&self) -> Number {
        self.filter_width
    }

    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    /// Splits the per-iteration sample scratch into `height` disjoint
    /// mutable row views, one per image row, so the worker pool can hand
    /// exactly one row to exactly one task with no locking required.
    pub fn rows_mut(&mut self) -> Vec<ArrayViewMut2<'_, Sample>> {
        self.current_iteration.axis_iter_mut(Axis(0)).collect()
    }

    /// Writes one sample into a row view obtained from [`Self::rows_mut`].
    /// `x` indexes the pixel within the row; `idx` indexes the sample slot.
    pub fn set_sample(row: &mut ArrayViewMut2<'_, Sample>, x: usize, pt: Point2, idx: usize, color: Colour) {
        row[[x, idx]] = Sample { position: pt, color };
    }

    /// Splats every sample written this iteration into `raw_data` through
    /// the Mitchell-Netravali reconstruction filter, then advances the
    /// iteration counter. Takes the accumulator's lock for the duration of
    /// the splat, making it mutually exclusive with [`Self::present`].
    pub fn commit_samples(&self) {
        puffin::profile_function!();

        let mut raw = self.raw_data.lock().expect("raw_data mutex poisoned");
        let fw = self.filter_width;

        for y in 0..self.height {
            for x in 0..self.width {
                for idx in 0..self.samples_per_pixel {
                    let sample = self.current_iteration[[y, x, idx]];
                    let (pos_x, pos_y) = (sample.position.x, sample.position.y);

                    let min_x = ((pos_x - fw).ceil() as isize).clamp(0, self.width as isize - 1) as usize;
                    let max_x = ((pos_x + fw).floor() as isize).clamp(0, self.width as isize - 1) as usize;
                    let min_y = ((pos_y - fw).ceil() as isize).clamp(0, self.height as isize - 1) as usize;
                    let max_y = ((pos_y + fw).floor() as isize).clamp(0, self.height as isize - 1) as usize;

                    for yy in min_y..=max_y {
                        for xx in min_x..=max_x {
                            let weight = mitchell_filter(pos_x - xx as Number, pos_y - yy as Number, fw);
                            let px = &mut raw[[yy, xx]];
                            px.r += sample.color.r * weight;
                            px.g += sample.color.g * weight;
                            px.b += sample.color.b * weight;
                            px.w += weight;
                        }
                    }
                }
            }
        }

        drop(raw);
        self.counter.fetch_add(1, Ordering::Release);
        tracing::trace!(target: targets::IMAGE, iteration = self.counter(), "committed samples");
    }

    /// Copies the resolved (tone-mapped) pixels into `present`, under the
    /// accumulator's lock, then notifies the consumer.
    pub fn present(&self, present: &crate::image::PresentBuffer) {
        puffin::profile_function!();

        let raw = self.raw_data.lock().expect("raw_data mutex poisoned");
        let mut guard = present.acquire();
        for y in 0..self.height {
            for x in 0..self.width {
                guard.set(x, y, raw[[y, x]].resolve());
            }
        }
        drop(guard);
        present.increment_counter();
        present.notify();
    }
}
