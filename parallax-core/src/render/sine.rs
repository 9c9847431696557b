//! Sine lookup tables
//!
//! The compositor needs one sine sample per layer per pixel per frame.
//! Sampling a precomputed table keeps that loop free of transcendental calls.

/// Entries per table: one per degree of a full rotation
pub const TABLE_LEN: usize = 360;

/// Modulus of the scroll index
///
/// One less than the table length, so the last entry is never addressed by
/// the scroll index.
pub const SCROLL_WRAP: usize = TABLE_LEN - 1;

/// Sine samples of one layer over a full rotation
///
/// `values[d] = sin(radians(d) * frequency)`. The frequency only scales the
/// phase; the table always has `TABLE_LEN` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SineTable {
    values: [f32; TABLE_LEN],
}

impl SineTable {
    /// Build the table for a spatial frequency
    pub fn build(frequency: f32) -> Self {
        let mut values = [0.0; TABLE_LEN];
        for (degree, value) in values.iter_mut().enumerate() {
            *value = sample(degree, frequency);
        }
        Self { values }
    }

    /// Sample at `index`
    ///
    /// Panics if `index >= TABLE_LEN`; callers reduce indices with
    /// [`scroll_index`] first.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.values[index]
    }

    /// Number of entries (always `TABLE_LEN`)
    pub const fn len(&self) -> usize {
        TABLE_LEN
    }

    /// Always false; tables are never empty
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All entries in degree order
    pub fn values(&self) -> &[f32; TABLE_LEN] {
        &self.values
    }
}

fn sample(degree: usize, frequency: f32) -> f32 {
    let radians = (degree as f64).to_radians();
    libm::sin(radians * frequency as f64) as f32
}

/// Whole-entry scroll offset for a layer at `time`, already reduced
///
/// Equals `floor(time * speed) mod SCROLL_WRAP`, normalized to be
/// non-negative for negative speeds and stable for very large times.
pub fn scroll_offset(time: f64, speed: f32) -> usize {
    let shift = libm::floor(time * speed as f64);
    let wrapped = libm::fmod(shift, SCROLL_WRAP as f64);
    let wrapped = if wrapped < 0.0 {
        wrapped + SCROLL_WRAP as f64
    } else {
        wrapped
    };
    // fmod of an integral value is integral and in [0, SCROLL_WRAP)
    (wrapped as usize) % SCROLL_WRAP
}

/// Table index of column `x` for a precomputed scroll offset
#[inline]
pub fn scroll_index(x: usize, offset: usize) -> usize {
    (x % SCROLL_WRAP + offset) % SCROLL_WRAP
}
