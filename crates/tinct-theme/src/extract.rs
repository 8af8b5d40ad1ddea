// SPDX-License-Identifier: MIT

//! Median-cut palette extraction from RGBA pixel buffers.
//!
//! The pipeline has three phases:
//!
//! 1. **Quantize** every opaque pixel (alpha ≥ 128) to a coarser grid and
//!    count occurrences per quantized color, along with the summed pixel
//!    position for a centroid.
//! 2. **Median cut**: repeatedly split the bucket holding the most distinct
//!    colors along its widest channel, at the pixel-count median.
//! 3. **Outlier rescue**: small, strongly saturated regions get averaged
//!    into gray buckets by population weighting. Up to three such colors are
//!    promoted to their own bucket (and removed from the one that swallowed
//!    them, so every opaque pixel is counted exactly once).
//!
//! Everything is ordered (`BTreeMap`, explicit tie-breaks), so the same
//! buffer always yields the same palette.

use std::collections::BTreeMap;

use tinct_color::{Hsl, Rgb, hue_distance};

use crate::error::{Result, ThemeError};

const ALPHA_THRESHOLD: u8 = 128;

const OUTLIER_MIN_SATURATION: f64 = 50.0;
const OUTLIER_MAX_COUNT: usize = 3;
/// An outlier within this hue distance *and* saturation difference of some
/// bucket average is already represented.
const REPRESENTED_HUE: f64 = 30.0;
const REPRESENTED_SATURATION: f64 = 20.0;
/// Minimum hue separation between promoted outliers.
const OUTLIER_HUE_SEPARATION: f64 = 30.0;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Borrowed RGBA8 pixels in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// # Errors
    ///
    /// [`ThemeError::InvalidInput`] unless `data.len() == width * height * 4`.
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| ThemeError::invalid("image dimensions overflow"))?;
        if data.len() != expected {
            return Err(ThemeError::invalid(format!(
                "pixel buffer holds {} bytes, {width}x{height} RGBA needs {expected}",
                data.len()
            )));
        }
        if u32::try_from(expected / 4).is_err() {
            return Err(ThemeError::invalid("image has too many pixels"));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// Tuning knobs for [`extract_colors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractionOptions {
    /// Target number of median-cut buckets.
    pub color_count: usize,
    /// Bits kept per channel, 1..=8.
    pub quantization_bits: u8,
    pub rescue_outliers: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            color_count: 10,
            quantization_bits: 5,
            rescue_outliers: true,
        }
    }
}

impl ExtractionOptions {
    fn validate(&self) -> Result<()> {
        if self.color_count == 0 {
            return Err(ThemeError::invalid("color_count must be at least 1"));
        }
        if !(1..=8).contains(&self.quantization_bits) {
            return Err(ThemeError::invalid(format!(
                "quantization_bits must be in 1..=8, got {}",
                self.quantization_bits
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Normalized image position in [0, 1] × [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

/// One palette entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractedColor {
    pub color: Rgb,
    pub hsl: Hsl,
    /// Opaque pixels represented by this entry.
    pub population: u32,
    /// Share of all opaque pixels, in percent.
    pub percentage: f64,
    /// Centroid of the represented pixels.
    pub location: Location,
}

impl ExtractedColor {
    #[must_use]
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

// ---------------------------------------------------------------------------
// Quantization
// ---------------------------------------------------------------------------

/// Snap a channel to the center of its `bits`-wide bucket.
fn quantize(value: u8, bits: u8) -> u8 {
    let shift = 8 - bits;
    if shift == 0 {
        return value;
    }
    ((value >> shift) << shift) + (1 << (shift - 1))
}

#[derive(Debug, Clone, Copy)]
struct ColorEntry {
    color: Rgb,
    count: u32,
    x_sum: f64,
    y_sum: f64,
}

fn histogram(pixels: &PixelBuffer<'_>, bits: u8) -> BTreeMap<u32, ColorEntry> {
    let mut map = BTreeMap::new();
    let width = pixels.width as usize;
    let (w, h) = (f64::from(pixels.width), f64::from(pixels.height));

    for (index, px) in pixels.data.chunks_exact(4).enumerate() {
        if px[3] < ALPHA_THRESHOLD {
            continue;
        }
        let color = Rgb::new(quantize(px[0], bits), quantize(px[1], bits), quantize(px[2], bits));
        #[allow(clippy::cast_precision_loss)]
        let (x, y) = ((index % width) as f64 / w, (index / width) as f64 / h);

        let entry = map.entry(color.to_u32()).or_insert(ColorEntry {
            color,
            count: 0,
            x_sum: 0.0,
            y_sum: 0.0,
        });
        entry.count += 1;
        entry.x_sum += x;
        entry.y_sum += y;
    }
    map
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    R,
    G,
    B,
}

impl Channel {
    const fn of(self, c: Rgb) -> u8 {
        match self {
            Self::R => c.r,
            Self::G => c.g,
            Self::B => c.b,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Bucket {
    entries: Vec<ColorEntry>,
    total: u32,
}

impl Bucket {
    fn from_entries(entries: Vec<ColorEntry>) -> Self {
        let total = entries.iter().map(|e| e.count).sum();
        Self { entries, total }
    }

    fn range(&self, channel: Channel) -> u8 {
        let values = self.entries.iter().map(|e| channel.of(e.color));
        let max = values.clone().max().unwrap_or(0);
        let min = values.min().unwrap_or(0);
        max - min
    }

    /// Widest channel; R beats G beats B on ties.
    fn widest_channel(&self) -> Channel {
        let (r, g, b) = (self.range(Channel::R), self.range(Channel::G), self.range(Channel::B));
        if r >= g && r >= b {
            Channel::R
        } else if g >= b {
            Channel::G
        } else {
            Channel::B
        }
    }

    /// Split at the pixel-count median. Both halves are non-empty as long
    /// as the bucket has at least two entries.
    fn split(mut self) -> (Self, Self) {
        let channel = self.widest_channel();
        self.entries.sort_by_key(|e| (channel.of(e.color), e.color.to_u32()));

        let mut running = 0u64;
        let mut split = self.entries.len() - 1;
        for (i, entry) in self.entries.iter().enumerate() {
            running += u64::from(entry.count);
            if running * 2 >= u64::from(self.total) {
                split = i.max(1);
                break;
            }
        }

        tracing::trace!(
            ?channel,
            entries = self.entries.len(),
            pixels = self.total,
            split,
            "median cut split"
        );

        let right = self.entries.split_off(split);
        (Self::from_entries(self.entries), Self::from_entries(right))
    }

    fn average(&self) -> Rgb {
        let total = u64::from(self.total).max(1);
        let mean = |channel: Channel| {
            let sum: u64 = self
                .entries
                .iter()
                .map(|e| u64::from(channel.of(e.color)) * u64::from(e.count))
                .sum();
            // Rounded integer mean of u8 values always fits in u8.
            u8::try_from((sum * 2 + total) / (total * 2)).unwrap_or(u8::MAX)
        };
        Rgb::new(mean(Channel::R), mean(Channel::G), mean(Channel::B))
    }

    fn centroid(&self) -> Location {
        let total = f64::from(self.total.max(1));
        let (x, y) = self
            .entries
            .iter()
            .fold((0.0, 0.0), |(x, y), e| (x + e.x_sum, y + e.y_sum));
        Location {
            x: x / total,
            y: y / total,
        }
    }
}

fn median_cut(entries: Vec<ColorEntry>, color_count: usize) -> Vec<Bucket> {
    let mut buckets = vec![Bucket::from_entries(entries)];

    while buckets.len() < color_count {
        // Most distinct colors; first one wins ties.
        let mut target = 0;
        for (i, bucket) in buckets.iter().enumerate() {
            if bucket.entries.len() > buckets[target].entries.len() {
                target = i;
            }
        }
        if buckets[target].entries.len() <= 1 {
            break;
        }
        let bucket = std::mem::take(&mut buckets[target]);
        let (left, right) = bucket.split();
        buckets[target] = left;
        buckets.insert(target + 1, right);
    }

    buckets
}

// ---------------------------------------------------------------------------
// Outlier rescue
// ---------------------------------------------------------------------------

fn rescue_outliers(histogram: &BTreeMap<u32, ColorEntry>, buckets: &mut Vec<Bucket>) {
    let averages: Vec<Hsl> = buckets
        .iter()
        .filter(|b| !b.entries.is_empty())
        .map(|b| b.average().to_hsl())
        .collect();

    let represented = |hsl: &Hsl| {
        averages.iter().any(|avg| {
            hue_distance(hsl.h, avg.h) < REPRESENTED_HUE && (hsl.s - avg.s).abs() < REPRESENTED_SATURATION
        })
    };

    let mut candidates: Vec<(f64, &ColorEntry, Hsl)> = histogram
        .values()
        .filter_map(|entry| {
            let hsl = entry.color.to_hsl();
            (hsl.s >= OUTLIER_MIN_SATURATION && !represented(&hsl))
                .then(|| (hsl.s * f64::from(entry.count).ln_1p(), entry, hsl))
        })
        .collect();

    // Highest score first; packed color breaks ties.
    candidates.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| a.1.color.to_u32().cmp(&b.1.color.to_u32()))
    });

    let mut promoted_hues: Vec<f64> = Vec::with_capacity(OUTLIER_MAX_COUNT);
    let mut promoted: Vec<ColorEntry> = Vec::with_capacity(OUTLIER_MAX_COUNT);
    for (_, entry, hsl) in candidates {
        if promoted.len() >= OUTLIER_MAX_COUNT {
            break;
        }
        if promoted_hues
            .iter()
            .any(|&h| hue_distance(h, hsl.h) < OUTLIER_HUE_SEPARATION)
        {
            continue;
        }
        promoted_hues.push(hsl.h);
        promoted.push(*entry);
    }

    for entry in promoted {
        for bucket in buckets.iter_mut() {
            if let Some(pos) = bucket.entries.iter().position(|e| e.color == entry.color) {
                bucket.entries.remove(pos);
                bucket.total -= entry.count;
                break;
            }
        }
        tracing::debug!(color = %entry.color, pixels = entry.count, "promoted saturated outlier");
        buckets.push(Bucket::from_entries(vec![entry]));
    }

    buckets.retain(|b| !b.entries.is_empty());
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Reduce `pixels` to a ranked palette, most populous first.
///
/// # Errors
///
/// [`ThemeError::InvalidInput`] if the options are out of range or the
/// buffer has no opaque pixel.
pub fn extract_colors(
    pixels: &PixelBuffer<'_>,
    options: &ExtractionOptions,
) -> Result<Vec<ExtractedColor>> {
    options.validate()?;
    let _span = tracing::debug_span!(
        "extract_colors",
        width = pixels.width,
        height = pixels.height,
        color_count = options.color_count,
    )
    .entered();

    let histogram = histogram(pixels, options.quantization_bits);
    let opaque: u32 = histogram.values().map(|e| e.count).sum();
    if opaque == 0 {
        return Err(ThemeError::invalid("image has no opaque pixels"));
    }

    let mut buckets = median_cut(histogram.values().copied().collect(), options.color_count);
    if options.rescue_outliers {
        rescue_outliers(&histogram, &mut buckets);
    }

    let mut colors: Vec<ExtractedColor> = buckets
        .iter()
        .map(|bucket| {
            let color = bucket.average();
            ExtractedColor {
                color,
                hsl: color.to_hsl(),
                population: bucket.total,
                percentage: f64::from(bucket.total) / f64::from(opaque) * 100.0,
                location: bucket.centroid(),
            }
        })
        .collect();
    colors.sort_by(|a, b| b.population.cmp(&a.population));

    tracing::debug!(
        distinct = histogram.len(),
        opaque,
        extracted = colors.len(),
        "extracted palette"
    );
    Ok(colors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Lay `runs` out row-major in a `width`-wide image.
    fn image(width: u32, runs: &[(Rgb, usize)]) -> (u32, u32, Vec<u8>) {
        let mut data = Vec::new();
        for &(c, n) in runs {
            for _ in 0..n {
                data.extend_from_slice(&[c.r, c.g, c.b, 255]);
            }
        }
        let pixels = u32::try_from(data.len() / 4).unwrap();
        assert_eq!(pixels % width, 0);
        (width, pixels / width, data)
    }

    fn extract(width: u32, runs: &[(Rgb, usize)], options: &ExtractionOptions) -> Result<Vec<ExtractedColor>> {
        let (w, h, data) = image(width, runs);
        extract_colors(&PixelBuffer::new(w, h, &data)?, options)
    }

    fn gray(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    // ── Quantization ────────────────────────────────────────────────

    #[test]
    fn quantize_to_bucket_center() {
        assert_eq!(quantize(255, 5), 252);
        assert_eq!(quantize(0, 5), 4);
        assert_eq!(quantize(200, 1), 192);
        assert_eq!(quantize(17, 8), 17);
    }

    // ── Input validation ────────────────────────────────────────────

    #[test]
    fn rejects_wrong_buffer_length() {
        let data = vec![0u8; 10];
        assert!(matches!(PixelBuffer::new(2, 2, &data), Err(ThemeError::InvalidInput { .. })));
    }

    #[test]
    fn fully_transparent_image_is_invalid() {
        let data = vec![0u8; 4 * 4 * 4];
        let buffer = PixelBuffer::new(4, 4, &data).unwrap();
        let result = extract_colors(&buffer, &ExtractionOptions::default());
        assert!(matches!(result, Err(ThemeError::InvalidInput { .. })));
    }

    #[test]
    fn rejects_bad_options() {
        let red = [(Rgb::new(255, 0, 0), 4)];
        let zero = ExtractionOptions { color_count: 0, ..Default::default() };
        assert!(extract(2, &red, &zero).is_err());
        let nine = ExtractionOptions { quantization_bits: 9, ..Default::default() };
        assert!(extract(2, &red, &nine).is_err());
    }

    // ── Extraction ──────────────────────────────────────────────────

    #[test]
    fn solid_red_yields_single_color() {
        let colors = extract(10, &[(Rgb::new(255, 0, 0), 100)], &ExtractionOptions::default()).unwrap();
        assert_eq!(colors.len(), 1);
        let red = &colors[0];
        assert_eq!(red.population, 100);
        assert_eq!(red.hex(), "#fc0404");
        assert!((red.percentage - 100.0).abs() < 1e-9);
        assert!((red.location.x - 0.45).abs() < 1e-9);
        assert!((red.location.y - 0.45).abs() < 1e-9);
    }

    #[test]
    fn full_precision_keeps_exact_color() {
        let options = ExtractionOptions { quantization_bits: 8, ..Default::default() };
        let colors = extract(5, &[(Rgb::new(255, 0, 0), 25)], &options).unwrap();
        assert_eq!(colors[0].color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn translucent_pixels_are_ignored() {
        let mut data = Vec::new();
        for i in 0..16 {
            let alpha = if i < 12 { 255 } else { 40 };
            let c = if i < 12 { [0, 0, 255] } else { [255, 0, 0] };
            data.extend_from_slice(&[c[0], c[1], c[2], alpha]);
        }
        let buffer = PixelBuffer::new(4, 4, &data).unwrap();
        let colors = extract_colors(&buffer, &ExtractionOptions::default()).unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].population, 12);
        assert!((colors[0].percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn two_colors_sorted_by_population() {
        let colors = extract(
            10,
            &[(Rgb::new(0, 0, 255), 30), (Rgb::new(255, 255, 0), 70)],
            &ExtractionOptions::default(),
        )
        .unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].population, 70);
        assert_eq!(colors[1].population, 30);
        assert!((colors[0].percentage - 70.0).abs() < 1e-9);
    }

    #[test]
    fn color_count_caps_buckets() {
        let runs: Vec<(Rgb, usize)> = (0..10).map(|k| (gray(16 + 24 * k), 10)).collect();
        let options = ExtractionOptions { color_count: 4, rescue_outliers: false, ..Default::default() };
        let colors = extract(10, &runs, &options).unwrap();
        assert_eq!(colors.len(), 4);
        assert_eq!(colors.iter().map(|c| c.population).sum::<u32>(), 100);
    }

    #[test]
    fn centroid_tracks_region() {
        // Top half blue, bottom half yellow.
        let colors = extract(
            10,
            &[(Rgb::new(0, 0, 255), 50), (Rgb::new(255, 255, 0), 50)],
            &ExtractionOptions::default(),
        )
        .unwrap();
        let blue = colors.iter().find(|c| c.color.b > 200).unwrap();
        let yellow = colors.iter().find(|c| c.color.r > 200).unwrap();
        assert!(blue.location.y < 0.5);
        assert!(yellow.location.y >= 0.5);
    }

    // ── Outlier rescue ──────────────────────────────────────────────

    fn grays_with_blue() -> Vec<(Rgb, usize)> {
        let mut runs: Vec<(Rgb, usize)> = (0..10).map(|k| (gray(16 + 24 * k), 9)).collect();
        runs.push((Rgb::new(0, 0, 255), 10));
        runs
    }

    #[test]
    fn saturated_outlier_is_rescued() {
        let options = ExtractionOptions { color_count: 2, ..Default::default() };
        let colors = extract(10, &grays_with_blue(), &options).unwrap();
        assert_eq!(colors.len(), 3);
        let blue = colors.iter().find(|c| c.hsl.s > 90.0).expect("blue promoted");
        assert_eq!(blue.color, Rgb::new(4, 4, 252));
        assert_eq!(blue.population, 10);
        assert_eq!(colors.iter().map(|c| c.population).sum::<u32>(), 100);
    }

    #[test]
    fn rescue_can_be_disabled() {
        let options = ExtractionOptions { color_count: 2, rescue_outliers: false, ..Default::default() };
        let colors = extract(10, &grays_with_blue(), &options).unwrap();
        assert_eq!(colors.len(), 2);
        assert!(colors.iter().all(|c| c.hsl.s < 50.0));
    }

    #[test]
    fn extraction_is_deterministic() {
        let options = ExtractionOptions { color_count: 3, ..Default::default() };
        let a = extract(10, &grays_with_blue(), &options).unwrap();
        let b = extract(10, &grays_with_blue(), &options).unwrap();
        assert_eq!(a, b);
    }
}
