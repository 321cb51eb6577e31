//! Analytics pixels.
//!
//! A pixel is a fire-and-forget event identified only by its name. Call sites
//! never reach a global sink; a [`PixelFiring`] implementation is injected into
//! every model that reports telemetry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum,
)]
#[serde(rename_all = "snake_case")]
pub enum Pixel {
    NewTabPageMessageDisplayed,
    NewTabPageMessageDismissed,
    NewTabPageCustomize,
    FavoriteLaunched,
}

impl Pixel {
    pub const ALL: [Pixel; 4] = [
        Pixel::NewTabPageMessageDisplayed,
        Pixel::NewTabPageMessageDismissed,
        Pixel::NewTabPageCustomize,
        Pixel::FavoriteLaunched,
    ];

    /// Name sent over the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Pixel::NewTabPageMessageDisplayed => "m_new_tab_page_message_displayed",
            Pixel::NewTabPageMessageDismissed => "m_new_tab_page_message_dismissed",
            Pixel::NewTabPageCustomize => "m_new_tab_page_customize",
            Pixel::FavoriteLaunched => "m_favorite_launched_ntp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sink for analytics pixels.
pub trait PixelFiring: Send + Sync {
    fn fire(&self, pixel: Pixel);
}

/// Emits each pixel as a structured log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPixelFiring;

impl PixelFiring for TracingPixelFiring {
    fn fire(&self, pixel: Pixel) {
        tracing::info!(pixel = pixel.name(), "pixel fired");
    }
}

/// Counts of fired pixels
#[derive(Debug, Default, Clone)]
pub struct PixelStats {
    /// Count per pixel
    pub by_pixel: HashMap<Pixel, u64>,
    /// Pixels in firing order
    pub history: Vec<Pixel>,
    /// Total pixels fired
    pub total: u64,
}

impl PixelStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pixel: Pixel) {
        self.total += 1;
        *self.by_pixel.entry(pixel).or_insert(0) += 1;
        self.history.push(pixel);
    }

    pub fn count(&self, pixel: Pixel) -> u64 {
        self.by_pixel.get(&pixel).copied().unwrap_or(0)
    }

    pub fn last(&self) -> Option<Pixel> {
        self.history.last().copied()
    }

    /// Pixels sorted by count (descending), ties broken by name
    pub fn pixels_by_count(&self) -> Vec<(Pixel, u64)> {
        let mut pixels: Vec<_> = self.by_pixel.iter().map(|(&p, &c)| (p, c)).collect();
        pixels.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));
        pixels
    }
}

/// Thread-safe wrapper for pixel stats; doubles as a recording sink.
#[derive(Debug, Clone)]
pub struct SharedPixelStats {
    inner: Arc<RwLock<PixelStats>>,
}

impl Default for SharedPixelStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedPixelStats {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(PixelStats::new())),
        }
    }

    pub fn record(&self, pixel: Pixel) {
        if let Ok(mut stats) = self.inner.write() {
            stats.record(pixel);
        }
    }

    pub fn snapshot(&self) -> PixelStats {
        self.inner.read().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn count(&self, pixel: Pixel) -> u64 {
        self.inner.read().map(|s| s.count(pixel)).unwrap_or(0)
    }

    pub fn last(&self) -> Option<Pixel> {
        self.inner.read().ok().and_then(|s| s.last())
    }

    pub fn total(&self) -> u64 {
        self.inner.read().map(|s| s.total).unwrap_or(0)
    }
}

impl PixelFiring for SharedPixelStats {
    fn fire(&self, pixel: Pixel) {
        self.record(pixel);
    }
}

/// Fans a pixel out to several sinks, in order.
pub struct PixelFanout {
    sinks: Vec<Arc<dyn PixelFiring>>,
}

impl PixelFanout {
    pub fn new(sinks: Vec<Arc<dyn PixelFiring>>) -> Self {
        Self { sinks }
    }
}

impl PixelFiring for PixelFanout {
    fn fire(&self, pixel: Pixel) {
        for sink in &self.sinks {
            sink.fire(pixel);
        }
    }
}
