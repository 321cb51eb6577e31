use super::*;

#[uniffi::export]
impl NewTabPageCore {
    // =========================================================================
    // CALLBACK API
    // =========================================================================

    /// Register the analytics sink. Replaces any previous callback.
    /// Pixels fired with no callback registered are only logged and counted.
    pub fn set_pixel_callback(&self, callback: Box<dyn PixelCallback>) {
        if let Ok(mut guard) = self.pixels.callback.write() {
            *guard = Some(Arc::from(callback));
        }
    }

    /// Register a callback for model change notifications.
    pub fn set_change_callback(&self, callback: Box<dyn ChangeCallback>) {
        if let Ok(mut guard) = self.changes.callback.write() {
            *guard = Some(Arc::from(callback));
        }
    }

    /// Register a callback for favorite selection and edit requests.
    pub fn set_favorites_callback(&self, callback: Box<dyn FavoritesCallback>) {
        if let Ok(mut guard) = self.favorites_delegate.callback.write() {
            *guard = Some(Arc::from(callback));
        }
    }

    /// Drop all registered callbacks.
    pub fn clear_callbacks(&self) {
        if let Ok(mut guard) = self.pixels.callback.write() {
            *guard = None;
        }
        if let Ok(mut guard) = self.changes.callback.write() {
            *guard = None;
        }
        if let Ok(mut guard) = self.favorites_delegate.callback.write() {
            *guard = None;
        }
    }

    /// Pixels fired since this core was created, most frequent first.
    pub fn pixel_counts(&self) -> Vec<PixelCount> {
        self.pixels
            .stats
            .snapshot()
            .pixels_by_count()
            .into_iter()
            .map(|(pixel, count)| PixelCount {
                pixel,
                name: pixel.name().to_string(),
                count,
            })
            .collect()
    }
}
