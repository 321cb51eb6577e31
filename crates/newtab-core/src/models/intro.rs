//! New Tab Page intro message.
//!
//! The intro message is a one-time onboarding banner. Its visibility comes from
//! a persisted flag; the model counts impressions for the lifetime of the page
//! and disables the flag once [`INTRO_MESSAGE_MAX_IMPRESSIONS`] is reached.
//!
//! # Visibility after the last impression
//! Reaching the impression limit writes `false` to the store but keeps the
//! message visible on the page that showed it. A model constructed later over
//! the same store reports the message hidden.

use crate::constants::INTRO_MESSAGE_MAX_IMPRESSIONS;
use crate::events::{ChangeObserver, NewTabPageChange, Observers};
use crate::pixel::{Pixel, PixelFiring};
use std::sync::Arc;

/// Persisted intro message setting.
///
/// An unset flag reads as `false`. Implementations that cannot reach their
/// backing storage must also report `false`.
pub trait NewTabPageIntroDataStoring: Send + Sync {
    fn intro_message_enabled(&self) -> bool;
    fn set_intro_message_enabled(&self, enabled: bool);
}

pub struct NewTabPageModel {
    intro_data_storage: Arc<dyn NewTabPageIntroDataStoring>,
    pixel_firing: Arc<dyn PixelFiring>,
    intro_message_impressions: u32,
    /// Set when the last allowed impression disabled the stored flag
    showing_final_impression: bool,
    observers: Observers,
}

impl NewTabPageModel {
    pub fn new(
        intro_data_storage: Arc<dyn NewTabPageIntroDataStoring>,
        pixel_firing: Arc<dyn PixelFiring>,
    ) -> Self {
        Self {
            intro_data_storage,
            pixel_firing,
            intro_message_impressions: 0,
            showing_final_impression: false,
            observers: Observers::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn ChangeObserver>) {
        self.observers.subscribe(observer);
    }

    pub fn is_intro_message_visible(&self) -> bool {
        self.showing_final_impression || self.intro_data_storage.intro_message_enabled()
    }

    pub fn intro_message_impressions(&self) -> u32 {
        self.intro_message_impressions
    }

    /// Record one display of the intro message.
    pub fn intro_message_displayed(&mut self) {
        self.intro_message_impressions = self.intro_message_impressions.saturating_add(1);
        tracing::debug!(
            impressions = self.intro_message_impressions,
            "intro message displayed"
        );

        if self.intro_message_impressions == INTRO_MESSAGE_MAX_IMPRESSIONS {
            // Keep this page's banner up; only later pages see the flag.
            self.showing_final_impression = self.is_intro_message_visible();
            self.intro_data_storage.set_intro_message_enabled(false);
            tracing::info!(
                max = INTRO_MESSAGE_MAX_IMPRESSIONS,
                "intro message impression limit reached, disabling"
            );
        }

        self.pixel_firing.fire(Pixel::NewTabPageMessageDisplayed);
    }

    pub fn dismiss_intro_message(&mut self) {
        let was_visible = self.is_intro_message_visible();

        self.showing_final_impression = false;
        self.intro_data_storage.set_intro_message_enabled(false);
        self.pixel_firing.fire(Pixel::NewTabPageMessageDismissed);

        tracing::info!("intro message dismissed");
        if was_visible {
            self.observers
                .notify(NewTabPageChange::IntroMessageVisibility { visible: false });
        }
    }

    pub fn customize_new_tab_page(&self) {
        self.pixel_firing.fire(Pixel::NewTabPageCustomize);
    }
}

impl std::fmt::Debug for NewTabPageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewTabPageModel")
            .field("intro_message_impressions", &self.intro_message_impressions)
            .field("showing_final_impression", &self.showing_final_impression)
            .field("observers", &self.observers)
            .finish()
    }
}
