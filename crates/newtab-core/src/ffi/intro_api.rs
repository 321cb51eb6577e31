use super::*;
use crate::models::NewTabPageIntroDataStoring;

#[uniffi::export]
impl NewTabPageCore {
    pub fn is_intro_message_visible(&self) -> Result<bool, NewTabPageError> {
        self.with_intro(|model| model.is_intro_message_visible())
    }

    pub fn intro_message_impressions(&self) -> Result<u32, NewTabPageError> {
        self.with_intro(|model| model.intro_message_impressions())
    }

    /// Record that the intro message was rendered on screen.
    pub fn intro_message_displayed(&self) -> Result<(), NewTabPageError> {
        self.with_intro(|model| model.intro_message_displayed())
    }

    pub fn dismiss_intro_message(&self) -> Result<(), NewTabPageError> {
        self.with_intro(|model| model.dismiss_intro_message())
    }

    pub fn customize_new_tab_page(&self) -> Result<(), NewTabPageError> {
        self.with_intro(|model| model.customize_new_tab_page())
    }

    /// Host-side switch for the intro message, e.g. when onboarding decides
    /// this user should see it.
    pub fn set_intro_message_enabled(&self, enabled: bool) -> Result<(), NewTabPageError> {
        let store = self
            .intro_store
            .read()
            .map_err(|_| Self::lock_error("intro_store"))?
            .clone()
            .ok_or(NewTabPageError::CoreNotInitialized)?;

        let was_visible = self.is_intro_message_visible()?;
        store.set_intro_message_enabled(enabled);
        let visible = self.is_intro_message_visible()?;

        // A failed write still changes what this session shows
        if visible != was_visible {
            self.changes
                .on_change(NewTabPageChange::IntroMessageVisibility { visible });
            self.dispatch_pending();
        }
        match store.last_error() {
            Some(err) => Err(NewTabPageError::Internal {
                message: err.to_string(),
            }),
            None => Ok(()),
        }
    }
}
