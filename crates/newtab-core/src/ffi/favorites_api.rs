use super::*;

#[uniffi::export]
impl NewTabPageCore {
    /// Favorites to render for the given size class and orientation.
    pub fn prefixed_favorites(
        &self,
        size_class: SizeClass,
        is_landscape: bool,
    ) -> Result<PrefixedFavoritesInfo, NewTabPageError> {
        let presenter = presenter_for(size_class, is_landscape);
        self.with_favorites(|model| {
            let snapshot = presenter.snapshot(&*model);
            Ok(PrefixedFavoritesInfo {
                columns: to_u32(snapshot.columns),
                items: snapshot.items.iter().map(FavoriteInfo::from).collect(),
                is_collapsible: snapshot.toggle.is_some(),
                is_collapsed: model.is_collapsed(),
            })
        })
    }

    /// Every favorite, ignoring collapse state.
    pub fn all_favorites(&self) -> Result<Vec<FavoriteInfo>, NewTabPageError> {
        self.with_favorites(|model| Ok(model.favorites().iter().map(FavoriteInfo::from).collect()))
    }

    pub fn add_favorite(&self, title: String, url: String) -> Result<FavoriteInfo, NewTabPageError> {
        self.with_favorites(|model| {
            let favorite = Favorite::new(title, url);
            let info = FavoriteInfo::from(&favorite);
            model.add_favorite(favorite);
            Ok(info)
        })
    }

    /// Move the favorite at `from` so it ends up at `to` (clamped to the end).
    pub fn move_favorites(&self, from: u32, to: u32) -> Result<(), NewTabPageError> {
        self.with_favorites(|model| {
            let len = model.len();
            if from as usize >= len {
                return Err(NewTabPageError::InvalidIndex {
                    index: from,
                    len: to_u32(len),
                });
            }
            model.move_favorites(from as usize, to as usize);
            Ok(())
        })
    }

    pub fn delete_favorite(&self, favorite_id: String) -> Result<(), NewTabPageError> {
        self.with_favorites(|model| {
            let favorite = find_favorite(model, &favorite_id)?;
            model.delete_favorite(&favorite);
            Ok(())
        })
    }

    /// Ask the host to present the edit UI for a favorite.
    pub fn edit_favorite(&self, favorite_id: String) -> Result<(), NewTabPageError> {
        self.with_favorites(|model| {
            let favorite = find_favorite(model, &favorite_id)?;
            model.edit_favorite(&favorite);
            Ok(())
        })
    }

    pub fn favorite_selected(&self, favorite_id: String) -> Result<(), NewTabPageError> {
        self.with_favorites(|model| {
            let favorite = find_favorite(model, &favorite_id)?;
            model.favorite_selected(&favorite);
            Ok(())
        })
    }

    /// Toggle the favorites section. Returns true if it is now collapsed.
    pub fn toggle_favorites_collapse(&self) -> Result<bool, NewTabPageError> {
        self.with_favorites(|model| {
            model.toggle_collapse();
            Ok(model.is_collapsed())
        })
    }

    pub fn is_favorites_collapsed(&self) -> Result<bool, NewTabPageError> {
        self.with_favorites(|model| Ok(model.is_collapsed()))
    }

    /// Toggle the section header tooltip. Returns true if it is now showing.
    pub fn toggle_favorites_tooltip(&self) -> Result<bool, NewTabPageError> {
        self.with_favorites(|model| {
            model.toggle_tooltip();
            Ok(model.is_showing_tooltip())
        })
    }

    pub fn is_showing_favorites_tooltip(&self) -> Result<bool, NewTabPageError> {
        self.with_favorites(|model| Ok(model.is_showing_tooltip()))
    }

    pub fn favorites_section_title(&self) -> String {
        crate::constants::FAVORITES_SECTION_TITLE.to_string()
    }
}
