//! Favorites grid presenter.
//!
//! The presenter owns no state beyond its column count. It shapes what the
//! view draws and forwards every user action to a [`FavoritesModel`] as-is.

use super::{Favorite, FavoritesModel};
use crate::constants::grid::{COMPACT_PORTRAIT_COLUMNS, WIDE_COLUMNS};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Compact,
    Regular,
}

pub struct NewTabPageGrid;

impl NewTabPageGrid {
    pub fn columns_count(size_class: SizeClass, is_landscape: bool) -> usize {
        match (size_class, is_landscape) {
            (SizeClass::Regular, _) | (SizeClass::Compact, true) => WIDE_COLUMNS,
            (SizeClass::Compact, false) => COMPACT_PORTRAIT_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Chevron {
    /// Section is collapsed; tapping expands
    Down,
    /// Section is expanded; tapping collapses
    Up,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub columns: usize,
    pub items: Vec<Favorite>,
    /// Present only when there are more favorites than fit collapsed
    pub toggle: Option<Chevron>,
}

impl GridSnapshot {
    /// Items split into rows of `columns`.
    pub fn rows(&self) -> Vec<&[Favorite]> {
        self.items.chunks(self.columns.max(1)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteMenuAction {
    Delete,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    Select(Favorite),
    Menu(Favorite, FavoriteMenuAction),
    Move { from: usize, to: usize },
    ToggleCollapse,
    ToggleTooltip,
}

#[derive(Debug, Clone, Copy)]
pub struct FavoritesGridPresenter {
    columns: usize,
}

impl FavoritesGridPresenter {
    pub fn new(size_class: SizeClass, is_landscape: bool) -> Self {
        Self::with_columns(NewTabPageGrid::columns_count(size_class, is_landscape))
    }

    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn snapshot(&self, model: &dyn FavoritesModel) -> GridSnapshot {
        let result = model.prefixed_favorites(self.columns);
        let toggle = result.is_collapsible.then(|| {
            if model.is_collapsed() {
                Chevron::Down
            } else {
                Chevron::Up
            }
        });

        GridSnapshot {
            columns: self.columns,
            items: result.items,
            toggle,
        }
    }

    pub fn handle(&self, model: &mut dyn FavoritesModel, action: GridAction) {
        tracing::trace!(?action, "grid action");
        match action {
            GridAction::Select(favorite) => model.favorite_selected(&favorite),
            GridAction::Menu(favorite, FavoriteMenuAction::Delete) => {
                model.delete_favorite(&favorite)
            }
            GridAction::Menu(favorite, FavoriteMenuAction::Edit) => model.edit_favorite(&favorite),
            GridAction::Move { from, to } => model.move_favorites(from, to),
            GridAction::ToggleCollapse => model.toggle_collapse(),
            GridAction::ToggleTooltip => model.toggle_tooltip(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrefixedFavorites;

    /// Records every call so forwarding can be checked verbatim.
    #[derive(Default)]
    struct ScriptedModel {
        items: Vec<Favorite>,
        collapsible: bool,
        collapsed: bool,
        calls: Vec<String>,
    }

    impl FavoritesModel for ScriptedModel {
        fn prefixed_favorites(&self, columns: usize) -> PrefixedFavorites {
            PrefixedFavorites {
                items: self.items.iter().take(columns * 2).cloned().collect(),
                is_collapsible: self.collapsible,
            }
        }
        fn move_favorites(&mut self, from: usize, to: usize) {
            self.calls.push(format!("move {from} {to}"));
        }
        fn delete_favorite(&mut self, favorite: &Favorite) {
            self.calls.push(format!("delete {}", favorite.title));
        }
        fn edit_favorite(&mut self, favorite: &Favorite) {
            self.calls.push(format!("edit {}", favorite.title));
        }
        fn favorite_selected(&mut self, favorite: &Favorite) {
            self.calls.push(format!("select {}", favorite.title));
        }
        fn toggle_collapse(&mut self) {
            self.calls.push("toggle_collapse".to_string());
        }
        fn is_collapsed(&self) -> bool {
            self.collapsed
        }
        fn toggle_tooltip(&mut self) {
            self.calls.push("toggle_tooltip".to_string());
        }
        fn is_showing_tooltip(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_columns_count() {
        assert_eq!(NewTabPageGrid::columns_count(SizeClass::Compact, false), 4);
        assert_eq!(NewTabPageGrid::columns_count(SizeClass::Compact, true), 6);
        assert_eq!(NewTabPageGrid::columns_count(SizeClass::Regular, false), 6);
        assert_eq!(NewTabPageGrid::columns_count(SizeClass::Regular, true), 6);
    }

    #[test]
    fn test_snapshot_toggle_follows_collapse_state() {
        let mut model = ScriptedModel {
            items: (0..12).map(|i| Favorite::new(format!("F{i}"), "")).collect(),
            collapsible: true,
            collapsed: true,
            ..Default::default()
        };
        let presenter = FavoritesGridPresenter::new(SizeClass::Compact, false);

        let snapshot = presenter.snapshot(&model);
        assert_eq!(snapshot.toggle, Some(Chevron::Down));
        assert_eq!(snapshot.items.len(), 8);
        assert_eq!(snapshot.rows().len(), 2);

        model.collapsed = false;
        assert_eq!(presenter.snapshot(&model).toggle, Some(Chevron::Up));

        model.collapsible = false;
        assert_eq!(presenter.snapshot(&model).toggle, None);
    }

    #[test]
    fn test_handle_forwards_verbatim() {
        let mut model = ScriptedModel::default();
        let presenter = FavoritesGridPresenter::with_columns(4);
        let favorite = Favorite::new("Docs", "https://docs.example");

        presenter.handle(&mut model, GridAction::Select(favorite.clone()));
        presenter.handle(
            &mut model,
            GridAction::Menu(favorite.clone(), FavoriteMenuAction::Delete),
        );
        presenter.handle(&mut model, GridAction::Menu(favorite, FavoriteMenuAction::Edit));
        presenter.handle(&mut model, GridAction::Move { from: 3, to: 1 });
        presenter.handle(&mut model, GridAction::ToggleCollapse);
        presenter.handle(&mut model, GridAction::ToggleTooltip);

        assert_eq!(
            model.calls,
            [
                "select Docs",
                "delete Docs",
                "edit Docs",
                "move 3 1",
                "toggle_collapse",
                "toggle_tooltip"
            ]
        );
    }

    #[test]
    fn test_with_columns_never_zero() {
        assert_eq!(FavoritesGridPresenter::with_columns(0).columns(), 1);
    }
}
