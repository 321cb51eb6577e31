pub mod favorite;
pub mod favorites;
pub mod grid;
pub mod intro;

pub use favorite::Favorite;
pub use favorites::{
    FavoritesDelegate, FavoritesListModel, FavoritesModel, FavoritesStoring,
    NoopFavoritesDelegate, PrefixedFavorites,
};
pub use grid::{
    Chevron, FavoriteMenuAction, FavoritesGridPresenter, GridAction, GridSnapshot,
    NewTabPageGrid, SizeClass,
};
pub use intro::{NewTabPageIntroDataStoring, NewTabPageModel};
