use parking_lot::Mutex;

use newtab_core::models::{Favorite, FavoritesDelegate};

/// Stands in for the browser: records what the New Tab Page asked it to do.
#[derive(Debug, Default)]
pub struct RequestLog {
    entries: Mutex<Vec<String>>,
}

impl RequestLog {
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    fn push(&self, entry: String) {
        self.entries.lock().push(entry);
    }
}

impl FavoritesDelegate for RequestLog {
    fn favorite_selected(&self, favorite: &Favorite) {
        self.push(format!("open {}", favorite.url));
    }

    fn favorite_edit_requested(&self, favorite: &Favorite) {
        self.push(format!("edit {}", favorite.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_requests_in_order() {
        let log = RequestLog::default();
        let favorite = Favorite::new("Example", "https://example.com");

        log.favorite_selected(&favorite);
        log.favorite_edit_requested(&favorite);

        assert_eq!(
            log.entries(),
            vec![
                "open https://example.com".to_string(),
                format!("edit {}", favorite.id),
            ]
        );
    }
}
