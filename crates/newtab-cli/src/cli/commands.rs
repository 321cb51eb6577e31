use std::sync::Arc;

use anyhow::{bail, Context, Result};
use super::args::{Cli, Commands, FavoritesCommand, IntroCommand};
use super::report::{Outcome, Report};
use super::requests::RequestLog;
use newtab_core::config::CoreConfig;
use newtab_core::models::{
    Favorite, FavoritesGridPresenter, FavoritesListModel, FavoritesModel,
    NewTabPageIntroDataStoring, NewTabPageModel,
};
use newtab_core::pixel::{PixelFanout, PixelFiring, SharedPixelStats, TracingPixelFiring};
use newtab_core::store::{FavoritesStorage, PreferencesStorage, StorageError};

/// Run a parsed command line and render its outcome.
pub fn run(cli: &Cli) -> Result<String> {
    let outcome = execute(cli)?;
    if cli.json {
        outcome.to_json()
    } else {
        Ok(outcome.to_text())
    }
}

/// Stores and sinks shared by every command of one invocation.
struct Session {
    pixels: SharedPixelStats,
    requests: Arc<RequestLog>,
    preferences: Arc<PreferencesStorage>,
    favorites: Arc<FavoritesStorage>,
}

impl Session {
    fn open(config: &CoreConfig) -> Self {
        tracing::debug!(data_dir = %config.data_dir.display(), "opening stores");
        Self {
            pixels: SharedPixelStats::new(),
            requests: Arc::new(RequestLog::default()),
            preferences: Arc::new(PreferencesStorage::new(config.preferences_path())),
            favorites: Arc::new(FavoritesStorage::new(config.favorites_path())),
        }
    }

    fn pixel_sink(&self) -> Arc<dyn PixelFiring> {
        Arc::new(PixelFanout::new(vec![
            Arc::new(TracingPixelFiring),
            Arc::new(self.pixels.clone()),
        ]))
    }

    fn intro_model(&self) -> NewTabPageModel {
        NewTabPageModel::new(self.preferences.clone(), self.pixel_sink())
    }

    fn favorites_model(&self) -> FavoritesListModel {
        FavoritesListModel::new(self.favorites.clone(), self.requests.clone(), self.pixel_sink())
    }

    fn intro_report(&self, model: &NewTabPageModel) -> Report {
        Report::Intro {
            visible: model.is_intro_message_visible(),
            stored: self.preferences.prefs().new_tab_page_intro_message_enabled,
            impressions: model.intro_message_impressions(),
        }
    }

    /// Fail if the last write of either store did not reach disk.
    fn ensure_saved(&self) -> Result<()> {
        for err in [self.preferences.last_error(), self.favorites.last_error()]
            .into_iter()
            .flatten()
        {
            if let StorageError::Write { .. } = err {
                return Err(err).context("state was not persisted");
            }
        }
        Ok(())
    }

    fn finish(self, report: Report) -> Result<Outcome> {
        self.ensure_saved()?;
        let pixels = self
            .pixels
            .snapshot()
            .history
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        Ok(Outcome {
            report,
            pixels,
            requests: self.requests.entries(),
        })
    }
}

pub fn execute(cli: &Cli) -> Result<Outcome> {
    let config = cli
        .data_dir
        .as_ref()
        .map(CoreConfig::new)
        .unwrap_or_default();
    let session = Session::open(&config);

    let report = match &cli.command {
        Commands::Intro(command) => run_intro(&session, command),
        Commands::Favorites(command) => run_favorites(&session, command)?,
    };
    session.finish(report)
}

fn run_intro(session: &Session, command: &IntroCommand) -> Report {
    let mut model = session.intro_model();
    match command {
        IntroCommand::Status => {}
        IntroCommand::Displayed { times } => {
            for _ in 0..*times {
                model.intro_message_displayed();
            }
        }
        IntroCommand::Dismiss => model.dismiss_intro_message(),
        IntroCommand::Enable => session.preferences.set_intro_message_enabled(true),
        IntroCommand::Customize => model.customize_new_tab_page(),
    }
    session.intro_report(&model)
}

fn favorite_at(model: &FavoritesListModel, index: usize) -> Result<Favorite> {
    model
        .get(index)
        .cloned()
        .with_context(|| format!("no favorite at index {} ({} favorites)", index, model.len()))
}

fn favorite_report(action: &str, index: usize, favorite: Favorite) -> Report {
    Report::Favorite {
        action: action.to_string(),
        index,
        favorite,
    }
}

fn run_favorites(session: &Session, command: &FavoritesCommand) -> Result<Report> {
    let mut model = session.favorites_model();

    let report = match command {
        FavoritesCommand::List {
            size_class,
            landscape,
        } => {
            let presenter = FavoritesGridPresenter::new((*size_class).into(), *landscape);
            let snapshot = presenter.snapshot(&model);
            Report::Favorites {
                columns: snapshot.columns,
                collapsed: model.is_collapsed(),
                toggle: snapshot.toggle,
                items: snapshot.items,
            }
        }
        FavoritesCommand::Add { title, url } => {
            let favorite = Favorite::new(title.clone(), url.clone());
            model.add_favorite(favorite.clone());
            favorite_report("added", model.len() - 1, favorite)
        }
        FavoritesCommand::Move { from, to } => {
            if *from >= model.len() {
                bail!("cannot move index {} ({} favorites)", from, model.len());
            }
            let favorite = favorite_at(&model, *from)?;
            model.move_favorites(*from, *to);
            let landed = model
                .favorites()
                .iter()
                .position(|f| f.id == favorite.id)
                .unwrap_or(*from);
            favorite_report("moved", landed, favorite)
        }
        FavoritesCommand::Delete { index } => {
            let favorite = favorite_at(&model, *index)?;
            model.delete_favorite(&favorite);
            favorite_report("deleted", *index, favorite)
        }
        FavoritesCommand::Select { index } => {
            let favorite = favorite_at(&model, *index)?;
            model.favorite_selected(&favorite);
            favorite_report("selected", *index, favorite)
        }
        FavoritesCommand::Edit { index } => {
            let favorite = favorite_at(&model, *index)?;
            model.edit_favorite(&favorite);
            favorite_report("edit requested", *index, favorite)
        }
        FavoritesCommand::ToggleCollapse => {
            model.toggle_collapse();
            Report::Collapse {
                collapsed: model.is_collapsed(),
            }
        }
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use newtab_core::models::Chevron;
    use std::path::Path;

    fn exec(dir: &Path, args: &[&str]) -> Result<Outcome> {
        let mut argv = vec!["newtab", "--data-dir", dir.to_str().unwrap()];
        argv.extend_from_slice(args);
        execute(&Cli::try_parse_from(argv).unwrap())
    }

    fn intro_state(outcome: &Outcome) -> (bool, Option<bool>, u32) {
        match outcome.report {
            Report::Intro {
                visible,
                stored,
                impressions,
            } => (visible, stored, impressions),
            ref other => panic!("expected intro report, got {:?}", other),
        }
    }

    #[test]
    fn test_intro_status_defaults_to_hidden() {
        let dir = tempfile::tempdir().unwrap();

        let outcome = exec(dir.path(), &["intro", "status"]).unwrap();

        assert_eq!(intro_state(&outcome), (false, None, 0));
        assert!(outcome.pixels.is_empty());
        assert_eq!(
            outcome.to_text(),
            "intro message: hidden (stored: unset, impressions this page: 0)"
        );
    }

    #[test]
    fn test_intro_impressions_across_invocations() {
        let dir = tempfile::tempdir().unwrap();
        exec(dir.path(), &["intro", "enable"]).unwrap();

        let outcome = exec(dir.path(), &["intro", "displayed", "--times", "3"]).unwrap();
        assert_eq!(intro_state(&outcome), (true, Some(false), 3));
        assert_eq!(outcome.pixels.len(), 3);

        // Next invocation is a new page
        let outcome = exec(dir.path(), &["intro", "status"]).unwrap();
        assert_eq!(intro_state(&outcome), (false, Some(false), 0));
    }

    #[test]
    fn test_intro_dismiss_and_customize_fire_pixels() {
        let dir = tempfile::tempdir().unwrap();
        exec(dir.path(), &["intro", "enable"]).unwrap();

        let outcome = exec(dir.path(), &["intro", "dismiss"]).unwrap();
        assert_eq!(intro_state(&outcome), (false, Some(false), 0));
        assert_eq!(outcome.pixels, ["m_new_tab_page_message_dismissed"]);

        let outcome = exec(dir.path(), &["intro", "customize"]).unwrap();
        assert_eq!(outcome.pixels, ["m_new_tab_page_customize"]);
    }

    #[test]
    fn test_favorites_grid_flow() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..10 {
            let title = format!("Site {i}");
            let url = format!("https://site{i}.example");
            exec(dir.path(), &["favorites", "add", &title, &url]).unwrap();
        }

        let outcome = exec(dir.path(), &["favorites", "list"]).unwrap();
        match &outcome.report {
            Report::Favorites {
                columns,
                collapsed,
                toggle,
                items,
            } => {
                assert_eq!(*columns, 4);
                assert!(*collapsed);
                assert_eq!(*toggle, Some(Chevron::Down));
                assert_eq!(items.len(), 8);
            }
            other => panic!("expected favorites report, got {:?}", other),
        }

        let outcome = exec(
            dir.path(),
            &["favorites", "list", "--size-class", "regular"],
        )
        .unwrap();
        assert!(matches!(outcome.report, Report::Favorites { columns: 6, toggle: None, .. }));

        let outcome = exec(dir.path(), &["favorites", "toggle-collapse"]).unwrap();
        assert_eq!(outcome.report, Report::Collapse { collapsed: false });

        let outcome = exec(dir.path(), &["favorites", "move", "0", "2"]).unwrap();
        match &outcome.report {
            Report::Favorite {
                index, favorite, ..
            } => {
                assert_eq!(*index, 2);
                assert_eq!(favorite.title, "Site 0");
            }
            other => panic!("expected favorite report, got {:?}", other),
        }
    }

    #[test]
    fn test_favorite_select_and_edit_reach_host() {
        let dir = tempfile::tempdir().unwrap();
        exec(dir.path(), &["favorites", "add", "Docs", "https://docs.example"]).unwrap();

        let outcome = exec(dir.path(), &["favorites", "select", "0"]).unwrap();
        assert_eq!(outcome.requests, ["open https://docs.example"]);
        assert_eq!(outcome.pixels, ["m_favorite_launched_ntp"]);

        let outcome = exec(dir.path(), &["favorites", "edit", "0"]).unwrap();
        assert_eq!(outcome.requests.len(), 1);
        assert!(outcome.requests[0].starts_with("edit "));
        assert!(outcome.pixels.is_empty());
    }

    #[test]
    fn test_favorites_bad_index_errors() {
        let dir = tempfile::tempdir().unwrap();

        assert!(exec(dir.path(), &["favorites", "delete", "0"]).is_err());
        assert!(exec(dir.path(), &["favorites", "move", "1", "0"]).is_err());
    }

    #[test]
    fn test_unwritable_data_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the data directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = exec(&blocker, &["intro", "enable"]).unwrap_err();

        assert_eq!(err.to_string(), "state was not persisted");
        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::Write { .. })
        ));
    }

    #[test]
    fn test_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        exec(dir.path(), &["favorites", "add", "A", "https://a.example"]).unwrap();
        exec(dir.path(), &["favorites", "add", "B", "https://b.example"]).unwrap();

        exec(dir.path(), &["favorites", "delete", "0"]).unwrap();

        let outcome = exec(dir.path(), &["favorites", "list"]).unwrap();
        match outcome.report {
            Report::Favorites { items, .. } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].title, "B");
            }
            other => panic!("expected favorites report, got {:?}", other),
        }
    }

    #[test]
    fn test_json_output_is_tagged() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "newtab",
            "--json",
            "--data-dir",
            dir.path().to_str().unwrap(),
            "intro",
            "status",
        ])
        .unwrap();

        let output = run(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["kind"], "intro");
        assert_eq!(value["visible"], false);
        assert!(value["stored"].is_null());
        assert_eq!(value["pixels"], serde_json::json!([]));
    }
}
