//! Catalog Tests
//!
//! Drives the catalog the way the page views do: by applying intents and
//! reading back the store, the visible set and the route.

use cinelist_engine::{Field, MovieForm, ValidationError};
use cinelist_runtime::{
    ActivePage, Catalog, Config, Error, Intent, IntentOutcome, Route, RouteParams, RouteState,
};
use cinelist_types::{MovieId, Rating};
use tempfile::TempDir;

fn catalog() -> Catalog {
    Catalog::with_default_seed().expect("built-in seed is valid")
}

#[test]
fn test_add_then_find_returns_new_record() -> anyhow::Result<()> {
    let mut catalog = catalog();
    let before: Vec<_> = catalog.movies().to_vec();

    let form = MovieForm::new("A", "B").with_rating(Rating::new(3)?);
    let outcome = catalog.apply(Intent::AddMovie(form))?;

    let IntentOutcome::Added(id) = outcome else {
        panic!("expected Added, got {:?}", outcome);
    };
    let added = catalog.find(id).expect("just added");
    assert_eq!(added.title, "A");
    assert_eq!(added.rating.value(), 3);
    assert_eq!(catalog.movies().len(), before.len() + 1);
    assert_eq!(&catalog.movies()[..before.len()], &before[..]);
    assert!(before.iter().all(|m| m.id != id));
    Ok(())
}

#[test]
fn test_rejected_submission_leaves_store_unchanged() {
    let mut catalog = catalog();
    let revision = catalog.store().revision();
    let count = catalog.movies().len();

    let err = catalog
        .apply(Intent::AddMovie(MovieForm::new("", "x")))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(Field::Title))
    ));
    assert_eq!(catalog.movies().len(), count);
    assert_eq!(catalog.store().revision(), revision);
}

#[test]
fn test_consecutive_adds_get_distinct_ids() -> anyhow::Result<()> {
    let mut catalog = catalog();

    let first = catalog.add_movie(&MovieForm::new("One", "First"))?;
    let second = catalog.add_movie(&MovieForm::new("Two", "Second"))?;

    assert_ne!(first, second);
    Ok(())
}

#[test]
fn test_added_movie_is_visible_under_current_filter() -> anyhow::Result<()> {
    let mut catalog = catalog();
    catalog.apply(Intent::SetTitleQuery("heat".to_string()))?;
    assert!(catalog.visible().is_empty());

    catalog.add_movie(&MovieForm::new("Heat", "Cops and robbers."))?;

    let visible = catalog.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Heat");
    Ok(())
}

#[test]
fn test_filter_intents_update_visible_set() -> anyhow::Result<()> {
    let mut catalog = catalog();

    catalog.apply(Intent::SetTitleQuery("THE".to_string()))?;
    catalog.apply(Intent::SetMinRating(Some(Rating::new(5)?)))?;

    let titles: Vec<_> = catalog.visible().iter().map(|m| m.title.clone()).collect();
    assert_eq!(titles, vec!["The Shawshank Redemption", "The Godfather"]);

    catalog.apply(Intent::SetMinRating(None))?;
    assert_eq!(catalog.visible().len(), 3);
    Ok(())
}

#[test]
fn test_clear_filters_shows_everything() -> anyhow::Result<()> {
    let mut catalog = catalog();
    catalog.apply(Intent::SetTitleQuery("zzz".to_string()))?;
    catalog.apply(Intent::SetMinRating(Some(Rating::MAX)))?;
    assert!(catalog.visible().is_empty());

    catalog.apply(Intent::ClearFilters)?;

    assert!(catalog.criteria().is_empty());
    assert_eq!(catalog.visible().len(), catalog.movies().len());
    Ok(())
}

#[test]
fn test_navigate_to_detail_binds_movie() -> anyhow::Result<()> {
    let mut catalog = catalog();

    catalog.apply(Intent::Navigate {
        route: Route::Detail,
        params: RouteParams::movie(MovieId::new(3)),
    })?;

    let Some(ActivePage::Detail { movie_id: Some(id) }) = catalog.active_page() else {
        panic!("expected detail page, got {:?}", catalog.active_page());
    };
    assert_eq!(catalog.find(id).map(|m| m.title.as_str()), Some("The Dark Knight"));
    Ok(())
}

#[test]
fn test_missing_detail_then_go_home_resets_route() -> anyhow::Result<()> {
    let mut catalog = catalog();
    catalog.apply(Intent::Navigate {
        route: Route::Detail,
        params: RouteParams::movie(MovieId::new(999)),
    })?;
    assert!(catalog.find(MovieId::new(999)).is_none());

    catalog.apply(Intent::GoHome)?;

    assert_eq!(catalog.route(), &RouteState::default());
    assert_eq!(catalog.route().route, Route::Home);
    assert!(catalog.route().params.is_empty());
    Ok(())
}

#[test]
fn test_unknown_route_has_no_active_page() -> anyhow::Result<()> {
    let mut catalog = catalog();

    catalog.apply(Intent::Navigate {
        route: Route::parse("reviews"),
        params: RouteParams::none(),
    })?;

    assert_eq!(catalog.active_page(), None);
    Ok(())
}

#[test]
fn test_from_config_uses_seed_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        temp_dir.path().join("movies.toml"),
        "[[movies]]\nid = 40\ntitle = \"Heat\"\ndescription = \"Cops and robbers.\"\nrating = 4\n",
    )?;
    std::fs::write(&config_path, "seed_path = \"movies.toml\"\n")?;

    let config = Config::load_from(&config_path)?;
    let mut catalog = Catalog::from_config(&config, &config_path)?;

    assert_eq!(catalog.movies().len(), 1);
    assert_eq!(catalog.add_movie(&MovieForm::new("A", "B"))?, MovieId::new(41));
    Ok(())
}

#[test]
fn test_seed_file_with_duplicate_ids_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        temp_dir.path().join("movies.toml"),
        "[[movies]]\nid = 1\ntitle = \"A\"\ndescription = \"a\"\nrating = 1\n\n\
         [[movies]]\nid = 1\ntitle = \"B\"\ndescription = \"b\"\nrating = 2\n",
    )?;
    let config = Config {
        seed_path: Some("movies.toml".into()),
        ..Default::default()
    };

    let err = Catalog::from_config(&config, &config_path).unwrap_err();

    assert!(matches!(err, Error::Types(_)));
    Ok(())
}
