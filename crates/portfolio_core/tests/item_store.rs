use portfolio_core::db::{open_db, open_db_in_memory};
use portfolio_core::{Category, Item, ItemStore, Portfolio, RepoError, SqliteItemStore};

#[test]
fn load_missing_key_returns_copy_of_fallback() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);

    let fallback = vec![Item::new("seed")];
    let mut loaded = store.load("portfolio.projects.v1", &fallback);
    loaded.push(Item::new("mutated copy"));

    assert_eq!(fallback, vec![Item::new("seed")]);
    assert_eq!(store.try_load("portfolio.projects.v1").unwrap(), None);
}

#[test]
fn save_then_load_returns_stored_sequence() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);

    let items = vec![
        Item::new("First").with_link("https://a.test"),
        Item::new("Second").with_image("second.png"),
    ];
    store.save("k", &items);
    store.save("k", &items[..1]);

    assert_eq!(store.load("k", &[]), items[..1].to_vec());
}

#[test]
fn non_sequence_value_falls_back() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);

    store.write_value("k", r#"{"title":"not a list"}"#).unwrap();
    let fallback = vec![Item::new("default")];
    assert_eq!(store.load("k", &fallback), fallback);
    assert!(matches!(
        store.try_load("k"),
        Err(RepoError::InvalidData(_))
    ));
}

#[test]
fn corrupt_text_falls_back() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);

    store.write_value("k", "not json at all").unwrap();
    assert_eq!(store.load("k", &[Item::new("d")]), vec![Item::new("d")]);
}

#[test]
fn empty_stored_sequence_is_kept_rather_than_reseeded() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);

    store.save("k", &[]);
    assert!(store.load("k", &[Item::new("d")]).is_empty());
}

#[test]
fn unavailable_storage_is_masked() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);
    conn.execute_batch("DROP TABLE kv_store;").unwrap();

    store.save("k", &[Item::new("lost")]);
    assert!(store.try_save("k", &[Item::new("lost")]).is_err());
    assert_eq!(store.load("k", &[Item::new("d")]), vec![Item::new("d")]);
}

#[test]
fn persist_all_then_load_all_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.sqlite3");

    let mut portfolio = Portfolio::with_defaults();
    portfolio.push(Category::Achievements, Item::new("Olympiad <gold>"));
    portfolio.push(
        Category::Assessments,
        Item::new("Quiz").with_link("https://q.test").with_image("q.png"),
    );
    portfolio.remove(Category::Projects, 1);
    {
        let conn = open_db(&path).unwrap();
        portfolio.persist_all(&SqliteItemStore::new(&conn));
    }

    let conn = open_db(&path).unwrap();
    let reloaded = Portfolio::load_all(&SqliteItemStore::new(&conn));
    assert_eq!(reloaded, portfolio);
}

#[test]
fn load_all_seeds_only_missing_categories() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteItemStore::new(&conn);
    store.save(Category::Projects.storage_key(), &[Item::new("Only project")]);
    store
        .write_value(Category::Assessments.storage_key(), "42")
        .unwrap();

    let portfolio = Portfolio::load_all(&store);
    assert_eq!(
        portfolio.items(Category::Projects),
        &[Item::new("Only project")]
    );
    assert_eq!(
        portfolio.items(Category::Achievements),
        Category::Achievements.defaults().as_slice()
    );
    assert_eq!(
        portfolio.items(Category::Assessments),
        Category::Assessments.defaults().as_slice()
    );
}
