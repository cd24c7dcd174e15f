use portfolio_core::db::{open_db, open_db_in_memory};
use portfolio_core::{
    render_tile, submit_assessment_form, Category, FormError, IgnoreReason, Item, ItemInput,
    ItemStore, MutationOutcome, PageSurfaces, PortfolioService, SqliteItemStore, Surfaces,
    EMPTY_CATALOGUE_MARKUP,
};

type Service<'conn> = PortfolioService<SqliteItemStore<'conn>, PageSurfaces>;

fn start(conn: &rusqlite::Connection) -> Service<'_> {
    PortfolioService::start(SqliteItemStore::new(conn), PageSurfaces::standard())
}

fn tile_count(markup: &str) -> usize {
    markup.matches(r#"<li class="tile">"#).count()
}

#[test]
fn add_project_example_splits_highlights_and_catalogue() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);

    let outcome = service.add_project_positional("Demo", Some("https://x.test"), None);
    assert_eq!(
        outcome,
        MutationOutcome::Added {
            category: Category::Projects,
            index: 4
        }
    );

    let defaults = Category::Projects.defaults();
    let highlights = service.surfaces().content("portfolio-projects").unwrap();
    let expected_highlights: String = defaults[..3].iter().map(render_tile).collect();
    assert_eq!(highlights, expected_highlights);
    assert_eq!(tile_count(highlights), 3);
    assert!(highlights.contains("Easy-E (Event Management System)</a>"));
    assert!(highlights.contains("<h3>Project 2</h3>"));
    assert!(highlights.contains("<h3>Project 3</h3>"));

    let catalogue = service.surfaces().content("catalogue-projects").unwrap();
    assert_eq!(
        catalogue,
        format!(
            "{}{}",
            render_tile(&Item::new("Project 4")),
            render_tile(&Item::new("Demo").with_link("https://x.test"))
        )
    );
}

#[test]
fn add_trims_title_and_grows_by_one_for_every_category() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);

    for category in Category::ALL {
        let before = service.portfolio().len(category);
        let outcome = service.add(category, "  Fresh entry  ");
        assert!(outcome.is_applied());
        let items = service.portfolio().items(category);
        assert_eq!(items.len(), before + 1);
        assert_eq!(items[before].title, "Fresh entry");
        assert_eq!(items[before].link, None);
    }
}

#[test]
fn empty_titles_are_ignored_without_persisting() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);

    for category in Category::ALL {
        let before = service.portfolio().items(category).to_vec();
        for title in ["", "   ", "\t\n"] {
            assert_eq!(
                service.add(category, ItemInput::new(title).link("https://x.test")),
                MutationOutcome::Ignored(IgnoreReason::EmptyTitle)
            );
        }
        assert_eq!(service.portfolio().items(category), before.as_slice());
        assert_eq!(
            service.store().try_load(category.storage_key()).unwrap(),
            None
        );
    }
}

#[test]
fn remove_out_of_range_or_unknown_category_is_ignored() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);
    let before = service.portfolio().clone();

    assert_eq!(
        service.remove(Category::Assessments, 3),
        MutationOutcome::Ignored(IgnoreReason::IndexOutOfRange)
    );
    assert_eq!(
        service.remove(Category::Projects, usize::MAX),
        MutationOutcome::Ignored(IgnoreReason::IndexOutOfRange)
    );
    assert_eq!(
        service.remove_by_name("talks", 0),
        MutationOutcome::Ignored(IgnoreReason::UnknownCategory)
    );
    assert_eq!(service.portfolio(), &before);
}

#[test]
fn remove_shifts_later_items_down_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);
    let before = service.portfolio().items(Category::Projects).to_vec();

    let outcome = service.remove_by_name("projects", 1);
    assert_eq!(
        outcome,
        MutationOutcome::Removed {
            category: Category::Projects,
            item: before[1].clone()
        }
    );

    let after = service.portfolio().items(Category::Projects);
    assert_eq!(after.len(), before.len() - 1);
    assert!(!after.contains(&before[1]));
    assert_eq!(after[0], before[0]);
    assert_eq!(&after[1..], &before[2..]);

    let stored = service
        .store()
        .load(Category::Projects.storage_key(), &[]);
    assert_eq!(stored, after.to_vec());

    // Back to three projects: the catalogue shows the placeholder again.
    assert_eq!(
        service.surfaces().content("catalogue-projects"),
        Some(EMPTY_CATALOGUE_MARKUP)
    );
}

#[test]
fn every_mutation_keeps_store_identical_to_memory() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);

    service.add_achievement(ItemInput::new("Scholarship").image("medal.png"));
    service.add_assessment("Midterm");
    service.remove(Category::Achievements, 0);

    for category in Category::ALL {
        assert_eq!(
            service.store().try_load(category.storage_key()).unwrap().as_deref(),
            Some(service.portfolio().items(category))
        );
    }
}

#[test]
fn highlight_plus_catalogue_reconstructs_the_sequence() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);
    for n in 0..5 {
        service.add_assessment(format!("Extra {n}"));
    }

    for category in Category::ALL {
        let items = service.portfolio().items(category);
        let highlights = service
            .surfaces()
            .content(category.highlight_surface())
            .unwrap();
        let catalogue = service
            .surfaces()
            .content(category.catalogue_surface())
            .unwrap();

        assert_eq!(tile_count(highlights), items.len().min(3));
        if items.len() <= 3 {
            assert_eq!(catalogue, EMPTY_CATALOGUE_MARKUP);
        } else {
            assert_eq!(tile_count(catalogue), items.len() - 3);
            let all: String = items.iter().map(render_tile).collect();
            assert_eq!(format!("{highlights}{catalogue}"), all);
        }
    }
}

#[test]
fn render_all_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);
    service.add_project("Second look");

    let first = service.surfaces().clone();
    service.render_all();
    assert_eq!(service.surfaces(), &first);
}

#[test]
fn partial_page_renders_only_present_surfaces() {
    let conn = open_db_in_memory().unwrap();
    let mut service = PortfolioService::start(
        SqliteItemStore::new(&conn),
        PageSurfaces::with_ids(["portfolio-projects"]),
    );
    service.add_achievement("Not shown anywhere");

    let surfaces = service.surfaces();
    assert_eq!(surfaces.ids().collect::<Vec<_>>(), vec!["portfolio-projects"]);
    assert_eq!(tile_count(surfaces.content("portfolio-projects").unwrap()), 3);
}

#[test]
fn restart_reproduces_mutated_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.sqlite3");

    let (expected, expected_markup) = {
        let conn = open_db(&path).unwrap();
        let mut service = start(&conn);
        service.add_project_positional("Demo", Some("https://x.test"), Some("demo.png"));
        service.remove(Category::Achievements, 2);
        (service.portfolio().clone(), service.surfaces().clone())
    };

    let conn = open_db(&path).unwrap();
    let service = start(&conn);
    assert_eq!(service.portfolio(), &expected);
    assert_eq!(service.surfaces(), &expected_markup);
}

#[test]
fn assessment_form_reports_empty_title_and_adds_trimmed_values() {
    let conn = open_db_in_memory().unwrap();
    let mut service = start(&conn);
    let before = service.portfolio().len(Category::Assessments);

    assert_eq!(
        submit_assessment_form(&mut service, "   ", "https://x.test"),
        Err(FormError::EmptyTitle)
    );
    assert_eq!(service.portfolio().len(Category::Assessments), before);

    let feedback = submit_assessment_form(&mut service, " Final exam ", "  ").unwrap();
    assert!(feedback.cleared);
    assert_eq!(feedback.message, "Assessment added.");

    let linked = submit_assessment_form(&mut service, "Lab", " https://lab.test ").unwrap();
    assert!(linked.cleared);

    let items = service.portfolio().items(Category::Assessments);
    assert_eq!(items[before], Item::new("Final exam"));
    assert_eq!(items[before + 1], Item::new("Lab").with_link("https://lab.test"));
}
