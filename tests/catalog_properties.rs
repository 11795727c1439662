//! Property tests over catalog queries and slug generation.

use folio::catalog::{builtin_projects, Catalog};
use folio::models::{Category, Project, Status};
use folio::services::generate_slug;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn status_strategy() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::all().to_vec())
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::all().to_vec())
}

/// Catalogs of up to 12 records with unique ids and slugs.
fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((status_strategy(), category_strategy(), any::<bool>()), 0..12).prop_map(
        |rows| {
            let template = builtin_projects()[0].clone();
            let projects = rows
                .into_iter()
                .enumerate()
                .map(|(i, (status, category, featured))| Project {
                    id: (i as u32) * 3 + 1,
                    slug: format!("project-{}", i),
                    status,
                    category,
                    featured,
                    ..template.clone()
                })
                .collect();
            Catalog::new(projects).expect("generated catalog is valid")
        },
    )
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn slug_is_idempotent(title in ".{0,40}") {
        let once = generate_slug(&title);
        prop_assert_eq!(generate_slug(&once), once);
    }

    #[test]
    fn slug_uses_url_safe_alphabet(title in "[A-Za-z0-9 !?&'_.-]{0,40}") {
        let slug = generate_slug(&title);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn lookup_by_slug_finds_each_record(catalog in catalog_strategy()) {
        for project in catalog.all_projects() {
            let found = catalog.project_by_slug(&project.slug);
            prop_assert_eq!(found.map(|p| p.id), Some(project.id));
        }
    }

    #[test]
    fn lookup_by_other_strings_finds_nothing(
        catalog in catalog_strategy(),
        slug in prop_oneof![".{0,20}", "project-[0-9]{1,3}", "Project-[0-9]{1,2}"]
    ) {
        prop_assume!(!catalog.project_slugs().contains(&slug.as_str()));
        prop_assert!(catalog.project_by_slug(&slug).is_none());
    }

    #[test]
    fn statuses_partition_the_catalog(catalog in catalog_strategy()) {
        let mut ids: Vec<u32> = Status::all()
            .iter()
            .flat_map(|s| catalog.projects_by_status(*s))
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();

        let all: Vec<u32> = catalog.all_projects().iter().map(|p| p.id).collect();
        prop_assert_eq!(ids, all.clone());

        for status in Status::all() {
            let expected: Vec<u32> = catalog
                .all_projects()
                .iter()
                .filter(|p| p.status == *status)
                .map(|p| p.id)
                .collect();
            let actual: Vec<u32> = catalog.projects_by_status(*status).iter().map(|p| p.id).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn featured_is_the_ordered_subsequence(catalog in catalog_strategy()) {
        let expected: Vec<&Project> = catalog.all_projects().iter().filter(|p| p.featured).collect();
        prop_assert_eq!(catalog.featured_projects(), expected);
        prop_assert_eq!(catalog.featured_projects(), catalog.featured_projects());
    }

    #[test]
    fn next_id_exceeds_every_id(catalog in catalog_strategy()) {
        let next = catalog.next_project_id();
        prop_assert!(catalog.all_projects().iter().all(|p| p.id < next));
    }
}
