// Host-side tests for the static portfolio catalog.

use orbit_core::catalog::{all_projects, get_project_by_slug, CategoryId, CATEGORIES};
use std::collections::HashSet;

#[test]
fn tag_tracks_resolves_to_design_project() {
    let found = get_project_by_slug("tag-tracks").expect("tag-tracks should exist");
    assert_eq!(found.project.name, "Tag Tracks: Toy Design");
    assert_eq!(found.category.id, CategoryId::Design);
    assert_eq!(found.category.title, "DESIGN");
    assert_eq!(found.project.subtitle, Some("Moose Toys Sponsored"));
}

#[test]
fn unknown_slug_is_none() {
    assert!(get_project_by_slug("no-such-project").is_none());
    assert!(get_project_by_slug("").is_none());
    assert!(get_project_by_slug("TAG-TRACKS").is_none());
}

#[test]
fn slugs_are_unique_and_all_resolvable() {
    let mut seen = HashSet::new();
    for p in all_projects() {
        assert!(seen.insert(p.project.slug), "duplicate slug {}", p.project.slug);
        let found = get_project_by_slug(p.project.slug).unwrap();
        assert_eq!(found.project.name, p.project.name);
        assert_eq!(found.category.id, p.category.id);
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn categories_are_in_orbit_order_with_colors() {
    let ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
    assert_eq!(ids, CategoryId::ALL.to_vec());
    for (i, c) in CATEGORIES.iter().enumerate() {
        assert_eq!(c.id.index(), i);
        assert!(c.color.starts_with('#') && c.color.len() == 7);
        assert!(!c.projects.is_empty());
    }
    assert_eq!(CategoryId::Tech.category().title, "TECHNOLOGY");
}

#[test]
fn project_order_is_preserved() {
    let tech = CategoryId::Tech.category();
    assert_eq!(tech.projects[0].slug, "ai-disaster-response");
    assert_eq!(tech.projects[1].slug, "cs2-market-visualization");
    assert_eq!(tech.projects[0].process.len(), 6);
}
