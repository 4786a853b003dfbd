//! Tests for the static datasets

use gridfacts::dataset;

#[test]
fn dependencies_in_display_order() {
    let names: Vec<&str> = dataset::dependencies()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Coal-fired Power",
            "Oil/Diesel Generators (Backup)",
            "Oil-based Grid Plants",
            "Natural Gas Plants",
        ]
    );
}

#[test]
fn dependency_names_are_unique() {
    let deps = dataset::dependencies();
    for (i, a) in deps.iter().enumerate() {
        for b in &deps[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn every_dependency_has_rationale_issues_and_examples() {
    for dep in dataset::dependencies() {
        assert!(!dep.rationale.is_empty());
        assert!(!dep.issues.is_empty());
        assert!(!dep.examples.is_empty());
    }
}

#[test]
fn five_solutions_with_bullets() {
    let solutions = dataset::solutions();
    assert_eq!(solutions.len(), 5);
    for s in solutions {
        assert!(!s.bullets.is_empty());
    }
}

#[test]
fn four_impacts() {
    assert_eq!(dataset::impacts().len(), 4);
}

#[test]
fn blueprint_has_ordered_steps_and_outcome() {
    let blueprint = dataset::blueprint();
    assert_eq!(blueprint.steps.len(), 5);
    assert!(!blueprint.outcome.is_empty());
}

#[test]
fn accessors_return_the_same_static_data() {
    // Constructed once; repeated access hands out the same slice
    assert!(std::ptr::eq(
        dataset::dependencies(),
        dataset::dependencies()
    ));
    assert!(std::ptr::eq(dataset::solutions(), dataset::solutions()));
}
