//! Integration tests for cascading deletion

use ckmap_regions::{Region, RegionFile};

fn chain() -> RegionFile {
    RegionFile::new(vec![
        Region::new("R1").with_regions(["R2"]),
        Region::new("R2").with_regions(["R3"]),
        Region::new("R3").with_counties(["C"]),
    ])
    .unwrap()
}

#[test]
fn county_deletion_cascades_up_a_chain() {
    let mut file = chain();
    let emptied = file.delete_county("C", 0);
    assert_eq!(emptied, ["R3", "R2", "R1"]);
    assert!(file.iter().all(Region::is_empty));
}

#[test]
fn each_region_emptied_once() {
    let mut file = RegionFile::new(vec![
        Region::new("top").with_regions(["left", "right"]),
        Region::new("left").with_regions(["leaf"]),
        Region::new("right").with_regions(["leaf"]),
        Region::new("leaf").with_provinces([7]),
    ])
    .unwrap();

    let mut emptied = file.delete_county("c_unused", 7);
    emptied.sort();
    assert_eq!(emptied, ["leaf", "left", "right", "top"]);
}

#[test]
fn absent_target_changes_nothing() {
    let mut file = chain();
    let before = file.clone();
    assert!(file.delete_region("R9").is_empty());
    assert!(file.delete_duchy("d_none").is_empty());
    assert!(file.delete_county("c_none", 12345).is_empty());
    assert_eq!(file, before);
}

#[test]
fn deletion_is_idempotent() {
    let mut file = chain();
    file.delete_county("C", 0);
    let after_first = file.clone();
    assert!(file.delete_county("C", 0).is_empty());
    assert_eq!(file, after_first);
}

#[test]
fn county_and_province_removed_independently() {
    let mut file = RegionFile::new(vec![
        Region::new("a").with_counties(["c_x"]).with_provinces([1]),
        Region::new("b").with_provinces([1, 2]),
    ])
    .unwrap();

    file.delete_county("c_x", 1);
    assert!(file.get("a").unwrap().is_empty());
    assert_eq!(file.get("b").unwrap().provinces, vec![2]);
}

#[test]
fn delete_region_directly() {
    let mut file = RegionFile::new(vec![
        Region::new("parent").with_regions(["child"]),
        Region::new("child").with_provinces([1]),
    ])
    .unwrap();

    assert_eq!(file.delete_region("child"), ["parent"]);
    assert_eq!(file.get("child").unwrap().provinces, vec![1]);
}

#[test]
fn duplicate_references_all_removed() {
    let mut file = RegionFile::new(vec![
        Region::new("a").with_duchies(["d_x", "d_y", "d_x"]),
    ])
    .unwrap();
    file.delete_duchy("d_x");
    assert_eq!(file.get("a").unwrap().duchies, vec!["d_y"]);
}

#[test]
fn self_reference_is_inert() {
    let mut file = RegionFile::new(vec![
        Region::new("loop").with_regions(["loop"]).with_counties(["c_x"]),
    ])
    .unwrap();

    assert!(file.delete_county("c_x", 0).is_empty());
    assert_eq!(file.delete_region("loop"), ["loop"]);
    assert!(file.get("loop").unwrap().is_empty());
}
