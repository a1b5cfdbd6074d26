//! Integration tests for Layer 2: Map metadata
//!
//! Tests for loading `default.map` from a game directory.

use std::fs;
use std::path::Path;

use ckmap_foundation::ErrorKind;
use ckmap_map::{DefaultMap, ProvinceMap};

const DEFAULT_MAP: &str = r#"# default.map
max_provinces = 1930
definitions = "definition.csv"
provinces = "provinces.bmp"
terrain = "terrain.bmp"
sea_zones = { 1020 1023 }
sea_zones = { 1500 1500 }
major_rivers = { 1800 1801 1802 }
"#;

fn game_dir(default_map: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("map")).unwrap();
    fs::write(dir.path().join("map").join("default.map"), default_map).unwrap();
    dir
}

#[test]
fn load_from_game_directory() {
    let root = game_dir(DEFAULT_MAP);
    let map = DefaultMap::load(root.path()).unwrap();

    assert_eq!(map.max_province_id(), 1929);
    let map_dir = root.path().join("map");
    assert_eq!(
        map.definitions_path(),
        Some(map_dir.join("definition.csv").as_path())
    );
    assert_eq!(
        map.provinces_path(),
        Some(map_dir.join("provinces.bmp").as_path())
    );
}

#[test]
fn province_predicates() {
    let root = game_dir(DEFAULT_MAP);
    let map = DefaultMap::load(root.path()).unwrap();

    assert!(map.id_is_valid(1));
    assert!(!map.id_is_valid(1930));
    assert!(map.id_is_seazone(1021));
    assert!(map.id_is_seazone(1500));
    assert!(!map.id_is_seazone(1501));
    assert!(map.id_is_major_river(1801));
    assert!(!map.id_is_major_river(1803));
}

#[test]
fn predicates_through_trait_object() {
    let root = game_dir(DEFAULT_MAP);
    let map = DefaultMap::load(root.path()).unwrap();
    let provinces: &dyn ProvinceMap = &map;
    assert_eq!(provinces.max_province_id(), 1929);
    assert!(provinces.id_is_seazone(1020));
}

#[test]
fn missing_file_is_io_error() {
    let root = tempfile::tempdir().unwrap();
    let err = DefaultMap::load(root.path()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(!err.is_load_error());
}

#[test]
fn errors_name_the_file() {
    let root = game_dir("max_provinces = 100\nsea_zones = { 0 4 }\n");
    let err = DefaultMap::load(root.path()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Schema(_)));
    let context = err.context.unwrap();
    assert!(context.source.unwrap().ends_with("default.map"));
    assert_eq!(context.line, Some(2));
}

#[test]
fn unparsable_file_is_load_error() {
    let root = game_dir("max_provinces = { 100\n");
    let err = DefaultMap::load(root.path()).unwrap_err();
    assert!(err.is_load_error());
    assert!(Path::new(&err.context.unwrap().source.unwrap()).ends_with("map/default.map"));
}
