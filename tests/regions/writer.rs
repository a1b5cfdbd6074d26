//! Integration tests for the region writer

use std::fs;

use ckmap_foundation::ErrorKind;
use ckmap_regions::{HEADER, Region, RegionFile, WriterConfig, write_regions};

fn sample() -> RegionFile {
    RegionFile::new(vec![
        Region::new("world_x")
            .with_regions(["world_y"])
            .with_provinces([4]),
        Region::new("world_y").with_counties(["c_a", "c_b"]),
        Region::new("world_z"),
    ])
    .unwrap()
}

#[test]
fn output_layout() {
    let text = sample().to_text();
    let expected = "# -*- ck2 -*-\n\
        \n\
        world_x = {\n\
        \tregions = {\n\
        \t\tworld_y\n\
        \t}\n\
        \tprovinces = {\n\
        \t\t4\n\
        \t}\n\
        }\n\
        world_y = {\n\
        \tcounties = {\n\
        \t\tc_a\n\
        \t\tc_b\n\
        \t}\n\
        }\n";
    assert_eq!(text, expected);
    assert!(text.starts_with(HEADER));
}

#[test]
fn write_into_any_writer() {
    let mut buf = Vec::new();
    write_regions(&mut buf, sample().regions()).unwrap();
    assert!(!buf.contains(&b'\r'));
    assert_eq!(String::from_utf8(buf).unwrap(), sample().to_text());
}

#[test]
fn write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    sample().write(&path, &WriterConfig::default()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), sample().to_text());
}

#[test]
fn atomic_write_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "old contents").unwrap();

    sample().write(&path, &WriterConfig::atomic()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), sample().to_text());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let err = sample().write(&path, &WriterConfig::default()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    let err = sample().write(&path, &WriterConfig::atomic()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
