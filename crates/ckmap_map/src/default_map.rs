//! The `map/default.map` file.
//!
//! `default.map` names the other map files and classifies province ids:
//!
//! ```text
//! max_provinces = 1500          # ids run from 1 to 1499
//! definitions = "definition.csv"
//! provinces = "provinces.bmp"
//! sea_zones = { 950 1020 }      # inclusive id range, may repeat
//! major_rivers = { 1400 1401 }
//! ```
//!
//! Keys not listed above are ignored.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use ckmap_foundation::{Error, Result};
use ckmap_language::{Document, Statement, Value};

/// Province-id predicates supplied by map metadata.
pub trait ProvinceMap {
    /// Returns the largest valid province id.
    fn max_province_id(&self) -> i64;

    /// Returns true if `id` is a sea zone. Always false for invalid ids.
    fn id_is_seazone(&self, id: i64) -> bool;

    /// Returns true if `id` is in `1..=max_province_id()`.
    fn id_is_valid(&self, id: i64) -> bool {
        id > 0 && id <= self.max_province_id()
    }
}

/// Parsed contents of `map/default.map`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultMap {
    max_province_id: i64,
    definitions_path: Option<PathBuf>,
    provinces_path: Option<PathBuf>,
    sea_zones: Vec<RangeInclusive<i64>>,
    major_rivers: BTreeSet<i64>,
}

impl DefaultMap {
    /// Loads `<root>/map/default.map`, resolving file names under `<root>/map`.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a load error
    /// qualified with its path.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let map_dir = root.as_ref().join("map");
        let document = Document::load(map_dir.join("default.map"))?;
        let map = Self::from_document(&document, &map_dir).map_err(|e| document.qualify(e))?;
        tracing::debug!(
            max_province_id = map.max_province_id,
            sea_zones = map.sea_zones.len(),
            major_rivers = map.major_rivers.len(),
            "loaded default map"
        );
        Ok(map)
    }

    /// Reads the recognized keys of a parsed `default.map`.
    ///
    /// # Errors
    /// Returns a type mismatch for a value of the wrong shape, or a schema
    /// error if `max_provinces` is missing or a value is out of range.
    pub fn from_document(document: &Document, map_dir: &Path) -> Result<Self> {
        let mut max_provinces = None;
        let mut map = Self {
            max_province_id: 0,
            definitions_path: None,
            provinces_path: None,
            sea_zones: Vec::new(),
            major_rivers: BTreeSet::new(),
        };

        for statement in document {
            map.read_statement(statement, map_dir, &mut max_provinces)
                .map_err(|e| statement.locate(e))?;
        }

        let max_provinces =
            max_provinces.ok_or_else(|| Error::schema("default.map does not set max_provinces"))?;
        map.max_province_id = max_provinces - 1;
        Ok(map)
    }

    fn read_statement(
        &mut self,
        statement: &Statement,
        map_dir: &Path,
        max_provinces: &mut Option<i64>,
    ) -> Result<()> {
        if statement.key_eq("max_provinces") {
            let n = statement.value.as_integer()?;
            if n <= 1 {
                return Err(Error::schema(format!("max_provinces must exceed 1, got {n}")));
            }
            *max_provinces = Some(n);
        } else if statement.key_eq("definitions") {
            self.definitions_path = Some(map_dir.join(statement.value.as_string()?));
        } else if statement.key_eq("provinces") {
            self.provinces_path = Some(map_dir.join(statement.value.as_string()?));
        } else if statement.key_eq("sea_zones") {
            let bounds = positive_ids(statement.value.as_list()?)?;
            let [lo, hi] = bounds[..] else {
                return Err(Error::schema(format!(
                    "sea_zones needs exactly 2 ids, got {}",
                    bounds.len()
                )));
            };
            self.sea_zones.push(lo..=hi);
        } else if statement.key_eq("major_rivers") {
            self.major_rivers
                .extend(positive_ids(statement.value.as_list()?)?);
        }
        Ok(())
    }

    /// Returns the path of the province definitions table, if set.
    #[must_use]
    pub fn definitions_path(&self) -> Option<&Path> {
        self.definitions_path.as_deref()
    }

    /// Returns the path of the province bitmap, if set.
    #[must_use]
    pub fn provinces_path(&self) -> Option<&Path> {
        self.provinces_path.as_deref()
    }

    /// Returns the sea-zone id ranges in file order.
    #[must_use]
    pub fn sea_zones(&self) -> &[RangeInclusive<i64>] {
        &self.sea_zones
    }

    /// Returns true if `id` is listed as a major river.
    #[must_use]
    pub fn id_is_major_river(&self, id: i64) -> bool {
        self.major_rivers.contains(&id)
    }
}

impl ProvinceMap for DefaultMap {
    fn max_province_id(&self) -> i64 {
        self.max_province_id
    }

    fn id_is_seazone(&self, id: i64) -> bool {
        self.id_is_valid(id) && self.sea_zones.iter().any(|range| range.contains(&id))
    }
}

fn positive_ids(items: &[Value]) -> Result<Vec<i64>> {
    items
        .iter()
        .map(|item| {
            let id = item.as_integer()?;
            if id > 0 {
                Ok(id)
            } else {
                Err(Error::schema(format!("province id must be positive, got {id}")))
            }
        })
        .collect()
}
