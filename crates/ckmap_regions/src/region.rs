//! Regions.
//!
//! A region is a named grouping that refers to other regions, duchies and
//! counties by name and to provinces by id. References are plain names; they
//! are matched as strings and never followed, so cycles are harmless.

use std::fmt;

use ckmap_foundation::{Error, Result};
use ckmap_language::{Statement, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four member lists of a region, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionField {
    /// `regions = { ... }`
    Regions,
    /// `duchies = { ... }`
    Duchies,
    /// `counties = { ... }`
    Counties,
    /// `provinces = { ... }`
    Provinces,
}

impl RegionField {
    /// All fields, in the order they are written.
    pub const ALL: [Self; 4] = [Self::Regions, Self::Duchies, Self::Counties, Self::Provinces];

    /// Returns the key this field is written under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Regions => "regions",
            Self::Duchies => "duchies",
            Self::Counties => "counties",
            Self::Provinces => "provinces",
        }
    }

    /// Looks up a field by key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for RegionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A named region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Unique name within the owning file.
    pub name: String,
    /// Names of referenced regions.
    pub regions: Vec<String>,
    /// Duchy titles.
    pub duchies: Vec<String>,
    /// County titles.
    pub counties: Vec<String>,
    /// Province ids.
    pub provinces: Vec<i64>,
}

impl Region {
    /// Creates an empty region.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder method to add sub-region references.
    #[must_use]
    pub fn with_regions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.extend(names.into_iter().map(Into::into));
        self
    }

    /// Builder method to add duchies.
    #[must_use]
    pub fn with_duchies<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.duchies.extend(titles.into_iter().map(Into::into));
        self
    }

    /// Builder method to add counties.
    #[must_use]
    pub fn with_counties<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.counties.extend(titles.into_iter().map(Into::into));
        self
    }

    /// Builder method to add provinces.
    #[must_use]
    pub fn with_provinces(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.provinces.extend(ids);
        self
    }

    /// Returns true if all four member lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.duchies.is_empty()
            && self.counties.is_empty()
            && self.provinces.is_empty()
    }

    /// Returns the number of members in `field`.
    #[must_use]
    pub fn field_len(&self, field: RegionField) -> usize {
        match field {
            RegionField::Regions => self.regions.len(),
            RegionField::Duchies => self.duchies.len(),
            RegionField::Counties => self.counties.len(),
            RegionField::Provinces => self.provinces.len(),
        }
    }

    /// Builds a region from a `name = { ... }` statement.
    ///
    /// # Errors
    /// Returns a type mismatch if the name is not a string, the value is not a
    /// block, a field is not a list, or a list element has the wrong kind.
    /// Returns a schema error for a key other than the four region fields.
    ///
    /// Errors inside a field are reported at the line of that field's key,
    /// since list elements carry no position of their own.
    pub fn from_statement(statement: &Statement) -> Result<Self> {
        let name = statement.key_str().map_err(|e| statement.locate(e))?;
        let block = statement.value.as_block().map_err(|e| statement.locate(e))?;

        let mut region = Self::new(name);
        for field_statement in block {
            region
                .read_field(field_statement)
                .map_err(|e| field_statement.locate(e))?;
        }
        Ok(region)
    }

    /// Reads one `<field> = { ... }` statement into this region.
    fn read_field(&mut self, statement: &Statement) -> Result<()> {
        let field = match &statement.key {
            Value::String(key) => RegionField::from_key(key),
            _ => None,
        }
        .ok_or_else(|| {
            Error::schema(format!(
                "unrecognized key '{}' in region '{}'",
                statement.key, self.name
            ))
        })?;

        let items = statement.value.as_list()?;
        match field {
            RegionField::Regions => extend_names(&mut self.regions, items),
            RegionField::Duchies => extend_names(&mut self.duchies, items),
            RegionField::Counties => extend_names(&mut self.counties, items),
            RegionField::Provinces => {
                for item in items {
                    self.provinces.push(item.as_integer()?);
                }
                Ok(())
            }
        }
    }
}

fn extend_names(names: &mut Vec<String>, items: &[Value]) -> Result<()> {
    for item in items {
        names.push(item.as_string()?.to_string());
    }
    Ok(())
}
