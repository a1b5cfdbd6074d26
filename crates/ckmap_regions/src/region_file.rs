//! The regions of a single file.
//!
//! A [`RegionFile`] owns its regions for its whole lifetime and edits them in
//! place. Deleting a member from a region can empty it; an emptied region's
//! name is then purged from every other region's `regions` list, which can
//! empty further regions. Regions already empty are never touched again, so
//! each region is emptied at most once and the cascade ends after at most as
//! many rounds as there are regions.

use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ckmap_foundation::{Error, Result};
use ckmap_language::{Document, Limits};
use tempfile::NamedTempFile;

use crate::config::WriterConfig;
use crate::region::Region;
use crate::writer::{to_text, write_regions};

/// Builds one region per root statement of `document`, in order.
///
/// # Errors
/// Returns the first type or schema error; no regions are returned on failure.
pub fn build_regions(document: &Document) -> Result<Vec<Region>> {
    document
        .iter()
        .map(|statement| Region::from_statement(statement).map_err(|e| document.qualify(e)))
        .collect()
}

/// An ordered set of regions with unique names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionFile {
    regions: Vec<Region>,
    /// Region name to position in `regions`. Regions are emptied, never removed.
    index: HashMap<String, usize>,
}

impl RegionFile {
    /// Creates a region file from regions, checking that names are unique.
    ///
    /// # Errors
    /// Returns a schema error if two regions share a name.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        let mut index = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            if index.insert(region.name.clone(), i).is_some() {
                return Err(Error::schema(format!(
                    "duplicate region '{}'",
                    region.name
                )));
            }
        }
        Ok(Self { regions, index })
    }

    /// Builds the regions described by a parsed document.
    ///
    /// # Errors
    /// Returns a type or schema error, qualified with the document's path.
    pub fn from_document(document: &Document) -> Result<Self> {
        let regions = build_regions(document)?;
        let file = Self::new(regions).map_err(|e| document.qualify(e))?;
        tracing::debug!(
            source = document.source().unwrap_or("<memory>"),
            regions = file.len(),
            "built region set"
        );
        Ok(file)
    }

    /// Reads, parses and builds a region file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a load error
    /// qualified with the path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_limits(path, Limits::default())
    }

    /// Reads, parses and builds a region file with explicit parser limits.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a load error
    /// qualified with the path.
    pub fn load_with_limits(path: impl AsRef<Path>, limits: Limits) -> Result<Self> {
        let document = Document::load_with_limits(path, limits)?;
        Self::from_document(&document)
    }

    /// Returns the regions in file order, including emptied ones.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Consumes the file, returning its regions.
    #[must_use]
    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    /// Iterates over the regions in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Looks up a region by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.index.get(name).map(|&i| &self.regions[i])
    }

    /// Returns true if a region with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of regions, including emptied ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if the file holds no regions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the number of regions that would be written.
    #[must_use]
    pub fn non_empty_count(&self) -> usize {
        self.regions.iter().filter(|r| !r.is_empty()).count()
    }

    /// Removes every reference to region `name`, cascading through regions
    /// that become empty.
    ///
    /// Returns the names of the regions this call emptied, in the order they
    /// were emptied.
    pub fn delete_region(&mut self, name: &str) -> Vec<String> {
        let emptied = self.strip(|r| r.regions.retain(|n| n != name));
        tracing::debug!(region = name, emptied = emptied.len(), "deleted region");
        emptied
    }

    /// Removes duchy `title` from every region, cascading through regions
    /// that become empty.
    ///
    /// Returns the names of the regions this call emptied.
    pub fn delete_duchy(&mut self, title: &str) -> Vec<String> {
        let emptied = self.strip(|r| r.duchies.retain(|t| t != title));
        tracing::debug!(duchy = title, emptied = emptied.len(), "deleted duchy");
        emptied
    }

    /// Removes county `title` and, separately, province `province_id` from
    /// every region, cascading through regions that become empty.
    ///
    /// The two removals are independent filters; they are not paired by
    /// position.
    ///
    /// Returns the names of the regions this call emptied.
    pub fn delete_county(&mut self, title: &str, province_id: i64) -> Vec<String> {
        let emptied = self.strip(|r| {
            r.counties.retain(|t| t != title);
            r.provinces.retain(|&id| id != province_id);
        });
        tracing::debug!(
            county = title,
            province = province_id,
            emptied = emptied.len(),
            "deleted county"
        );
        emptied
    }

    /// Applies `remove` to every non-empty region, then purges the names of
    /// the regions it emptied.
    fn strip(&mut self, mut remove: impl FnMut(&mut Region)) -> Vec<String> {
        let mut emptied = Vec::new();
        for region in self.regions.iter_mut().filter(|r| !r.is_empty()) {
            remove(region);
            if region.is_empty() {
                emptied.push(region.name.clone());
            }
        }
        self.cascade(emptied)
    }

    /// Purges each newly emptied region's name from the `regions` lists of
    /// the remaining non-empty regions until nothing new empties.
    fn cascade(&mut self, mut emptied: Vec<String>) -> Vec<String> {
        let mut pending: VecDeque<String> = emptied.iter().cloned().collect();

        while let Some(name) = pending.pop_front() {
            tracing::trace!(region = %name, "purging references to emptied region");
            for region in self.regions.iter_mut().filter(|r| !r.is_empty()) {
                region.regions.retain(|n| *n != name);
                if region.is_empty() {
                    emptied.push(region.name.clone());
                    pending.push_back(region.name.clone());
                }
            }
        }
        emptied
    }

    /// Renders the non-empty regions in the ck2 text format.
    #[must_use]
    pub fn to_text(&self) -> String {
        to_text(&self.regions)
    }

    /// Writes the non-empty regions to `path`.
    ///
    /// # Errors
    /// Returns an I/O error if the destination cannot be created or written.
    /// Without [`WriterConfig::atomic`] a failed write may leave a partial
    /// file behind.
    pub fn write(&self, path: impl AsRef<Path>, config: &WriterConfig) -> Result<()> {
        let path = path.as_ref();
        if config.atomic {
            self.write_atomic(path)?;
        } else {
            self.write_direct(path)?;
        }
        tracing::debug!(
            path = %path.display(),
            regions = self.non_empty_count(),
            atomic = config.atomic,
            "wrote region file"
        );
        Ok(())
    }

    fn write_direct(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| {
            Error::io(format!("could not write to file '{}': {e}", path.display()))
        })?;
        let mut writer = BufWriter::new(file);
        write_regions(&mut writer, &self.regions)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(format!("failed to write file '{}': {e}", path.display())))
    }

    fn write_atomic(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
            Error::io(format!("could not write to file '{}': {e}", path.display()))
        })?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            write_regions(&mut writer, &self.regions)
                .and_then(|()| writer.flush())
                .map_err(|e| {
                    Error::io(format!("failed to write file '{}': {e}", path.display()))
                })?;
        }
        temp.persist(path).map_err(|e| {
            Error::io(format!("failed to replace file '{}': {}", path.display(), e.error))
        })?;
        Ok(())
    }
}

impl std::str::FromStr for RegionFile {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        let document: Document = source.parse()?;
        Self::from_document(&document)
    }
}

impl<'a> IntoIterator for &'a RegionFile {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
