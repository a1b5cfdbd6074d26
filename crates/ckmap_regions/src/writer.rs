//! Region file writer.
//!
//! Output is a fixed header, a blank line, then one block per non-empty
//! region. Each non-empty field becomes a nested block listing one member per
//! line. Lines always end in `\n`.
//!
//! Names that would not read back as a single bare word (empty, containing
//! whitespace or punctuation, or integer-like) are written quoted. A name
//! containing `"` or a newline cannot be represented at all; the loader
//! never produces one.

use std::fmt::{self, Display};
use std::io::{self, Write};

use ckmap_language::is_bare_word;

use crate::region::{Region, RegionField};

/// First line of every written region file.
pub const HEADER: &str = "# -*- ck2 -*-";

/// Writes `regions` in order, skipping empty ones.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_regions<W: Write>(out: &mut W, regions: &[Region]) -> io::Result<()> {
    write!(out, "{}", RegionText(regions))
}

/// Renders `regions` to a string.
#[must_use]
pub fn to_text(regions: &[Region]) -> String {
    RegionText(regions).to_string()
}

/// The text form of a region sequence.
struct RegionText<'a>(&'a [Region]);

impl Display for RegionText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}\n")?;

        for region in self.0.iter().filter(|r| !r.is_empty()) {
            writeln!(f, "{} = {{", Name(&region.name))?;
            for field in RegionField::ALL {
                match field {
                    RegionField::Regions => write_names(f, field, &region.regions)?,
                    RegionField::Duchies => write_names(f, field, &region.duchies)?,
                    RegionField::Counties => write_names(f, field, &region.counties)?,
                    RegionField::Provinces => write_field(f, field, &region.provinces)?,
                }
            }
            f.write_str("}\n")?;
        }
        Ok(())
    }
}

/// A name, quoted when a bare word would not read back unchanged.
struct Name<'a>(&'a str);

impl Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_bare_word(self.0) {
            f.write_str(self.0)
        } else {
            write!(f, "\"{}\"", self.0)
        }
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, field: RegionField, names: &[String]) -> fmt::Result {
    let names: Vec<Name<'_>> = names.iter().map(|n| Name(n.as_str())).collect();
    write_field(f, field, &names)
}

fn write_field<T: Display>(
    f: &mut fmt::Formatter<'_>,
    field: RegionField,
    members: &[T],
) -> fmt::Result {
    if members.is_empty() {
        return Ok(());
    }
    writeln!(f, "\t{field} = {{")?;
    for member in members {
        writeln!(f, "\t\t{member}")?;
    }
    f.write_str("\t}\n")
}
