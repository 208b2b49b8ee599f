//! Catalogue source parsing
//!
//! The persisted catalogue is a JSON object mapping each color name to
//! an object with red/green/blue fields:
//!
//! ```json
//! {
//!     "air force blue": { "red": 93, "green": 138, "blue": 168 },
//!     "teal": { "red": 0, "green": 98, "blue": 110 }
//! }
//! ```
//!
//! Field names are accepted case-insensitively for the common casings.
//! Document order and duplicate names are passed through to the
//! catalogue constructor verbatim, which applies its own overwrite
//! rules; a plain map deserialization would lose both.

use std::fmt;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use colormatch_core::{Catalogue, Rgb};

use crate::error::{IoError, IoResult};

/// Maximum input size in bytes.
const MAX_INPUT_SIZE: usize = 100_000_000;

/// One color definition as persisted in the catalogue source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ColorDef {
    /// Red channel, 0-255
    #[serde(alias = "Red", alias = "RED")]
    pub red: u8,
    /// Green channel, 0-255
    #[serde(alias = "Green", alias = "GREEN")]
    pub green: u8,
    /// Blue channel, 0-255
    #[serde(alias = "Blue", alias = "BLUE")]
    pub blue: u8,
}

impl From<ColorDef> for Rgb {
    fn from(def: ColorDef) -> Self {
        Rgb::new(def.red, def.green, def.blue)
    }
}

/// The `(name, color)` pairs of the document, in document order and
/// with duplicate names retained.
struct CatalogueDoc(Vec<(String, ColorDef)>);

impl<'de> Deserialize<'de> for CatalogueDoc {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocVisitor;

        impl<'de> Visitor<'de> for DocVisitor {
            type Value = CatalogueDoc;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of color name to red/green/blue channels")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry::<String, ColorDef>()? {
                    pairs.push(pair);
                }
                Ok(CatalogueDoc(pairs))
            }
        }

        deserializer.deserialize_map(DocVisitor)
    }
}

/// Parse a catalogue from a JSON string.
pub fn read_catalogue_from_str(json: &str) -> IoResult<Catalogue> {
    let doc: CatalogueDoc =
        serde_json::from_str(json).map_err(|e| IoError::MalformedCatalogue(e.to_string()))?;
    let catalogue = Catalogue::from_entries(
        doc.0
            .into_iter()
            .map(|(name, def)| (name, Rgb::from(def))),
    )?;
    Ok(catalogue)
}

/// Parse a catalogue from JSON bytes.
pub fn read_catalogue_from_bytes(data: &[u8]) -> IoResult<Catalogue> {
    let text = std::str::from_utf8(data)
        .map_err(|e| IoError::MalformedCatalogue(format!("invalid UTF-8: {e}")))?;
    read_catalogue_from_str(text)
}

/// Parse a catalogue from a reader.
pub fn read_catalogue_from_reader(reader: &mut impl Read) -> IoResult<Catalogue> {
    let buf = read_limited(reader)?;
    read_catalogue_from_bytes(&buf)
}

/// Parse a catalogue from a file.
pub fn read_catalogue_from_file(path: impl AsRef<Path>) -> IoResult<Catalogue> {
    let file = std::fs::File::open(path.as_ref())?;
    read_catalogue_from_reader(&mut BufReader::new(file))
}

/// Read from a reader with a size limit.
fn read_limited(reader: &mut impl Read) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take((MAX_INPUT_SIZE + 1) as u64)
        .read_to_end(&mut buf)?;
    if buf.len() > MAX_INPUT_SIZE {
        return Err(IoError::InputTooLarge {
            limit: MAX_INPUT_SIZE,
        });
    }
    Ok(buf)
}
