use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::warn;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};

use crate::error::LayoutError;
use crate::units::Px;

/// Fixed two-character probe (an ascender and a descender) used to sample a
/// uniform line height, so every line in a layout gets the same height
/// regardless of which characters it happens to contain.
const LINE_HEIGHT_PROBE: &str = "Ay";

/// Glyph-aware measurements for one font identity at one fixed size.
pub trait TextMetrics {
    /// Measure the advance width of `text` as a whole, the way the string
    /// will actually render; implementations must not treat the string as a
    /// bag of independently measured characters.
    fn text_width(&self, text: &str) -> Px;

    /// The uniform height allotted to every line at this font and size.
    fn line_height(&self) -> Px;
}

/// A parsed font face fixed at a specific pixel size. Cheap to clone; the
/// face itself is shared and immutable.
#[derive(Clone)]
pub struct ScaledFont {
    face: Arc<OwnedFace>,
    size: u32,
}

impl ScaledFont {
    pub fn new(face: Arc<OwnedFace>, size: u32) -> ScaledFont {
        ScaledFont { face, size }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    fn scaling(&self) -> f32 {
        self.size as f32 / self.face.as_face_ref().units_per_em() as f32
    }

    fn glyph(&self, ch: char) -> GlyphId {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .unwrap_or(GlyphId(0))
    }
}

impl TextMetrics for ScaledFont {
    fn text_width(&self, text: &str) -> Px {
        let face = self.face.as_face_ref();
        let scaling = self.scaling();

        let mut units: i32 = 0;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let gid = self.glyph(ch);
            units += face.glyph_hor_advance(gid).unwrap_or_default() as i32;
            if let Some(prev) = previous {
                units += kerning(face, prev, gid) as i32;
            }
            previous = Some(gid);
        }

        Px((units as f32 * scaling).round() as i32)
    }

    fn line_height(&self) -> Px {
        let face = self.face.as_face_ref();

        let mut y_min: Option<i16> = None;
        let mut y_max: Option<i16> = None;
        for ch in LINE_HEIGHT_PROBE.chars() {
            if let Some(bbox) = face.glyph_bounding_box(self.glyph(ch)) {
                y_min = Some(y_min.map_or(bbox.y_min, |v| v.min(bbox.y_min)));
                y_max = Some(y_max.map_or(bbox.y_max, |v| v.max(bbox.y_max)));
            }
        }

        let units = match (y_min, y_max) {
            (Some(lo), Some(hi)) => (hi - lo) as i32,
            // the probe has no outlines in this face; fall back to the
            // face's vertical extents
            _ => face.ascender() as i32 - face.descender() as i32,
        };

        Px((units as f32 * self.scaling()).round() as i32)
    }
}

/// Horizontal kerning between two glyphs, in font units, when the face
/// carries a `kern` table.
fn kerning(face: &Face<'_>, left: GlyphId, right: GlyphId) -> i16 {
    let Some(kern) = face.tables().kern else {
        return 0;
    };
    kern.subtables
        .into_iter()
        .filter(|subtable| subtable.horizontal && !subtable.variable)
        .find_map(|subtable| subtable.glyphs_kerning(left, right))
        .unwrap_or(0)
}

/// Source of sized font handles, passed explicitly into every layout entry
/// point rather than living in process-wide state.
pub trait FontProvider {
    type Font: TextMetrics;

    /// Load a font for `family` at `size` pixels.
    fn load(&self, family: &str, size: u32) -> Result<Self::Font, LayoutError>;
}

/// Directory-backed [FontProvider]: `family` resolves to `<dir>/<family>.ttf`.
///
/// Parsed faces are cached per family behind a read-through mutex, so a
/// font-size search that loads the same family hundreds of times parses it
/// once. A default face can be registered to stand in for families that are
/// missing or unreadable; with one registered, loading never aborts a
/// layout.
pub struct FontStore {
    dir: PathBuf,
    default_face: Option<Arc<OwnedFace>>,
    faces: Mutex<HashMap<String, Arc<OwnedFace>>>,
}

impl FontStore {
    pub fn new(dir: impl Into<PathBuf>) -> FontStore {
        FontStore {
            dir: dir.into(),
            default_face: None,
            faces: Mutex::new(HashMap::new()),
        }
    }

    /// Register the face substituted when a family fails to load.
    pub fn with_default_face(mut self, bytes: Vec<u8>) -> Result<FontStore, LayoutError> {
        self.default_face = Some(Arc::new(OwnedFace::from_vec(bytes, 0)?));
        Ok(self)
    }

    fn face_for(&self, family: &str) -> Result<Arc<OwnedFace>, LayoutError> {
        let mut faces = self.faces.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(face) = faces.get(family) {
            return Ok(Arc::clone(face));
        }

        let path = self.dir.join(format!("{family}.ttf"));
        let loaded = std::fs::read(&path)
            .map_err(LayoutError::from)
            .and_then(|bytes| OwnedFace::from_vec(bytes, 0).map_err(LayoutError::from));

        match loaded {
            Ok(face) => {
                let face = Arc::new(face);
                faces.insert(family.to_string(), Arc::clone(&face));
                Ok(face)
            }
            Err(err) => {
                warn!(
                    "failed to load font family {family:?} from {}: {err}; substituting default face",
                    path.display()
                );
                self.default_face
                    .clone()
                    .ok_or_else(|| LayoutError::MissingFont {
                        family: family.to_string(),
                    })
            }
        }
    }
}

impl FontProvider for FontStore {
    type Font = ScaledFont;

    fn load(&self, family: &str, size: u32) -> Result<ScaledFont, LayoutError> {
        Ok(ScaledFont::new(self.face_for(family)?, size))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Fixed-advance metrics: every char is `advance` wide, lines are twice
    /// that tall.
    pub(crate) struct MonoMetrics {
        pub advance: i32,
    }

    impl TextMetrics for MonoMetrics {
        fn text_width(&self, text: &str) -> Px {
            Px(self.advance * text.chars().count() as i32)
        }

        fn line_height(&self) -> Px {
            Px(self.advance * 2)
        }
    }

    /// Size-scaled fixed-advance metrics: advance is half the font size, the
    /// line height is the font size.
    pub(crate) struct SizedMono {
        pub size: u32,
    }

    impl TextMetrics for SizedMono {
        fn text_width(&self, text: &str) -> Px {
            Px((self.size as i32 / 2) * text.chars().count() as i32)
        }

        fn line_height(&self) -> Px {
            Px(self.size as i32)
        }
    }

    /// Provider handing out [SizedMono] for any family.
    pub(crate) struct MonoProvider;

    impl FontProvider for MonoProvider {
        type Font = SizedMono;

        fn load(&self, _family: &str, size: u32) -> Result<SizedMono, LayoutError> {
            Ok(SizedMono { size })
        }
    }
}
