//! lopdf-backed glyph source.
//!
//! A deliberately slim reader of PDF text operators: it resolves page
//! content streams and font resources through `lopdf`, then walks the
//! text-positioning and text-showing operators with a minimal cursor.
//! Horizontal advances use a fixed per-glyph estimate rather than real
//! font metrics; structure inference downstream needs glyph ordering and
//! line membership, never exact widths. Anything beyond that (CID fonts,
//! ToUnicode maps, rotation, full CTM tracking) belongs to a
//! higher-fidelity [`GlyphSource`](crate::GlyphSource) implementation.

use std::collections::HashMap;

use lopdf::content::Content;
use lopdf::{Object, ObjectId};
use tracing::{debug, warn};

use pdfmd_core::GlyphRecord;

use crate::backend::GlyphSource;
use crate::error::ExtractError;

/// Estimated glyph advance as a fraction of the font size.
const GLYPH_ADVANCE_EM: f64 = 0.5;
/// Estimated advance for a space glyph.
const SPACE_ADVANCE_EM: f64 = 0.28;
/// Size assumed for advance estimation when no `Tf` has been seen.
const FALLBACK_ADVANCE_SIZE: f64 = 12.0;

/// Glyph source backed by a parsed `lopdf` document.
pub struct LopdfSource {
    doc: lopdf::Document,
    pages: Vec<PageRef>,
}

struct PageRef {
    object_id: ObjectId,
    height: f64,
}

impl LopdfSource {
    /// Parse PDF bytes into a glyph source.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Parse`] for malformed bytes or encrypted
    /// documents (password handling is outside this backend's scope).
    pub fn open(bytes: &[u8]) -> Result<Self, ExtractError> {
        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(ExtractError::Parse(
                "document is encrypted; decrypt it before conversion".to_string(),
            ));
        }

        // get_pages returns a BTreeMap with 1-based keys in page order.
        let mut pages = Vec::new();
        for object_id in doc.get_pages().values().copied() {
            let height = page_height(&doc, object_id)?;
            pages.push(PageRef { object_id, height });
        }

        Ok(Self { doc, pages })
    }
}

impl GlyphSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_glyphs(&self, index: usize) -> Result<Vec<GlyphRecord>, ExtractError> {
        let page = self.pages.get(index).ok_or_else(|| ExtractError::Page {
            page: index,
            detail: format!("index out of range (0..{})", self.pages.len()),
        })?;

        let content_bytes = page_content_bytes(&self.doc, page.object_id).map_err(|detail| {
            ExtractError::Page {
                page: index,
                detail,
            }
        })?;
        if content_bytes.is_empty() {
            return Ok(Vec::new());
        }

        let content = Content::decode(&content_bytes).map_err(|e| ExtractError::Page {
            page: index,
            detail: format!("failed to decode content stream: {e}"),
        })?;

        let fonts = page_fonts(&self.doc, page.object_id);
        let mut walker = TextWalker::new(index, page.height, fonts);
        for operation in &content.operations {
            walker.apply(&operation.operator, &operation.operands);
        }

        debug!(page = index, glyphs = walker.glyphs.len(), "extracted page glyphs");
        Ok(walker.glyphs)
    }
}

/// Minimal text-object cursor over the operators that place and show text.
///
/// Positions assume unscaled text matrices (translation only); a scaled
/// `Tm` still contributes its magnitude to the effective font size so
/// heading inference sees the rendered size.
struct TextWalker {
    page: usize,
    page_height: f64,
    fonts: HashMap<String, String>,
    glyphs: Vec<GlyphRecord>,
    fontname: String,
    size: Option<f64>,
    scale: f64,
    x: f64,
    y: f64,
    line_x: f64,
    line_y: f64,
    leading: f64,
}

impl TextWalker {
    fn new(page: usize, page_height: f64, fonts: HashMap<String, String>) -> Self {
        Self {
            page,
            page_height,
            fonts,
            glyphs: Vec::new(),
            fontname: String::new(),
            size: None,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            line_x: 0.0,
            line_y: 0.0,
            leading: 0.0,
        }
    }

    fn apply(&mut self, operator: &str, operands: &[Object]) {
        match operator {
            "BT" => {
                self.x = 0.0;
                self.y = 0.0;
                self.line_x = 0.0;
                self.line_y = 0.0;
                self.scale = 1.0;
            }
            "Tf" => {
                if let [name_obj, size_obj] = operands {
                    if let Ok(name) = name_obj.as_name() {
                        let resource = String::from_utf8_lossy(name);
                        self.fontname = match self.fonts.get(resource.as_ref()) {
                            Some(base) => base.clone(),
                            None => {
                                warn!(page = self.page, resource = %resource, "font resource not found");
                                resource.into_owned()
                            }
                        };
                    }
                    self.size = number(size_obj);
                }
            }
            "Td" => {
                if let [tx, ty] = operands {
                    self.translate_line(number(tx), number(ty));
                }
            }
            "TD" => {
                if let [tx, ty] = operands {
                    if let Some(ty) = number(ty) {
                        self.leading = -ty;
                    }
                    self.translate_line(number(tx), number(ty));
                }
            }
            "Tm" => {
                if let [_a, b, _c, d, e, f] = operands {
                    let (sb, sd) = (number(b).unwrap_or(0.0), number(d).unwrap_or(1.0));
                    self.scale = sb.hypot(sd);
                    self.line_x = number(e).unwrap_or(0.0);
                    self.line_y = number(f).unwrap_or(0.0);
                    self.x = self.line_x;
                    self.y = self.line_y;
                }
            }
            "TL" => {
                if let [l] = operands {
                    if let Some(l) = number(l) {
                        self.leading = l;
                    }
                }
            }
            "T*" => self.next_line(),
            "Tj" => {
                if let [text] = operands {
                    self.show(text);
                }
            }
            "'" => {
                self.next_line();
                if let [text] = operands {
                    self.show(text);
                }
            }
            "\"" => {
                self.next_line();
                if let [_aw, _ac, text] = operands {
                    self.show(text);
                }
            }
            "TJ" => {
                if let [Object::Array(elements)] = operands {
                    for element in elements {
                        match element {
                            Object::String(_, _) => self.show(element),
                            other => {
                                if let Some(adjust) = number(other) {
                                    self.x -= adjust / 1000.0 * self.advance_size();
                                }
                            }
                        }
                    }
                }
            }
            // Painting, color, and graphics-state operators carry no text.
            _ => {}
        }
    }

    fn translate_line(&mut self, tx: Option<f64>, ty: Option<f64>) {
        self.line_x += tx.unwrap_or(0.0);
        self.line_y += ty.unwrap_or(0.0);
        self.x = self.line_x;
        self.y = self.line_y;
    }

    fn next_line(&mut self) {
        self.line_y -= self.leading;
        self.x = self.line_x;
        self.y = self.line_y;
    }

    fn advance_size(&self) -> f64 {
        self.size.unwrap_or(FALLBACK_ADVANCE_SIZE) * self.scale
    }

    fn show(&mut self, text: &Object) {
        let Object::String(bytes, _) = text else {
            return;
        };
        let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);

        let effective_size = self.size.map(|s| s * self.scale);
        for ch in decoded.chars() {
            if ch == '\u{0}' {
                continue;
            }
            self.glyphs.push(GlyphRecord {
                text: ch.to_string(),
                page: self.page,
                x0: self.x,
                top: self.page_height - self.y,
                fontname: self.fontname.clone(),
                size: effective_size,
            });
            let em = if ch == ' ' {
                SPACE_ADVANCE_EM
            } else {
                GLYPH_ADVANCE_EM
            };
            self.x += em * self.advance_size();
        }
    }
}

fn number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

/// Walk `/Parent` links to find an inherited page attribute.
fn resolve_inherited<'a>(
    doc: &'a lopdf::Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>, String> {
    let mut current_id = page_id;
    loop {
        let dict = doc
            .get_object(current_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| format!("failed to get page dictionary: {e}"))?;

        if let Ok(value) = dict.get(key) {
            return Ok(Some(value));
        }

        match dict.get(b"Parent") {
            Ok(parent) => {
                current_id = parent
                    .as_reference()
                    .map_err(|e| format!("invalid /Parent reference: {e}"))?;
            }
            Err(_) => return Ok(None),
        }
    }
}

fn page_height(doc: &lopdf::Document, page_id: ObjectId) -> Result<f64, ExtractError> {
    let media_box = resolve_inherited(doc, page_id, b"MediaBox")
        .map_err(ExtractError::Parse)?
        .ok_or_else(|| ExtractError::Parse("MediaBox not found on page or ancestors".into()))?;
    let media_box = match media_box {
        Object::Reference(id) => doc
            .get_object(*id)
            .map_err(|e| ExtractError::Parse(format!("failed to resolve MediaBox: {e}")))?,
        other => other,
    };
    let array = media_box
        .as_array()
        .map_err(|e| ExtractError::Parse(format!("MediaBox is not an array: {e}")))?;
    if array.len() != 4 {
        return Err(ExtractError::Parse(format!(
            "MediaBox has {} elements, expected 4",
            array.len()
        )));
    }
    let y0 = number(&array[1])
        .ok_or_else(|| ExtractError::Parse("MediaBox contains a non-number".into()))?;
    let y1 = number(&array[3])
        .ok_or_else(|| ExtractError::Parse("MediaBox contains a non-number".into()))?;
    Ok((y1 - y0).abs())
}

/// Concatenated, decompressed `/Contents` bytes, or empty for a page
/// without content.
fn page_content_bytes(doc: &lopdf::Document, page_id: ObjectId) -> Result<Vec<u8>, String> {
    let page_dict = doc
        .get_object(page_id)
        .and_then(|o| o.as_dict())
        .map_err(|e| format!("failed to get page dictionary: {e}"))?;

    let contents = match page_dict.get(b"Contents") {
        Ok(obj) => obj,
        Err(_) => return Ok(Vec::new()),
    };

    match contents {
        Object::Reference(id) => {
            let stream = doc
                .get_object(*id)
                .and_then(|o| o.as_stream())
                .map_err(|e| format!("/Contents is not a stream: {e}"))?;
            decode_stream(stream)
        }
        Object::Array(items) => {
            let mut bytes = Vec::new();
            for item in items {
                let id = item
                    .as_reference()
                    .map_err(|e| format!("/Contents array item is not a reference: {e}"))?;
                let stream = doc
                    .get_object(id)
                    .and_then(|o| o.as_stream())
                    .map_err(|e| format!("/Contents array item is not a stream: {e}"))?;
                if !bytes.is_empty() {
                    bytes.push(b' ');
                }
                bytes.extend_from_slice(&decode_stream(stream)?);
            }
            Ok(bytes)
        }
        _ => Err("/Contents is not a reference or array".to_string()),
    }
}

fn decode_stream(stream: &lopdf::Stream) -> Result<Vec<u8>, String> {
    if stream.dict.get(b"Filter").is_ok() {
        stream
            .decompressed_content()
            .map_err(|e| format!("failed to decompress content stream: {e}"))
    } else {
        Ok(stream.content.clone())
    }
}

/// Map font resource names (`F1`, ...) to their `/BaseFont` names.
fn page_fonts(doc: &lopdf::Document, page_id: ObjectId) -> HashMap<String, String> {
    let mut fonts = HashMap::new();

    let Ok(Some(resources)) = resolve_inherited(doc, page_id, b"Resources") else {
        return fonts;
    };
    let resources = match resources {
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(obj) => obj,
            Err(_) => return fonts,
        },
        other => other,
    };
    let Ok(resources) = resources.as_dict() else {
        return fonts;
    };
    let Ok(font_dict) = resources.get(b"Font") else {
        return fonts;
    };
    let font_dict = match font_dict {
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(obj) => obj,
            Err(_) => return fonts,
        },
        other => other,
    };
    let Ok(font_dict) = font_dict.as_dict() else {
        return fonts;
    };

    for (name, value) in font_dict.iter() {
        let font = match value {
            Object::Reference(id) => match doc.get_object(*id) {
                Ok(obj) => obj,
                Err(_) => continue,
            },
            other => other,
        };
        if let Ok(font) = font.as_dict() {
            if let Ok(base) = font.get(b"BaseFont").and_then(|o| o.as_name()) {
                fonts.insert(
                    String::from_utf8_lossy(name).into_owned(),
                    String::from_utf8_lossy(base).into_owned(),
                );
            }
        }
    }
    fonts
}
