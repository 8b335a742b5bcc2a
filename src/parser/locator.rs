//! Field locator for tagged argument text.
//!
//! Each tag is found by its first occurrence in the input. A field's value runs
//! from the end of its tag to the start of the nearest later tag that actually
//! occurs in the input, or to the end of the input. Tags that are not present
//! never act as a boundary.
//!
//! A tag token that appears inside another field's value is treated as that
//! tag; such input is not supported.

use crate::parser::tags::{Field, TagTable};

/// Position of one tag found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TagHit {
    field: Field,
    /// Byte offset of the tag token itself.
    offset: usize,
    /// Byte length of the tag token.
    len: usize,
}

/// Result of locating a set of tags in one input string.
#[derive(Debug, Clone)]
pub struct LocatedFields<'a> {
    input: &'a str,
    /// Present tags, ordered by offset.
    hits: Vec<TagHit>,
}

/// Locate the given tags in `input`.
pub fn locate<'a>(input: &'a str, tags: &TagTable, fields: &[Field]) -> LocatedFields<'a> {
    let mut hits: Vec<TagHit> = fields
        .iter()
        .filter_map(|&field| {
            let token = tags.get(field);
            input.find(token).map(|offset| TagHit {
                field,
                offset,
                len: token.len(),
            })
        })
        .collect();

    hits.sort_by_key(|hit| hit.offset);

    LocatedFields { input, hits }
}

impl<'a> LocatedFields<'a> {
    /// Offset of the tag token for `field`, if present.
    pub fn offset(&self, field: Field) -> Option<usize> {
        self.hit(field).map(|hit| hit.offset)
    }

    /// Whether the tag for `field` occurs in the input.
    pub fn contains(&self, field: Field) -> bool {
        self.hit(field).is_some()
    }

    /// Whether none of the tags occur in the input.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Byte span `(start, end)` of the value for `field`, excluding the tag.
    pub fn span(&self, field: Field) -> Option<(usize, usize)> {
        let index = self.hits.iter().position(|hit| hit.field == field)?;
        let hit = self.hits[index];
        let start = hit.offset + hit.len;
        let end = self
            .hits
            .get(index + 1)
            .map(|next| next.offset)
            .unwrap_or(self.input.len());

        // Overlapping tokens can put the next boundary inside this tag.
        Some((start.min(end), end))
    }

    /// Trimmed value text for `field`, if its tag is present.
    pub fn value(&self, field: Field) -> Option<&'a str> {
        let (start, end) = self.span(field)?;
        Some(self.input.get(start..end).unwrap_or("").trim())
    }

    /// Trimmed text before the first present tag.
    pub fn leading_text(&self) -> &'a str {
        let end = self
            .hits
            .first()
            .map(|hit| hit.offset)
            .unwrap_or(self.input.len());
        self.input[..end].trim()
    }

    fn hit(&self, field: Field) -> Option<&TagHit> {
        self.hits.iter().find(|hit| hit.field == field)
    }
}
