//! Document outline (bookmarks) built on top of `lopdf`.

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::RenderError;

/// A heading that should appear in the outline.
#[derive(Clone, Debug, PartialEq)]
pub struct OutlineHeading {
    /// Bookmark title.
    pub title: String,
    /// Zero-based page index the bookmark jumps to.
    pub page: usize,
    /// Top of the heading in PDF user space (points from the bottom edge).
    pub top: f64,
}

struct OutlineEntry {
    object_id: ObjectId,
    page_ref: ObjectId,
    title: String,
    top: f64,
}

/// Adds a flat outline with one entry per heading to `document` and returns
/// the id of the `/Outlines` root, or `None` when there are no headings.
///
/// Each entry gets an `/XYZ` destination pointing at the heading's position.
/// `page_ids` maps zero-based page indices to page objects.  The caller links
/// the returned root from the catalog.
pub fn apply_heading_outline(
    document: &mut Document,
    headings: &[OutlineHeading],
    page_ids: &[ObjectId],
) -> Result<Option<ObjectId>, RenderError> {
    if headings.is_empty() {
        return Ok(None);
    }

    let entries = collect_outline_entries(document, headings, page_ids)?;
    let outlines_id = document.new_object_id();
    link_outline_entries(outlines_id, document, &entries);
    insert_outlines_root(outlines_id, document, &entries);
    Ok(Some(outlines_id))
}

fn collect_outline_entries(
    document: &mut Document,
    headings: &[OutlineHeading],
    page_ids: &[ObjectId],
) -> Result<Vec<OutlineEntry>, RenderError> {
    headings
        .iter()
        .map(|heading| {
            let page_ref = page_ids
                .get(heading.page)
                .copied()
                .ok_or(RenderError::MissingPage(heading.page))?;
            Ok(OutlineEntry {
                object_id: document.new_object_id(),
                page_ref,
                title: heading.title.clone(),
                top: heading.top,
            })
        })
        .collect()
}

fn link_outline_entries(outlines_id: ObjectId, document: &mut Document, entries: &[OutlineEntry]) {
    for index in 0..entries.len() {
        let mut dictionary = Dictionary::new();
        dictionary.set("Title", crate::render::text_string(&entries[index].title));
        dictionary.set(
            "Dest",
            Object::Array(vec![
                Object::Reference(entries[index].page_ref),
                Object::Name(b"XYZ".to_vec()),
                Object::Null,
                Object::Real(entries[index].top as _),
                Object::Null,
            ]),
        );
        dictionary.set("Parent", Object::Reference(outlines_id));

        if index > 0 {
            dictionary.set("Prev", Object::Reference(entries[index - 1].object_id));
        }

        if index + 1 < entries.len() {
            dictionary.set("Next", Object::Reference(entries[index + 1].object_id));
        }

        document
            .objects
            .insert(entries[index].object_id, Object::Dictionary(dictionary));
    }
}

fn insert_outlines_root(outlines_id: ObjectId, document: &mut Document, entries: &[OutlineEntry]) {
    let mut dictionary = Dictionary::new();
    dictionary.set("Type", Object::Name(b"Outlines".to_vec()));
    dictionary.set("Count", Object::Integer(entries.len() as i64));
    if let Some(first) = entries.first() {
        dictionary.set("First", Object::Reference(first.object_id));
    }
    if let Some(last) = entries.last() {
        dictionary.set("Last", Object::Reference(last.object_id));
    }

    document
        .objects
        .insert(outlines_id, Object::Dictionary(dictionary));
}
