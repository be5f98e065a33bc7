//! # Legacy XML Parser
//!
//! Reads the old tab format:
//!
//! ```xml
//! <Tabs>
//!   <Tab>
//!     <title>Braham - Rally Point</title>
//!     <tab>1 2 3 (4 5)</tab>
//!   </Tab>
//! </Tabs>
//! ```
//!
//! The format carries no ids or categories. Every record gets a fresh id and
//! the `Legacy Import` category; the title is split into artist and song on
//! the first `" - "`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, Utc};
use quick_xml::{events::Event, Reader};

use super::ParsedBatch;
use crate::{
    constants::{
        LEGACY_BODY_ELEMENT, LEGACY_CATEGORY, LEGACY_TAB_ELEMENT, LEGACY_TITLE_ELEMENT,
        LEGACY_TITLE_SEPARATOR, UNKNOWN_ARTIST,
    },
    entry::{Entry, EntryFields},
    error::{Result, TomeError},
    id,
};

/// Raw text collected from one `<Tab>` element.
#[derive(Debug, Default)]
struct RawTab {
    title: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Body,
}

/// Text being collected for one field of the current `<Tab>`.
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

/// Parses a legacy document into candidate entries.
///
/// `batch` is the time of the import and seeds the synthesized ids;
/// `is_taken` reports ids already used by the store.
///
/// Fails with [`TomeError::Format`] if the document is not well-formed XML.
pub fn parse<F>(text: &str, batch: DateTime<Utc>, is_taken: F) -> Result<ParsedBatch>
where
    F: Fn(&str) -> bool,
{
    let raw_tabs = read_tabs(text)?;

    let mut parsed = ParsedBatch::default();
    for (index, raw) in raw_tabs.into_iter().enumerate() {
        let (Some(title), Some(body)) = (raw.title, raw.body) else {
            log::debug!("skipping legacy tab #{index}: missing title or tab");
            parsed.malformed += 1;
            continue;
        };

        let title = title.trim();
        let body = body.trim();
        if title.is_empty() || body.is_empty() {
            log::debug!("skipping legacy tab #{index}: empty title or tab");
            parsed.malformed += 1;
            continue;
        }

        let (artist, song) = split_title(title);
        let id = id::legacy(batch, index, &is_taken);
        parsed.candidates.push(Entry::new(
            id,
            EntryFields {
                artist,
                song,
                category: LEGACY_CATEGORY.to_string(),
                content: body.to_string(),
            },
        ));
    }

    Ok(parsed)
}

/// Splits a trimmed legacy title into `(artist, song)`.
///
/// Splits on the first `" - "` only, so songs that contain the separator
/// stay intact. The artist side is trimmed and the song is the rest of the
/// title as written. Without a separator the artist is `Unknown Artist` and
/// the song is the whole title.
pub fn split_title(title: &str) -> (String, String) {
    match title.split_once(LEGACY_TITLE_SEPARATOR) {
        Some((artist, song)) => (artist.trim().to_string(), song.to_string()),
        None => (UNKNOWN_ARTIST.to_string(), title.to_string()),
    }
}

fn format_error(reader: &Reader<&[u8]>, err: &quick_xml::Error) -> TomeError {
    TomeError::Format(format!(
        "malformed XML near byte {}: {err}",
        reader.buffer_position()
    ))
}

/// Walks the document and collects the title/body text of every `<Tab>`.
///
/// Tracks open elements itself so that truncated documents (unclosed tags
/// at end of input) and documents with several roots are rejected.
fn read_tabs(text: &str) -> Result<Vec<RawTab>> {
    let mut reader = Reader::from_str(text);

    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut seen_root = false;
    let mut tabs = Vec::new();
    let mut current: Option<(usize, RawTab)> = None;
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                enter_element(&mut open, &mut seen_root)?;
                let name = e.name().as_ref().to_vec();
                begin(&name, open.len(), &mut current, &mut capture);
                open.push(name);
            }
            Ok(Event::Empty(e)) => {
                // `<title/>` counts as present with empty text
                enter_element(&mut open, &mut seen_root)?;
                let name = e.name().as_ref().to_vec();
                begin(&name, open.len(), &mut current, &mut capture);
                finish(open.len(), &mut tabs, &mut current, &mut capture);
            }
            Ok(Event::End(_)) => {
                open.pop();
                finish(open.len(), &mut tabs, &mut current, &mut capture);
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|err| format_error(&reader, &err))?;
                if open.is_empty() {
                    if !text.trim().is_empty() {
                        return Err(TomeError::Format(
                            "text outside the root element".to_string(),
                        ));
                    }
                } else if let Some(capture) = capture.as_mut() {
                    capture.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(capture) = capture.as_mut() {
                    capture
                        .text
                        .push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(format_error(&reader, &err)),
            _ => {}
        }
    }

    if let Some(name) = open.last() {
        return Err(TomeError::Format(format!(
            "unclosed element <{}>",
            String::from_utf8_lossy(name)
        )));
    }
    if !seen_root {
        return Err(TomeError::Format("document has no root element".to_string()));
    }

    Ok(tabs)
}

/// Registers an element start, rejecting a second root.
fn enter_element(open: &[Vec<u8>], seen_root: &mut bool) -> Result<()> {
    if open.is_empty() {
        if *seen_root {
            return Err(TomeError::Format(
                "more than one root element".to_string(),
            ));
        }
        *seen_root = true;
    }
    Ok(())
}

/// Handles an opening tag at `depth` (number of elements already open).
fn begin(
    name: &[u8],
    depth: usize,
    current: &mut Option<(usize, RawTab)>,
    capture: &mut Option<Capture>,
) {
    let Some((_, tab)) = current.as_mut() else {
        if name == LEGACY_TAB_ELEMENT {
            *current = Some((depth, RawTab::default()));
        }
        return;
    };

    if capture.is_some() {
        return;
    }

    let field = if name == LEGACY_TITLE_ELEMENT && tab.title.is_none() {
        Field::Title
    } else if name == LEGACY_BODY_ELEMENT && tab.body.is_none() {
        Field::Body
    } else {
        return;
    };

    *capture = Some(Capture {
        field,
        depth,
        text: String::new(),
    });
}

/// Handles a closing tag that leaves `depth` elements open.
fn finish(
    depth: usize,
    tabs: &mut Vec<RawTab>,
    current: &mut Option<(usize, RawTab)>,
    capture: &mut Option<Capture>,
) {
    if capture.as_ref().is_some_and(|c| c.depth == depth) {
        if let (Some(done), Some((_, tab))) = (capture.take(), current.as_mut()) {
            match done.field {
                Field::Title => tab.title = Some(done.text),
                Field::Body => tab.body = Some(done.text),
            }
        }
    }

    if current.as_ref().is_some_and(|(tab_depth, _)| *tab_depth == depth) {
        if let Some((_, tab)) = current.take() {
            tabs.push(tab);
        }
    }
}
