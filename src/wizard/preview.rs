// SPDX-License-Identifier: MPL-2.0
//! Preview references for the selected image.
//!
//! A [`Preview`] is a scoped handle: acquiring one registers it in the
//! [`PreviewLedger`] and dropping it releases it. [`PreviewSlot`] holds at
//! most one preview, so replacing the selection releases the previous handle
//! immediately and dropping the slot releases the last one.

use super::candidate::FileCandidate;
use iced::widget::{image, svg};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Identifier of an acquired preview, unique for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

impl PreviewId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared count of previews that are currently acquired.
#[derive(Debug, Clone, Default)]
pub struct PreviewLedger {
    live: Arc<AtomicUsize>,
}

impl PreviewLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of previews acquired and not yet released.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Acquires a preview for `candidate`. Returns `None` when the candidate
    /// carries no image data.
    #[must_use]
    pub fn acquire(&self, candidate: &FileCandidate) -> Option<Preview> {
        let bytes = candidate.bytes()?;
        let source = if candidate.content_type().is_svg() {
            // svg handles own their document; the copy is limited to SVG markup.
            PreviewSource::Vector(svg::Handle::from_memory(bytes.to_vec()))
        } else {
            PreviewSource::Raster(image::Handle::from_bytes(bytes.clone()))
        };

        self.live.fetch_add(1, Ordering::SeqCst);
        let id = PreviewId::next();
        log::debug!("acquired preview {id:?} for {}", candidate.name());

        Some(Preview {
            id,
            source,
            ledger: self.clone(),
        })
    }
}

/// What the preview widget renders.
#[derive(Debug, Clone)]
pub enum PreviewSource {
    Raster(image::Handle),
    Vector(svg::Handle),
}

/// A live preview reference. Released on drop.
#[derive(Debug)]
pub struct Preview {
    id: PreviewId,
    source: PreviewSource,
    ledger: PreviewLedger,
}

impl Preview {
    #[must_use]
    pub fn id(&self) -> PreviewId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &PreviewSource {
        &self.source
    }
}

impl Drop for Preview {
    fn drop(&mut self) {
        self.ledger.live.fetch_sub(1, Ordering::SeqCst);
        log::debug!("released preview {:?}", self.id);
    }
}

/// Holds the current preview, if any.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    current: Option<Preview>,
}

impl PreviewSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `preview`, releasing the one it replaces.
    pub fn replace(&mut self, preview: Option<Preview>) {
        // Release the old handle before the new one becomes visible.
        self.current.take();
        self.current = preview;
    }

    /// Releases the current preview. Idempotent.
    pub fn release(&mut self) {
        self.current.take();
    }

    #[must_use]
    pub fn current(&self) -> Option<&Preview> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    fn png_candidate(name: &str) -> FileCandidate {
        FileCandidate::from_bytes(name, PNG_BYTES.to_vec())
    }

    #[test]
    fn acquire_counts_live_previews() {
        let ledger = PreviewLedger::new();
        let preview = ledger.acquire(&png_candidate("a.png"));
        assert!(preview.is_some());
        assert_eq!(ledger.live(), 1);
        drop(preview);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn non_image_candidate_has_no_preview() {
        let ledger = PreviewLedger::new();
        let candidate = FileCandidate::from_bytes("document.pdf", b"%PDF-1.4".to_vec());
        assert!(ledger.acquire(&candidate).is_none());
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn svg_candidate_gets_vector_preview() {
        let ledger = PreviewLedger::new();
        let candidate = FileCandidate::from_bytes("logo.svg", b"<svg></svg>".to_vec());
        let preview = ledger.acquire(&candidate).expect("svg preview");
        assert!(matches!(preview.source(), PreviewSource::Vector(_)));
    }

    #[test]
    fn raster_preview_shares_candidate_bytes() {
        let ledger = PreviewLedger::new();
        let candidate = png_candidate("a.png");
        let preview = ledger.acquire(&candidate).expect("raster preview");
        let shared = candidate.bytes().expect("image bytes");

        match preview.source() {
            PreviewSource::Raster(image::Handle::Bytes(_, bytes)) => {
                assert_eq!(bytes.as_ptr(), shared.as_ptr());
            }
            other => panic!("expected in-memory raster handle, got {other:?}"),
        }
    }

    #[test]
    fn replacing_releases_previous_preview() {
        let ledger = PreviewLedger::new();
        let mut slot = PreviewSlot::new();

        slot.replace(ledger.acquire(&png_candidate("a.png")));
        let first = slot.current().map(Preview::id);
        slot.replace(ledger.acquire(&png_candidate("b.png")));

        assert_eq!(ledger.live(), 1);
        assert_ne!(slot.current().map(Preview::id), first);
    }

    #[test]
    fn release_is_idempotent() {
        let ledger = PreviewLedger::new();
        let mut slot = PreviewSlot::new();
        slot.replace(ledger.acquire(&png_candidate("a.png")));

        slot.release();
        slot.release();

        assert!(slot.is_empty());
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn dropping_slot_releases_preview() {
        let ledger = PreviewLedger::new();
        {
            let mut slot = PreviewSlot::new();
            slot.replace(ledger.acquire(&png_candidate("a.png")));
            assert_eq!(ledger.live(), 1);
        }
        assert_eq!(ledger.live(), 0);
    }
}
