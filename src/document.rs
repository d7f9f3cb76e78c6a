use crate::{image::Image, info::Info, page::Page};
use id_arena::{Arena, Id};

/// A finished document: the ordered pages and everything drawn on them, plus the
/// images they refer to. Documents are produced by finishing a
/// [DocumentCanvas](crate::DocumentCanvas) and have no public mutators, so once you hold
/// one its contents are final.
#[derive(Default, Debug)]
pub struct Document {
    pub(crate) info: Option<Info>,
    pub(crate) pages: Arena<Page>,
    pub(crate) page_order: Vec<Id<Page>>,
    pub(crate) images: Arena<Image>,
}

impl Document {
    /// Metadata about the document, if any was set
    pub fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    /// The number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Iterate over the pages in document order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().map(move |id| &self.pages[*id])
    }

    /// Get the page at the given 0-based index
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.id_of_page_index(page_index)
            .and_then(|id| self.pages.get(id))
    }

    /// Get an image referred to by a page's draw commands
    pub fn image(&self, id: Id<Image>) -> Option<&Image> {
        self.images.get(id)
    }

    /// Get the page Id of a page at the given index. Returns [None] if
    /// `page_index >= self.page_count()`.
    pub fn id_of_page_index(&self, page_index: usize) -> Option<Id<Page>> {
        self.page_order.get(page_index).copied()
    }

    /// Append a page to the end of the document, returning its id
    pub(crate) fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub(crate) fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }
}
