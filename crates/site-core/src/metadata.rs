pub const PAGE_TITLE: &str = "Lance Studio - Creative Digital Solutions";
pub const PAGE_DESCRIPTION: &str = "Lance Studio creates innovative digital tools and tabletop gaming accessories. Discover Spool Tracker and our custom 3D printed terrain.";
pub const DESCRIPTION_META_NAME: &str = "description";

/// The document head as far as page metadata is concerned.
pub trait HeadDocument {
    type Meta;
    type Error;

    fn set_title(&mut self, title: &str);

    /// All `<meta name="{name}">` elements in document order.
    fn find_metas(&self, name: &str) -> Vec<Self::Meta>;

    fn set_meta_content(&mut self, meta: &Self::Meta, content: &str) -> Result<(), Self::Error>;

    fn append_meta(&mut self, name: &str, content: &str) -> Result<(), Self::Error>;

    fn remove_meta(&mut self, meta: Self::Meta) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

impl PageMetadata {
    pub fn studio() -> Self {
        Self {
            title: PAGE_TITLE,
            description: PAGE_DESCRIPTION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaOutcome {
    Created,
    Updated { removed_duplicates: usize },
}

/// Sets the title and leaves exactly one description meta carrying
/// `meta.description`. Safe to run more than once.
pub fn apply_metadata<D: HeadDocument>(
    doc: &mut D,
    meta: &PageMetadata,
) -> Result<MetaOutcome, D::Error> {
    doc.set_title(meta.title);
    let mut found = doc.find_metas(DESCRIPTION_META_NAME).into_iter();
    match found.next() {
        None => {
            doc.append_meta(DESCRIPTION_META_NAME, meta.description)?;
            Ok(MetaOutcome::Created)
        }
        Some(first) => {
            doc.set_meta_content(&first, meta.description)?;
            let mut removed_duplicates = 0;
            for extra in found {
                doc.remove_meta(extra)?;
                removed_duplicates += 1;
            }
            Ok(MetaOutcome::Updated { removed_duplicates })
        }
    }
}
