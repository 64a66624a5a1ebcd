// Host-side tests for the title/description initializer.
// FakeHead stands in for the browser document head.

use site_core::*;

#[derive(Default)]
struct FakeHead {
    title: String,
    metas: Vec<(u32, String, String)>,
    next_id: u32,
}

impl FakeHead {
    fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.next_id += 1;
        self.metas
            .push((self.next_id, name.to_string(), content.to_string()));
        self
    }

    fn descriptions(&self) -> Vec<&str> {
        self.metas
            .iter()
            .filter(|(_, n, _)| n == DESCRIPTION_META_NAME)
            .map(|(_, _, c)| c.as_str())
            .collect()
    }
}

impl HeadDocument for FakeHead {
    type Meta = u32;
    type Error = String;

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn find_metas(&self, name: &str) -> Vec<u32> {
        self.metas
            .iter()
            .filter(|(_, n, _)| n == name)
            .map(|(id, _, _)| *id)
            .collect()
    }

    fn set_meta_content(&mut self, meta: &u32, content: &str) -> Result<(), String> {
        let entry = self
            .metas
            .iter_mut()
            .find(|(id, _, _)| id == meta)
            .ok_or_else(|| format!("no meta {meta}"))?;
        entry.2 = content.to_string();
        Ok(())
    }

    fn append_meta(&mut self, name: &str, content: &str) -> Result<(), String> {
        self.next_id += 1;
        self.metas
            .push((self.next_id, name.to_string(), content.to_string()));
        Ok(())
    }

    fn remove_meta(&mut self, meta: u32) -> Result<(), String> {
        self.metas.retain(|(id, _, _)| *id != meta);
        Ok(())
    }
}

#[test]
fn creates_description_when_absent() {
    let mut head = FakeHead::default().with_meta("viewport", "width=device-width");
    let out = apply_metadata(&mut head, &PageMetadata::studio()).unwrap();
    assert_eq!(out, MetaOutcome::Created);
    assert_eq!(head.title, PAGE_TITLE);
    assert_eq!(head.descriptions(), vec![PAGE_DESCRIPTION]);
    assert_eq!(head.metas.len(), 2);
}

#[test]
fn updates_existing_description_in_place() {
    let mut head = FakeHead::default().with_meta(DESCRIPTION_META_NAME, "old text");
    let out = apply_metadata(&mut head, &PageMetadata::studio()).unwrap();
    assert_eq!(out, MetaOutcome::Updated { removed_duplicates: 0 });
    assert_eq!(head.descriptions(), vec![PAGE_DESCRIPTION]);
    assert_eq!(head.metas[0].0, 1);
}

#[test]
fn collapses_duplicate_descriptions() {
    let mut head = FakeHead::default()
        .with_meta(DESCRIPTION_META_NAME, "a")
        .with_meta("author", "someone")
        .with_meta(DESCRIPTION_META_NAME, "b");
    let out = apply_metadata(&mut head, &PageMetadata::studio()).unwrap();
    assert_eq!(out, MetaOutcome::Updated { removed_duplicates: 1 });
    assert_eq!(head.descriptions(), vec![PAGE_DESCRIPTION]);
    assert_eq!(head.metas.len(), 2);
}

#[test]
fn repeated_application_is_idempotent() {
    let mut head = FakeHead::default();
    apply_metadata(&mut head, &PageMetadata::studio()).unwrap();
    apply_metadata(&mut head, &PageMetadata::studio()).unwrap();
    assert_eq!(head.descriptions().len(), 1);
    assert_eq!(head.title, "Lance Studio - Creative Digital Solutions");
}

#[test]
fn write_failures_propagate() {
    struct ReadOnly;
    impl HeadDocument for ReadOnly {
        type Meta = ();
        type Error = &'static str;
        fn set_title(&mut self, _: &str) {}
        fn find_metas(&self, _: &str) -> Vec<()> {
            Vec::new()
        }
        fn set_meta_content(&mut self, _: &(), _: &str) -> Result<(), Self::Error> {
            Err("read-only")
        }
        fn append_meta(&mut self, _: &str, _: &str) -> Result<(), Self::Error> {
            Err("read-only")
        }
        fn remove_meta(&mut self, _: ()) -> Result<(), Self::Error> {
            Err("read-only")
        }
    }
    assert_eq!(
        apply_metadata(&mut ReadOnly, &PageMetadata::studio()),
        Err("read-only")
    );
}
