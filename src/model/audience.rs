use std::collections::HashSet;

use super::{Id, ItemCollection, Object, ObjectOrLink};

/// Merges recipient lists in order, keeping the first occurrence of each
/// IRI. Entries without an IRI are dropped.
pub fn dedup_recipients(lists: &[&ItemCollection]) -> ItemCollection {
    let mut seen: HashSet<&Id> = HashSet::new();
    let mut merged = ItemCollection::new();
    for item in lists.iter().flat_map(|list| list.iter()) {
        let link = item.link();
        if link.is_empty() || !seen.insert(link) {
            continue;
        }
        merged.push(item.clone());
    }
    merged
}

impl Object {
    /// Everyone the object is delivered to, blind copies included.
    pub fn recipients(&self) -> ItemCollection {
        dedup_recipients(&[&self.to, &self.bto, &self.cc, &self.bcc, &self.audience])
    }

    /// Removes the blind recipients, which must not be published.
    pub fn clean(&mut self) {
        self.bto.clear();
        self.bcc.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::json_ld::Discriminator;
    use crate::model::{Item, ItemCollection, Link, Object, ObjectOrLink, dedup_recipients};

    fn links(iris: &[&str]) -> ItemCollection {
        iris.iter().map(|iri| Item::from(*iri)).collect()
    }

    #[test]
    fn recipients_merge_in_order() {
        let mut note = Object::new("https://example.com/notes/1", Discriminator::NOTE);
        note.to = links(&["https://a.example/A", "https://a.example/B"]);
        note.cc = links(&["https://a.example/B", "https://a.example/C"]);
        note.bcc = links(&["https://a.example/D"]);

        let recipients: Vec<_> = note
            .recipients()
            .iter()
            .map(|item| item.link().to_string())
            .collect();
        assert_eq!(
            recipients,
            [
                "https://a.example/A",
                "https://a.example/B",
                "https://a.example/C",
                "https://a.example/D"
            ]
        );
    }

    #[test]
    fn clean_keeps_public_audience() {
        let mut note = Object::new("https://example.com/notes/1", Discriminator::NOTE);
        note.to = links(&["https://a.example/A"]);
        note.cc = links(&["https://a.example/B"]);
        note.bto = links(&["https://a.example/C"]);
        note.bcc = links(&["https://a.example/D"]);
        note.clean();
        assert!(note.bto.is_empty());
        assert!(note.bcc.is_empty());
        assert_eq!(note.to.len(), 1);
        assert_eq!(note.cc.len(), 1);
    }

    #[test]
    fn dedup_is_strict_and_skips_anonymous() {
        let first = links(&["https://a.example/A", "https://a.example/A/"]);
        let second: ItemCollection = [Item::from(Link::default()), Item::from("https://a.example/A")]
            .into_iter()
            .collect();
        let merged = dedup_recipients(&[&first, &second]);
        assert_eq!(merged.len(), 2);
    }
}
