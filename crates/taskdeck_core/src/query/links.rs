//! Link list projections.

use crate::model::link::{Link, LinkType};

/// Returns the links of one category, preserving storage order.
pub fn links_of_type(links: &[Link], kind: LinkType) -> Vec<Link> {
    links
        .iter()
        .filter(|link| link.kind == kind)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::links_of_type;
    use crate::model::link::{Link, LinkType};
    use chrono::Utc;
    use uuid::Uuid;

    fn link(title: &str, kind: LinkType) -> Link {
        Link {
            id: Uuid::new_v4(),
            title: title.to_string(),
            url: "https://example.com".to_string(),
            kind,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn partition_keeps_storage_order() {
        let links = vec![
            link("a", LinkType::Website),
            link("b", LinkType::Youtube),
            link("c", LinkType::Website),
        ];

        let websites = links_of_type(&links, LinkType::Website);
        let titles: Vec<&str> = websites.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);

        assert_eq!(links_of_type(&links, LinkType::Youtube).len(), 1);
    }
}
