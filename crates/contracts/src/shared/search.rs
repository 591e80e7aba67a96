/// Types that take part in case-insensitive substring search
pub trait Searchable {
    /// `needle` arrives already lowercased
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Case-insensitive `contains` against a lowercased needle
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Keeps the items matching `query`, preserving order.
/// An empty query matches everything.
pub fn search_list<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Name(&'static str);

    impl Searchable for Name {
        fn matches_filter(&self, needle: &str) -> bool {
            contains_ignore_case(self.0, needle)
        }
    }

    #[test]
    fn test_search_list() {
        let items = [Name("Mumbai"), Name("Delhi"), Name("Navi MUMBAI")];
        let found: Vec<&str> = search_list(&items, "mumBai").into_iter().map(|n| n.0).collect();
        assert_eq!(found, vec!["Mumbai", "Navi MUMBAI"]);
        assert_eq!(search_list(&items, "").len(), 3);
    }
}
