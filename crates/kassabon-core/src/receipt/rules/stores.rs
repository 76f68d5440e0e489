//! Retailer identification.

/// Scan the full receipt text for a known retailer name.
///
/// Branded receipts reliably print the chain name near the top, so a plain
/// case-insensitive substring scan beats positional heuristics. The list is
/// ordered; the first name found wins and scanning stops.
pub fn match_store<'a>(text: &str, stores: &'a [String]) -> Option<&'a str> {
    let upper = text.to_uppercase();
    stores
        .iter()
        .find(|store| upper.contains(&store.to_uppercase()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_list() -> Vec<String> {
        ["ALBERT HEIJN", "JUMBO", "LIDL"].map(String::from).to_vec()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let stores = store_list();
        assert_eq!(match_store("albert heijn 1403\nMelk 1,29", &stores), Some("ALBERT HEIJN"));
    }

    #[test]
    fn test_first_listed_store_wins() {
        let stores = store_list();
        assert_eq!(match_store("JUMBO naast de LIDL", &stores), Some("JUMBO"));
    }

    #[test]
    fn test_no_known_store() {
        let stores = store_list();
        assert_eq!(match_store("Bakkerij de Hoek", &stores), None);
    }
}
