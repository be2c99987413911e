//! Classification catalog.

/// The default classification options offered by the search form.
///
/// The first entry is the empty "any" selection; the rest are the museum's
/// most common classification labels. The list is presentation data, not a
/// closed set: the API accepts classifications outside it.
pub const CLASSIFICATION_OPTIONS: &[&str] = &[
    "",
    "Books",
    "Books|Ornament & Architecture",
    "Books|Prints|Ornament & Architecture",
    "Bronzes",
    "Ceramics",
    "Ceramics-Containers",
    "Ceramics-Porcelain",
    "Ceramics-Pottery",
    "Codices",
    "Coins",
    "Cut Paper|Ephemera",
    "Drawings",
    "Drawings|Ornament & Architecture",
    "Gems",
    "Glass",
    "Glass-Stained",
    "Gold and Silver",
    "Jade",
    "Jewelry",
    "Medals and Plaquettes",
    "Metal-Ornaments",
    "Metalwork",
    "Metalwork-Iron",
    "Metalwork-Silver",
    "Negatives",
    "Netsuke",
    "Paintings",
    "Photographs",
    "Photographs|Ephemera",
    "Prints",
    "Prints|Ephemera",
    "Prints|Ornament & Architecture",
    "Sculpture",
    "Shafted Weapons",
    "Stone Sculpture",
    "Stucco",
    "Sword Furniture-Kozuka",
    "Sword Furniture-Tsuba",
    "Swords",
    "Terracottas",
    "Textiles",
    "Textiles-Embroidered",
    "Textiles-Laces",
    "Textiles-Printed",
    "Textiles-Trimmings",
    "Textiles-Velvets",
    "Textiles-Woven",
    "Vases",
    "Wood-Sculpture",
    "Woodwork-Furniture",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_option_is_any() {
        assert_eq!(CLASSIFICATION_OPTIONS[0], "");
    }

    #[test]
    fn options_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for option in CLASSIFICATION_OPTIONS {
            assert!(seen.insert(*option), "duplicate classification: {option}");
        }
    }
}
