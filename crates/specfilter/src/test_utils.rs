use crate::model::{Color, Product, Size};

/// The reference catalog: Apple (Green, Small), Tree (Green, Large), House (Blue, Large).
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

/// One product for every color and size combination, named `"{color}-{size}"`.
pub fn full_catalog() -> Vec<Product> {
    Color::ALL
        .iter()
        .flat_map(|&color| {
            Size::ALL
                .iter()
                .map(move |&size| Product::new(format!("{color}-{size}"), color, size))
        })
        .collect()
}
