use crate::product::Product;

/// Association between a grouped product and one of its member products.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedProductLink {
    pub id: u64,
    pub qty: u32,
    pub sort_order: u32,
    pub associated_product: Product,
}

impl GroupedProductLink {
    pub fn new(id: u64, associated_product: Product) -> Self {
        Self {
            id,
            qty: 1,
            sort_order: 0,
            associated_product,
        }
    }
}
