pub mod category;
pub mod price;
pub mod product;
pub mod product_tag;
pub mod tag;
