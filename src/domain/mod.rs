pub mod extractor;
pub mod models;
pub mod sitemap;
