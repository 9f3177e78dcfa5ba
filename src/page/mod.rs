pub mod snapshot;
pub mod storefront;
