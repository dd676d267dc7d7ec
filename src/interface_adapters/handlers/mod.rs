pub mod cart;
pub mod fallback;
pub mod login;
pub mod products;

pub use cart::cart;
pub use fallback::{hello, not_found};
pub use login::login;
pub use products::list_products;
