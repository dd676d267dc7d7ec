pub mod cart;
pub mod login;
pub mod products;

pub use cart::empty_cart;
pub use login::{LoginPolicy, LoginUseCase};
pub use products::ListProductsUseCase;
