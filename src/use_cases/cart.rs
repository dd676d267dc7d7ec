use crate::domain::CartContent;

// There is no cart storage; every request gets a fresh, empty cart.
pub fn empty_cart() -> CartContent {
    CartContent::empty()
}
