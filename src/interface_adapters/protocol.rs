// Fixed plain-text bodies of the gateway's HTTP surface.

pub const GREETING: &str = "Hello, World!";
pub const PRODUCTS_ERROR: &str = "Error fetching products";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const NOT_FOUND: &str = "Not Found";
pub const INTERNAL_ERROR: &str = "Something went wrong!";

// Upper bound for request bodies accepted by the JSON parsing stage.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;
