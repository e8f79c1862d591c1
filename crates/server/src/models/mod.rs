//! Domain models returned by the repository layer and serialized to JSON.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod session;
pub mod user;

pub use cart::{Cart, CartItemView};
pub use catalog::{Category, ProductView};
pub use order::{Order, OrderItem};
pub use session::{CurrentUser, session_keys};
pub use user::User;
