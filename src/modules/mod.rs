pub mod dish;
pub mod fallback;
pub mod order;

mod router;
pub use router::get_router;
