mod responses;

pub use responses::{Detail, Welcome};
