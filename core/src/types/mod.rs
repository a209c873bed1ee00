pub(crate) mod tag;
pub use tag::{Tag, normalize_alias};

pub(crate) mod tag_name;
pub use tag_name::{TagName, TagNameError};
