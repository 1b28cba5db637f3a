pub(crate) mod utils;

mod convert;
