#[macro_use]
mod util;

mod manipulation;
mod resolve;
