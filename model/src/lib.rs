mod snowflake;
pub use snowflake::Snowflake;

pub mod guild;
pub mod sticker;

mod util;
