pub mod align;
pub mod animate;
pub mod cursor;
pub mod delta;
pub mod plan;
pub mod resolve;
pub mod scroll_off;
