pub mod config;
pub mod cursor;
pub mod delta;
pub mod error;
pub mod fold;
pub mod margin;
pub mod numeric;
pub mod plan;
pub mod view;
pub mod window;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use cursor::{set_cursor, CursorPlacement};
pub use delta::{resolve_delta, scroll_delta};
pub use error::{Error, Result};
pub use fold::{ClosedFolds, FoldInfo, FoldQuery};
pub use margin::{effective_scroll_off, scroll_off};
pub use plan::{
    align_cursor, delta_to, display_line, full_page, half_page, plan_scroll, Align, PlanOptions,
    ScrollPlan,
};
pub use view::{Line, ViewAccess, ViewState};
pub use window::{BufferWindow, Window};
