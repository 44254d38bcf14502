//! Smooth scrolling over folded buffers
//!
//! Animations interpolate over fold-aware hops rather than buffer lines, so a
//! closed fold is crossed in a single frame step and no frame ever shows the
//! view starting inside a fold.
//!
//! # Layers
//!
//! ## Atomic
//! - `easing` - Pure easing functions (cubic, quintic, sine, ...)
//! - `timing` - Progress and interpolation helpers
//! - `config` - Configuration extensions (types live in foldscroll-core)
//!
//! ## Molecular
//! - `animation` - Animator combining the atoms with the core's planner
//!
//! # Usage
//!
//! ```ignore
//! use foldscroll_core::{BufferWindow, ScrollConfig};
//! use foldscroll_motion::ScrollAnimator;
//!
//! let mut window = BufferWindow::new(200, 40);
//! let mut animator = ScrollAnimator::new(ScrollConfig::default());
//!
//! animator.scroll_half_page_down(&mut window);
//!
//! // In the frame loop
//! while animator.needs_update() {
//!     let frame = animator.update(&mut window);
//! }
//! ```

// Atomic
pub mod config;
pub mod easing;
pub mod timing;

// Molecular
pub mod animation;

pub use animation::{Frame, ScrollAnimator};
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
