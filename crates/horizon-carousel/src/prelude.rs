//! Prelude module for Horizon Carousel.
//!
//! ```
//! use horizon_carousel::prelude::*;
//! ```

// ============================================================================
// Engine
// ============================================================================

pub use crate::tree::SelectionTree;
pub use crate::{CarouselConfig, ItemId, ItemState, SelectionPolicy};

// ============================================================================
// Item contract
// ============================================================================

pub use crate::criteria::CarouselItem;

// ============================================================================
// Notifications
// ============================================================================

pub use crate::signals::{CarouselSignals, StateChange};
pub use horizon_carousel_core::{ConnectionGuard, ConnectionId, Signal};
