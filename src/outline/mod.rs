//! Collapsible hierarchical list navigation and optimistic mutation.
//!
//! Everything here is synchronous and owned by a single view controller:
//! validation and projection of parent/child trees into flat rows,
//! collapse flags scoped to a context, identity-tracking cursors,
//! section-aware movement, the two-section link graph cursor and pending
//! value overlays.

pub mod collapse;
pub mod cursor;
pub mod links;
pub mod optimistic;
pub mod project;
pub mod sections;
pub mod validate;
pub mod viewport;

pub use collapse::CollapseStateStore;
pub use cursor::CursorTracker;
pub use links::{Activation, LinkGraphCursor, LinkLine, LinkSection};
pub use optimistic::OptimisticCoordinator;
pub use project::{FlatNode, project, toggle_parent};
pub use sections::{Grouping, Section, SectionPos, SectionView, SectionedNavigator};
pub use validate::{RejectReason, Rejection, Validated, validate};
pub use viewport::Viewport;
