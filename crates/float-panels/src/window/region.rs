//! Panel regions reported by hit testing

use serde::{Deserialize, Serialize};

/// Which part of a panel a point falls in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Close button in the header
    CloseButton,
    /// Area that starts a drag
    GrabRegion,
    /// Everything else; belongs to the content collaborator
    Content,
}
