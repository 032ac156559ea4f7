//! Lifecycle: a node's role in the most recent reconciliation.
//!
//! This is not a permanent state. An `Enter` node becomes `Update` on the
//! next reconciliation in which its key still appears; a `Leave` node stays
//! `Leave` until its exit transition settles and the drive loop removes it.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    Enter,
    Update,
    Leave,
}
