//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `kind_check!` | function macro | Boolean kind query over classifications |

mod kind_check;

pub use kind_check::{expand_kind_check, KindCheckInput};
