//! A module containing [`ForwardList`], its cursors and iterators.
//!
//! [`ForwardList`] is also re-exported under the parent module.

mod cursor;
mod error;
mod forward_list;
mod iter;
mod node;

pub use cursor::*;
pub use error::*;
pub use forward_list::*;
pub use iter::*;
pub(crate) use node::*;
