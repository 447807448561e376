//! Linked collection types. Currently just [`ForwardList`] and its accompanying [`Cursor`] and
//! [`CursorMut`] types.

pub mod forward_list;

#[doc(inline)]
pub use forward_list::{Cursor, CursorMut, ForwardList};
