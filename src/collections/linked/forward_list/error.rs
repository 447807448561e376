use derive_more::{Display, Error};

/// An operation needed the node after a cursor, but the cursor was on the last node or at the
/// end of the list.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor has no successor to erase!")]
pub struct NoSuccessor;

/// An insertion was attempted after the end of a list, which isn't a position that can have a
/// successor.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to insert after the end of a list!")]
pub struct CursorAtEnd;
