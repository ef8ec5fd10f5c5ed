//! Bootstrap utility class tokens used across the library and the docs site.
//!
//! Component families own their structural tokens (`btn`, `nav`, `alert`)
//! through their variant enums; this module covers the free-standing utility
//! vocabulary so call sites never hand-spell a token twice.

/// `border`.
pub const BORDER: &str = "border";
/// `flex-column`.
pub const FLEX_COLUMN: &str = "flex-column";
/// `mb-3`.
pub const MB_3: &str = "mb-3";
/// `mr-2`.
pub const MR_2: &str = "mr-2";
/// `mt-4`.
pub const MT_4: &str = "mt-4";
/// `p-3`.
pub const P_3: &str = "p-3";
/// `rounded`.
pub const ROUNDED: &str = "rounded";
/// `table`.
pub const TABLE: &str = "table";
/// `table-bordered`.
pub const TABLE_BORDERED: &str = "table-bordered";
/// `table-striped`.
pub const TABLE_STRIPED: &str = "table-striped";
/// `text-center`.
pub const TEXT_CENTER: &str = "text-center";
/// `text-nowrap`.
pub const TEXT_NOWRAP: &str = "text-nowrap";
/// `text-right`.
pub const TEXT_RIGHT: &str = "text-right";
