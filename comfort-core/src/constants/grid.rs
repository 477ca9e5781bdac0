//! Default Classroom Layout
//!
//! The reference deployment: a 6 x 5 seat classroom (30 seats numbered
//! column by column), eight hourly time slots and two ceiling air
//! conditioners in the second column.

/// Number of seat columns (W).
pub const CLASSROOM_COLUMNS: u16 = 6;

/// Number of seats per column (H).
pub const CLASSROOM_ROWS: u16 = 5;

/// Hourly slots of a school day.
pub const CLASSROOM_TIME_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
];

/// Air conditioners as `(id, column, row)`.
///
/// (1, 0) is seat 6 and (1, 4) is seat 10. Both start switched on.
pub const CLASSROOM_CONTROL_SOURCES: [(u32, u16, u16); 2] = [(1, 1, 0), (2, 1, 4)];
