//! Text of the narrated lessons.

mod advanced;
mod basics;
mod project;

use crate::narration::Script;

/// Every narrated lesson, keyed by lesson id.
pub const NARRATED: &[(u32, &Script)] = &[
    (1, &basics::LESSON_01),
    (2, &basics::LESSON_02),
    (3, &basics::LESSON_03),
    (4, &basics::LESSON_04),
    (5, &basics::LESSON_05),
    (6, &basics::LESSON_06),
    (7, &basics::LESSON_07),
    (8, &basics::LESSON_08),
    (9, &basics::LESSON_09),
    (10, &basics::LESSON_10),
    (11, &basics::LESSON_11),
    (12, &basics::LESSON_12),
    (13, &basics::LESSON_13),
    (14, &advanced::LESSON_14),
    (15, &advanced::LESSON_15),
    (16, &advanced::LESSON_16),
    (17, &advanced::LESSON_17),
    (18, &advanced::LESSON_18),
    (19, &advanced::LESSON_19),
    (20, &advanced::LESSON_20),
    (21, &advanced::LESSON_21),
    (22, &advanced::LESSON_22),
    (23, &advanced::LESSON_23),
    (24, &advanced::LESSON_24),
    (25, &advanced::LESSON_25),
    (28, &project::LESSON_28),
    (29, &project::LESSON_29),
    (30, &project::LESSON_30),
];
