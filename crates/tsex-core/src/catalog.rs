//! The fixed, ordered list of lessons shown in the menu.

use std::collections::HashSet;

use crate::error::{Result, TsexError};

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonDescriptor {
    /// Unique lesson number, starting at 1.
    pub id: u32,
    /// Human-readable title.
    pub title: &'static str,
}

impl LessonDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(id: u32, title: &'static str) -> Self {
        Self { id, title }
    }

    /// Name of the lesson unit registered for this id, e.g. `lesson07`.
    #[must_use]
    pub fn unit_name(&self) -> String {
        unit_name(self.id)
    }
}

/// Naming convention linking a lesson id to its unit: `lesson` plus the
/// id zero-padded to two digits.
#[must_use]
pub fn unit_name(id: u32) -> String {
    format!("lesson{id:02}")
}

/// The thirty TypeScript lessons, in menu order.
pub const LESSONS: &[LessonDescriptor] = &[
    LessonDescriptor::new(1, "Hello TypeScript: first output with ts-node"),
    LessonDescriptor::new(2, "Basic type annotations: number, string, boolean, any"),
    LessonDescriptor::new(3, "Understanding type inference"),
    LessonDescriptor::new(4, "Array and tuple types"),
    LessonDescriptor::new(5, "Object type basics"),
    LessonDescriptor::new(6, "Function types: parameter and return annotations"),
    LessonDescriptor::new(7, "Union and literal types in practice"),
    LessonDescriptor::new(8, "Working with type aliases"),
    LessonDescriptor::new(9, "Enums: grouping related constants"),
    LessonDescriptor::new(10, "Interfaces and the structural type system"),
    LessonDescriptor::new(11, "Extending interfaces and intersection types"),
    LessonDescriptor::new(12, "Optional, readonly and readonly arrays"),
    LessonDescriptor::new(13, "Narrowing with typeof, in and instanceof"),
    LessonDescriptor::new(14, "Writing generic functions"),
    LessonDescriptor::new(15, "Generic interfaces and generic type aliases"),
    LessonDescriptor::new(16, "Classes: constructors, access modifiers, inheritance"),
    LessonDescriptor::new(17, "Classes implementing interfaces"),
    LessonDescriptor::new(18, "Writing your own type guards"),
    LessonDescriptor::new(19, "Utility types: Partial, Pick, Omit, Record"),
    LessonDescriptor::new(20, "Mapped types for reusable shapes"),
    LessonDescriptor::new(21, "Conditional types"),
    LessonDescriptor::new(22, "Controlling inference with infer"),
    LessonDescriptor::new(23, "Template literal types"),
    LessonDescriptor::new(24, "Safe state machines with discriminated unions"),
    LessonDescriptor::new(25, "Implementing DeepReadonly and DeepPartial"),
    LessonDescriptor::new(26, "A type-safe API client (fetch + TypeScript)"),
    LessonDescriptor::new(27, "Designing a type-safe form model"),
    LessonDescriptor::new(28, "Structuring a Node.js + TypeScript project"),
    LessonDescriptor::new(29, "Advanced tsconfig options: paths, baseUrl, strict"),
    LessonDescriptor::new(30, "Building a library or SDK in TypeScript (with d.ts)"),
];

/// Read-only registry of lesson descriptors.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<LessonDescriptor>,
}

impl Catalog {
    /// The standard thirty-lesson catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: LESSONS.to_vec(),
        }
    }

    /// Builds a catalog from `entries`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `TsexError::DuplicateLessonId` if an id appears twice.
    pub fn from_entries(entries: Vec<LessonDescriptor>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(TsexError::duplicate_lesson_id(entry.id));
            }
        }
        Ok(Self { entries })
    }

    /// All descriptors in display order.
    #[must_use]
    pub fn all(&self) -> &[LessonDescriptor] {
        &self.entries
    }

    /// Looks up a descriptor by id.
    #[must_use]
    pub fn find_by_id(&self, id: u32) -> Option<&LessonDescriptor> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of lessons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no lessons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
