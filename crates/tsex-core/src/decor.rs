//! Emoji markers used to decorate banners, menu lines and prompts.

use rand::seq::IndexedRandom;

/// Pool of markers the random picker chooses from.
pub const EMOJI: &[&str] = &[
    "💡", "✅", "⚙️", "🧩", "✨", "💻", "🐶", "🐱", "🐹", "🐰", "🦊", "🐻", "🐼", "🐯", "🦁",
    "🐮", "🐸", "😺", "🐣", "🐳", "🌏", "🍎", "🍳", "⚾", "🏄", "🚴", "🎧", "🎮", "✈️", "🏝️",
    "🕹️", "❤️", "💞", "⚽", "🐘", "🐒", "🐨", "🐧", "🐥", "🐙", "🐝", "🐞", "🌸", "🌹", "🐾",
    "🎃", "💾", "🎊", "📷", "🎁", "🎇", "😁", "🙈", "💎", "💗",
];

/// Chooses the marker printed in front of decorated lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decor {
    /// A random emoji from [`EMOJI`] on every call.
    #[default]
    Random,
    /// Always the same marker. Useful for deterministic output.
    Fixed(&'static str),
    /// No marker at all.
    Plain,
}

impl Decor {
    /// Returns the next marker, or an empty string for [`Decor::Plain`].
    #[must_use]
    pub fn pick(&self) -> &'static str {
        match self {
            Self::Random => EMOJI.choose(&mut rand::rng()).copied().unwrap_or_default(),
            Self::Fixed(marker) => *marker,
            Self::Plain => "",
        }
    }

    /// Prefixes `text` with the next marker and a space.
    ///
    /// Plain decoration returns `text` unchanged.
    #[must_use]
    pub fn decorate(&self, text: &str) -> String {
        let marker = self.pick();
        if marker.is_empty() {
            text.to_string()
        } else {
            format!("{marker} {text}")
        }
    }
}
