//! Pitch assignment for audio feedback
//!
//! Each body gets a fixed note so that impacts are audibly distinguishable.
//! Playing the note is left to whoever consumes the event stream.

/// The scale bodies are assigned from, in index order
pub const NOTES: [&str; 10] = ["C4", "E4", "G4", "B4", "D5", "F5", "A5", "C6", "E6", "G6"];

/// Note for a body index, wrapping around the scale
pub fn note_for(index: usize) -> &'static str {
    NOTES[index % NOTES.len()]
}
