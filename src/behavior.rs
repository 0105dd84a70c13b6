/*
 * Behavior Module
 *
 * The runtime-selectable steering mode applied to every non-leader boid.
 * The UI exposes the list as a dropdown; an out-of-range or unset index
 * falls back to wander.
 */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Wander,
    Seek,
    Flee,
    Arrive,
    SeekSequence,
}

impl Behavior {
    pub const ALL: [Behavior; 5] = [
        Behavior::Wander,
        Behavior::Seek,
        Behavior::Flee,
        Behavior::Arrive,
        Behavior::SeekSequence,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Behavior::Wander)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            Behavior::Wander => "wander",
            Behavior::Seek => "seek",
            Behavior::Flee => "flee",
            Behavior::Arrive => "arrive",
            Behavior::SeekSequence => "seek-sequence",
        }
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Behavior::Wander
    }
}
