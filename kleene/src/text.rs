use crate::Structure;

/// Conversion from primitive text into engine input.
///
/// This is the only supported way to feed text to the engine: one leaf
/// [`Structure`] per character, in order. The engine itself never looks at
/// raw strings.
pub trait ToStructures {
    fn to_structures(&self) -> Vec<Structure<char>>;
}

impl ToStructures for str {
    fn to_structures(&self) -> Vec<Structure<char>> {
        self.chars().map(Structure::leaf).collect()
    }
}
