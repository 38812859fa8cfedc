/// A lightweight, serializable snapshot of the engine's mutable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Derived geometry is
/// not part of the snapshot: it is recomputed from `raw_offset` after a restore.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderState {
    pub raw_offset: f32,
    pub is_loading: bool,
}
