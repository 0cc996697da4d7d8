use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum StickerType {
    Standard = 1,
    Guild = 2,
}
