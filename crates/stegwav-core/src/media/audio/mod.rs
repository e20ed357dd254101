pub mod lsb_codec;
pub mod wav;

pub use lsb_codec::{LsbCodec, LsbDecoder, LsbEncoder};
pub use wav::WavMedia;
