pub mod audio;
pub mod payload;

use std::path::Path;

pub use audio::WavMedia;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
