use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a tagging run. None of these are retried; the process
/// reports the diagnostic on stderr and exits non-zero.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("unable to determine file type of \"{0}\"")]
    UnsupportedFormat(String),

    #[error("no audio stream found")]
    NotAudio,

    #[error("reported audio duration is zero")]
    ZeroDuration,

    #[error("no metadata atom present")]
    NoTagAtom,

    #[error("frame tag error: {0}")]
    Id3(#[from] id3::Error),

    #[error("atom tag error: {0}")]
    Mp4(#[from] mp4ameta::Error),

    #[error("audio probe failed: {0}")]
    Probe(#[from] symphonia::core::errors::Error),

    #[error("unable to open cover art file \"{}\": {source}", path.display())]
    CoverArtUnreadable { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}
