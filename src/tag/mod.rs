pub mod m4a;
pub mod mp3;
#[cfg(test)]
pub mod testutil;

use std::path::Path;

use crate::error::TagError;
use crate::metadata::Metadata;

/// Field-setting contract shared by the two tag backends. Setters mutate an
/// in-memory tag only; `write` is the single operation that touches disk
/// after a successful open.
pub trait TagWriter {
    fn set_title(&mut self, title: &str);
    fn set_track(&mut self, number: u16, total: Option<u16>);
    fn set_genre(&mut self, genre: &str);
    fn set_performers(&mut self, performers: &str);
    fn set_composers(&mut self, composers: &str);
    fn set_year(&mut self, year: i32);
    fn set_disc(&mut self, number: u16, total: Option<u16>);
    fn set_album_title(&mut self, title: &str);
    fn set_album_artist(&mut self, artist: &str);
    fn set_art(&mut self, _data: &[u8]) {}
    fn write(&mut self) -> Result<(), TagError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Mp3,
    M4a,
}

// Extension matching on the trailing characters of the path. Content
// sniffing is deliberately not attempted: some MP4 files carry enough MPEG
// sync bytes to be misidentified as MPEG audio.
fn file_kind(path: &Path) -> Option<FileKind> {
    let name = path.to_str()?;
    match name.get(name.len().checked_sub(3)?..)? {
        "mp3" => Some(FileKind::Mp3),
        "m4a" => Some(FileKind::M4a),
        _ => None,
    }
}

/// Opens the backend matching the path's extension. Fails without touching
/// the file when the extension is unknown, and fails before any tag is
/// modified when the file is not genuine playable audio.
pub fn open(path: &Path) -> Result<Box<dyn TagWriter>, TagError> {
    match file_kind(path) {
        Some(FileKind::Mp3) => Ok(Box::new(mp3::Mp3File::open(path)?)),
        Some(FileKind::M4a) => Ok(Box::new(m4a::M4aFile::open(path)?)),
        None => Err(TagError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Applies the supplied fields in a fixed order, then commits.
pub fn apply(metadata: &Metadata, writer: &mut dyn TagWriter) -> Result<(), TagError> {
    if let Some(title) = &metadata.title {
        writer.set_title(title);
    }
    if let Some(track) = &metadata.track {
        writer.set_track(track.number, track.total);
    }
    if let Some(performers) = &metadata.performers {
        writer.set_performers(performers);
    }
    if let Some(composers) = &metadata.composers {
        writer.set_composers(composers);
    }
    if let Some(genre) = &metadata.genre {
        writer.set_genre(genre);
    }
    if let Some(year) = metadata.year {
        writer.set_year(year);
    }
    if let Some(album_title) = &metadata.album_title {
        writer.set_album_title(album_title);
    }
    if let Some(album_artist) = &metadata.album_artist {
        writer.set_album_artist(album_artist);
    }
    if let Some(disc) = &metadata.disc {
        writer.set_disc(disc.number, disc.total);
    }
    if let Some(art) = &metadata.cover_art {
        writer.set_art(art);
    }

    log::info!("committing tags");
    writer.write()
}
