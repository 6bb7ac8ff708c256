//! Atom-based backend for MPEG-4 audio files.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use mp4ameta::{Img, Tag};

use crate::error::TagError;
use crate::tag::TagWriter;

pub struct M4aFile {
    path: PathBuf,
    tag: Tag,
}

impl M4aFile {
    /// Parses the container and validates that it is genuine playable audio
    /// with a tag atom present. The working item list starts empty; the
    /// commit replaces the file's entire item list, so prior items never
    /// survive (replace, don't merge, like the MP3 backend).
    pub fn open(path: &Path) -> Result<Self, TagError> {
        let existing = Tag::read_from_path(path)?;

        // The codec parses a container with no item list into an empty tag;
        // absent and empty have to be told apart by looking for the atom.
        if !has_tag_atom(path)? {
            return Err(TagError::NoTagAtom);
        }

        let duration = existing.duration().ok_or(TagError::NotAudio)?;
        if duration.is_zero() {
            return Err(TagError::ZeroDuration);
        }
        log::debug!("mpeg-4 audio, duration {duration:?}");

        Ok(Self {
            path: path.to_path_buf(),
            tag: Tag::default(),
        })
    }
}

impl TagWriter for M4aFile {
    fn set_title(&mut self, title: &str) {
        self.tag.set_title(title);
    }

    fn set_track(&mut self, number: u16, total: Option<u16>) {
        // trkn carries both integers; an absent total is written as 0,
        // unlike the MP3 backend which omits it from the text entirely.
        self.tag.set_track(number, total.unwrap_or(0));
    }

    fn set_genre(&mut self, genre: &str) {
        self.tag.set_genre(genre);
    }

    fn set_performers(&mut self, performers: &str) {
        self.tag.set_artist(performers);
    }

    fn set_composers(&mut self, composers: &str) {
        // The "writer" atom, ©wrt.
        self.tag.set_composer(composers);
    }

    fn set_year(&mut self, year: i32) {
        self.tag.set_year(year.to_string());
    }

    fn set_disc(&mut self, number: u16, total: Option<u16>) {
        self.tag.set_disc(number, total.unwrap_or(0));
    }

    fn set_album_title(&mut self, title: &str) {
        self.tag.set_album(title);
    }

    fn set_album_artist(&mut self, artist: &str) {
        self.tag.set_album_artist(artist);
    }

    fn set_art(&mut self, data: &[u8]) {
        // Single covr entry; any prior artwork for the key is replaced.
        self.tag.set_artwork(Img::jpeg(data.to_vec()));
    }

    fn write(&mut self) -> Result<(), TagError> {
        self.tag.write_to_path(&self.path)?;
        Ok(())
    }
}

const TAG_ATOM_PATH: [[u8; 4]; 4] = [*b"moov", *b"udta", *b"meta", *b"ilst"];

fn has_tag_atom(path: &Path) -> Result<bool, TagError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    find_atom(&mut file, 0, len, &TAG_ATOM_PATH)
}

/// Scans the children of `pos..end` for the first atom named `wanted[0]`,
/// descending along the rest of the path. Atom payloads are never parsed;
/// only the size/name headers are read.
fn find_atom(file: &mut File, mut pos: u64, end: u64, wanted: &[[u8; 4]]) -> Result<bool, TagError> {
    let Some((target, rest)) = wanted.split_first() else {
        return Ok(true);
    };

    while pos + 8 <= end {
        file.seek(SeekFrom::Start(pos))?;
        let mut header = [0u8; 8];
        file.read_exact(&mut header)?;

        let size = u32::from_be_bytes(header[..4].try_into().unwrap()) as u64;
        let name: [u8; 4] = header[4..8].try_into().unwrap();

        let (body, next) = match size {
            // Size 0 extends the atom to the end of the enclosing box.
            0 => (pos + 8, end),
            // Size 1 carries a 64-bit size after the name.
            1 => {
                let mut ext = [0u8; 8];
                file.read_exact(&mut ext)?;
                (pos + 16, pos.saturating_add(u64::from_be_bytes(ext)))
            }
            _ => (pos + 8, pos.saturating_add(size)),
        };
        if next <= pos || next > end {
            // Malformed size; stop scanning rather than guessing.
            return Ok(false);
        }

        if name == *target {
            // meta is a full atom; its children start after version/flags.
            let body = if name == *b"meta" { body + 4 } else { body };
            return find_atom(file, body, next, rest);
        }
        pos = next;
    }

    Ok(false)
}
