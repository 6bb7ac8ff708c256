//! Frame-based backend for MPEG audio files.
//!
//! Known inconsistency with the legacy tool: repeated sets of the custom
//! TRCK/TPOS/TYER frames used to accumulate duplicates. The frame codec
//! replaces frames by identifier, so repeated sets are last-write-wins
//! here; see `repeated_set_replaces_frame` in the tests.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use id3::frame::{Frame, Picture, PictureType};
use id3::{Tag, TagLike, Version};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::TagError;
use crate::tag::TagWriter;

pub struct Mp3File {
    path: PathBuf,
    tag: Tag,
}

impl Mp3File {
    /// Validates that the file is genuine playable MPEG audio, then discards
    /// all existing ID3v1 and ID3v2 tag data. Prior tags are gone before any
    /// field is set: this backend replaces, it does not merge.
    pub fn open(path: &Path) -> Result<Self, TagError> {
        let duration = probe_duration(path)?;
        reject_zero_duration(duration)?;
        log::debug!("mpeg audio, duration {duration:?}");

        Tag::remove_from_path(path)?;
        id3::v1::Tag::remove_from_path(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            tag: Tag::new(),
        })
    }

    fn add_text_frame(&mut self, id: &str, value: String) {
        // `add_frame` replaces an existing frame with the same identifier,
        // so repeated sets within one run are last-write-wins.
        self.tag.add_frame(Frame::text(id, value));
    }
}

fn pair_text(number: u16, total: Option<u16>) -> String {
    match total {
        Some(total) => format!("{number}/{total}"),
        None => number.to_string(),
    }
}

impl TagWriter for Mp3File {
    fn set_title(&mut self, title: &str) {
        self.tag.set_title(title);
    }

    fn set_track(&mut self, number: u16, total: Option<u16>) {
        self.add_text_frame("TRCK", pair_text(number, total));
    }

    fn set_genre(&mut self, genre: &str) {
        self.tag.set_genre(genre);
    }

    fn set_performers(&mut self, performers: &str) {
        self.tag.set_artist(performers);
    }

    fn set_composers(&mut self, composers: &str) {
        self.add_text_frame("TCOM", composers.to_string());
    }

    fn set_year(&mut self, year: i32) {
        // Legacy readers look for an explicit TYER frame; the codec stores
        // the native year there as well, so the two writes share one frame.
        self.add_text_frame("TYER", year.to_string());
        self.tag.set_year(year);
    }

    fn set_disc(&mut self, number: u16, total: Option<u16>) {
        self.add_text_frame("TPOS", pair_text(number, total));
    }

    fn set_album_title(&mut self, title: &str) {
        self.tag.set_album(title);
    }

    fn set_album_artist(&mut self, artist: &str) {
        self.add_text_frame("TPE2", artist.to_string());
    }

    fn set_art(&mut self, data: &[u8]) {
        self.tag.add_frame(Picture {
            mime_type: "image/jpeg".to_string(),
            picture_type: PictureType::CoverFront,
            description: "Cover".to_string(),
            data: data.to_vec(),
        });
    }

    fn write(&mut self) -> Result<(), TagError> {
        self.tag.write_to_path(&self.path, Version::Id3v24)?;
        Ok(())
    }
}

// Parsed but holding no playable audio is still not a genuine audio file.
fn reject_zero_duration(duration: Duration) -> Result<(), TagError> {
    if duration.is_zero() {
        return Err(TagError::ZeroDuration);
    }
    Ok(())
}

/// Probes the file as MPEG audio and reports the stream duration without
/// decoding anything.
fn probe_duration(path: &Path) -> Result<Duration, TagError> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    hint.with_extension("mp3");

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let mut format = probed.format;
    let params = format
        .default_track()
        .ok_or(TagError::NotAudio)?
        .codec_params
        .clone();
    let time_base = params.time_base.ok_or(TagError::NotAudio)?;

    let frames = match params.n_frames {
        Some(frames) => frames,
        // CBR streams without a Xing header report no frame count up front;
        // walk the packets instead.
        None => {
            let mut total = 0u64;
            while let Ok(packet) = format.next_packet() {
                total += packet.dur();
            }
            total
        }
    };

    let time = time_base.calc_time(frames);
    Ok(Duration::from_secs_f64(time.seconds as f64 + time.frac))
}
