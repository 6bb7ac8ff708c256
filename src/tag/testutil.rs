//! Minimal-but-valid audio fixtures for backend tests.

use std::fs;
use std::path::Path;

// MPEG-1 layer III, 128 kbit/s, 44.1 kHz, no padding.
const MP3_FRAME_LEN: usize = 417;
const MP3_FRAME_HEADER: [u8; 4] = [0xff, 0xfb, 0x90, 0x00];

/// Writes a silent CBR MPEG audio stream. Each frame carries 1152 samples,
/// so 39 frames is roughly one second of audio. No Xing header is written;
/// duration must come from walking the packets.
pub fn write_mp3(path: &Path, frames: usize) {
    let mut data = Vec::with_capacity(frames * MP3_FRAME_LEN);
    for _ in 0..frames {
        data.extend_from_slice(&MP3_FRAME_HEADER);
        data.extend_from_slice(&[0u8; MP3_FRAME_LEN - 4]);
    }
    fs::write(path, data).unwrap();
}

fn atom(name: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + body.len());
    out.extend_from_slice(&((8 + body.len()) as u32).to_be_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(body);
    out
}

/// Writes an MPEG-4 container with an mvhd reporting `duration_secs` and,
/// when `with_tag_atom` is set, an empty `moov.udta.meta.ilst` tree.
pub fn write_m4a(path: &Path, duration_secs: u32, with_tag_atom: bool) {
    let mut mvhd_body = vec![0u8; 4]; // version 0 + flags
    mvhd_body.extend_from_slice(&0u32.to_be_bytes()); // creation time
    mvhd_body.extend_from_slice(&0u32.to_be_bytes()); // modification time
    mvhd_body.extend_from_slice(&1000u32.to_be_bytes()); // timescale
    mvhd_body.extend_from_slice(&(duration_secs * 1000).to_be_bytes());
    mvhd_body.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // rate 1.0
    mvhd_body.extend_from_slice(&0x0100u16.to_be_bytes()); // volume 1.0
    mvhd_body.extend_from_slice(&[0u8; 10]); // reserved
    for v in [0x0001_0000u32, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000] {
        mvhd_body.extend_from_slice(&v.to_be_bytes()); // unity matrix
    }
    mvhd_body.extend_from_slice(&[0u8; 24]); // pre_defined
    mvhd_body.extend_from_slice(&1u32.to_be_bytes()); // next track id

    let mut moov_body = atom(b"mvhd", &mvhd_body);
    if with_tag_atom {
        let mut hdlr_body = vec![0u8; 8]; // version/flags + pre_defined
        hdlr_body.extend_from_slice(b"mdir");
        hdlr_body.extend_from_slice(b"appl");
        hdlr_body.extend_from_slice(&[0u8; 9]); // reserved + empty name

        let mut meta_body = vec![0u8; 4]; // version/flags
        meta_body.extend_from_slice(&atom(b"hdlr", &hdlr_body));
        meta_body.extend_from_slice(&atom(b"ilst", &[]));

        let udta = atom(b"udta", &atom(b"meta", &meta_body));
        moov_body.extend_from_slice(&udta);
    }

    let mut ftyp_body = Vec::new();
    ftyp_body.extend_from_slice(b"M4A ");
    ftyp_body.extend_from_slice(&0u32.to_be_bytes());
    ftyp_body.extend_from_slice(b"M4A mp42isom");

    let mut data = atom(b"ftyp", &ftyp_body);
    data.extend_from_slice(&atom(b"moov", &moov_body));
    data.extend_from_slice(&atom(b"mdat", &[]));
    fs::write(path, data).unwrap();
}

/// An empty ID3v2.4 header with no audio frames after it: tagged, but zero
/// playable content.
pub fn write_id3_only(path: &Path) {
    fs::write(path, [b'I', b'D', b'3', 4, 0, 0, 0, 0, 0, 0]).unwrap();
}

/// Not audio at all, whatever the extension claims.
pub fn write_junk(path: &Path) {
    fs::write(path, b"this is not an audio file").unwrap();
}
