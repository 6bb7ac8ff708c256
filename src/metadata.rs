use std::fs;

use crate::cli::Cli;
use crate::error::TagError;

/// A track or disc position parsed from a combined "N" or "N/total" token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackNumbers {
    pub number: u16,
    pub total: Option<u16>,
}

impl TrackNumbers {
    /// Parses `"N"` or `"N/total"`. A malformed number invalidates the whole
    /// token (`None`); a malformed total degenerates to "no total". Callers
    /// treat `None` as "field not supplied" rather than an error.
    pub fn parse(token: &str) -> Option<Self> {
        let (number, total) = match token.split_once('/') {
            Some((n, t)) => (n, Some(t)),
            None => (token, None),
        };

        let number = number.trim().parse().ok()?;
        let total = total.and_then(|t| t.trim().parse().ok());
        Some(Self { number, total })
    }

    /// Drops a total smaller than the number itself, keeping the number.
    pub fn drop_inconsistent_total(mut self) -> Self {
        if self.total.is_some_and(|t| self.number > t) {
            self.total = None;
        }
        self
    }
}

/// The fields the user asked to set. Presence means "write this field";
/// everything else is left out of the new tag entirely.
#[derive(Debug, Default)]
pub struct Metadata {
    pub title: Option<String>,
    pub track: Option<TrackNumbers>,
    pub performers: Option<String>,
    pub composers: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub disc: Option<TrackNumbers>,
    pub album_title: Option<String>,
    pub album_artist: Option<String>,
    pub cover_art: Option<Vec<u8>>,
}

impl Metadata {
    pub fn from_cli(cli: &Cli) -> Result<Self, TagError> {
        let cover_art = match &cli.art {
            Some(path) => {
                let data = fs::read(path).map_err(|source| TagError::CoverArtUnreadable {
                    path: path.clone(),
                    source,
                })?;
                Some(data)
            }
            None => None,
        };

        let track = parse_numbers(cli.track.as_deref(), "track");
        let disc =
            parse_numbers(cli.disc.as_deref(), "disc").map(TrackNumbers::drop_inconsistent_total);

        Ok(Self {
            title: cli.title.clone(),
            track,
            performers: cli.performers.clone(),
            composers: cli.composers.clone(),
            genre: cli.genre.clone(),
            year: cli.year,
            disc,
            album_title: cli.album_title.clone(),
            album_artist: cli.album_artist.clone(),
            cover_art,
        })
    }
}

fn parse_numbers(token: Option<&str>, field: &str) -> Option<TrackNumbers> {
    let token = token?;
    let parsed = TrackNumbers::parse(token);
    if parsed.is_none() {
        log::warn!("ignoring malformed {field} value \"{token}\"");
    }
    parsed
}
