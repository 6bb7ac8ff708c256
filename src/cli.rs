use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagnote")]
#[command(version)]
#[command(about = "Write metadata tags into MP3 and M4A files")]
pub struct Cli {
    /// Input audio file (.mp3 or .m4a)
    pub input: PathBuf,

    /// Title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Track, as "N" or "N/total"
    #[arg(short = 'n', long)]
    pub track: Option<String>,

    /// Performer(s)
    #[arg(short = 'p', long)]
    pub performers: Option<String>,

    /// Composer(s)
    #[arg(short = 'c', long)]
    pub composers: Option<String>,

    /// Genre (free-form text)
    #[arg(short = 'g', long)]
    pub genre: Option<String>,

    /// Year
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Disc, as "N" or "N/total"
    #[arg(short = 'd', long)]
    pub disc: Option<String>,

    /// Album title
    #[arg(short = 'a', long)]
    pub album_title: Option<String>,

    /// Album artist
    #[arg(short = 'r', long)]
    pub album_artist: Option<String>,

    /// Cover art (path to a JPEG file)
    #[arg(long)]
    pub art: Option<PathBuf>,

    /// Strip existing tags (both backends already replace tags wholesale;
    /// accepted for compatibility with older scripts)
    #[arg(short = 's', long)]
    pub strip: bool,
}
