/// Media-type classification from directory path and file extension.
///
/// Rules are evaluated in order and the first match wins. Directory checks
/// are plain substring matches on the full containing-directory path, so
/// `MyMoviesCollection` counts as a movie folder.
use crate::model::MediaType;

/// What a rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Full path of the containing directory.
    pub dir: &'a str,
    /// File name, lower-cased.
    pub file_name: &'a str,
}

impl Candidate<'_> {
    fn dir_contains(&self, needle: &str) -> bool {
        self.dir.contains(needle)
    }

    fn has_extension(&self, exts: &[&str]) -> bool {
        exts.iter().any(|ext| self.file_name.ends_with(ext))
    }
}

/// A single classification rule.
pub struct Rule {
    pub matches: fn(&Candidate<'_>) -> bool,
    pub media_type: MediaType,
}

fn is_movie(c: &Candidate<'_>) -> bool {
    c.dir_contains("Movies") || c.has_extension(&[".mp4", ".mkv"])
}

fn is_tv_show(c: &Candidate<'_>) -> bool {
    c.dir_contains("TV Shows") || c.dir_contains("TV")
}

fn is_music(c: &Candidate<'_>) -> bool {
    c.dir_contains("Music") || c.has_extension(&[".mp3", ".flac"])
}

fn is_photo(c: &Candidate<'_>) -> bool {
    c.dir_contains("Photos") || c.has_extension(&[".jpg", ".png"])
}

/// Ordered rule table. Position is priority.
pub const RULES: &[Rule] = &[
    Rule {
        matches: is_movie,
        media_type: MediaType::Movie,
    },
    Rule {
        matches: is_tv_show,
        media_type: MediaType::TvShow,
    },
    Rule {
        matches: is_music,
        media_type: MediaType::Music,
    },
    Rule {
        matches: is_photo,
        media_type: MediaType::Photo,
    },
];

/// Classify a file given its containing directory and its name.
pub fn classify(dir: &str, file_name: &str) -> MediaType {
    let lower = file_name.to_lowercase();
    let candidate = Candidate {
        dir,
        file_name: &lower,
    };
    RULES
        .iter()
        .find(|rule| (rule.matches)(&candidate))
        .map_or(MediaType::Unknown, |rule| rule.media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_order_is_movie_tv_music_photo() {
        let order: Vec<MediaType> = RULES.iter().map(|r| r.media_type).collect();
        assert_eq!(
            order,
            vec![
                MediaType::Movie,
                MediaType::TvShow,
                MediaType::Music,
                MediaType::Photo
            ]
        );
    }

    #[test]
    fn extension_decides_outside_named_folders() {
        assert_eq!(classify("/nas/Media1/misc", "a.mkv"), MediaType::Movie);
        assert_eq!(classify("/nas/Media1/misc", "a.MP4"), MediaType::Movie);
        assert_eq!(classify("/nas/Media1/misc", "a.flac"), MediaType::Music);
        assert_eq!(classify("/nas/Media1/misc", "a.png"), MediaType::Photo);
    }

    /// `Movies` in the path fires before `TV` and before the mp3 extension.
    #[test]
    fn movies_folder_beats_tv_and_music() {
        assert_eq!(
            classify("/nas/Media1/Movies/TV", "x.mp3"),
            MediaType::Movie
        );
    }

    #[test]
    fn tv_folder_beats_audio_and_image_extensions() {
        assert_eq!(
            classify("/nas/Media1/TV Shows/Lost", "theme.mp3"),
            MediaType::TvShow
        );
        assert_eq!(classify("/nas/MediaTV", "poster.jpg"), MediaType::TvShow);
    }

    /// A video extension still wins over a TV folder because rule 1 checks
    /// the extension too.
    #[test]
    fn video_extension_in_tv_folder_is_movie() {
        assert_eq!(
            classify("/nas/Media1/TV Shows/Lost", "s01e01.mkv"),
            MediaType::Movie
        );
    }

    #[test]
    fn substring_match_is_loose() {
        assert_eq!(
            classify("/nas/Media1/MyMoviesCollection", "cover.jpg"),
            MediaType::Movie
        );
        assert_eq!(
            classify("/nas/Media1/Photos", "scan.tiff"),
            MediaType::Photo
        );
    }

    #[test]
    fn unmatched_is_unknown() {
        assert_eq!(classify("/nas/Media1/misc", "clip.webm"), MediaType::Unknown);
    }
}
