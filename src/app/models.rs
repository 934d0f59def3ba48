/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Scan each digit-prefixed immediate subdirectory instead of the
    /// current directory itself.
    pub subdirs: bool,
}

/// Represents a single video file as it appears in one playlist.
///
/// Ids are assigned per directory in discovery order and reset to 0 for
/// every playlist; items never outlive the directory they were built for.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoItem {
    pub id: usize,
    /// Base name of the file with VLC's reserved characters escaped.
    pub display_name: String,
    /// Playback duration in milliseconds, 0 when unknown.
    pub duration_millis: f64,
}
