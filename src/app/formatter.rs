use crate::app::models::VideoItem;
use crate::app::probe::{resolve_duration, DurationProbe};
use std::path::PathBuf;

pub struct PlaylistGenerator;

impl PlaylistGenerator {
    /// Turns discovered file paths into playlist items: ids in discovery
    /// order starting at 0, escaped base names, probed durations.
    pub fn build_items(files: &[PathBuf], probe: &dyn DurationProbe) -> Vec<VideoItem> {
        files
            .iter()
            .enumerate()
            .map(|(id, path)| {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                VideoItem {
                    id,
                    display_name: escape_display_name(&name),
                    duration_millis: resolve_duration(probe, path),
                }
            })
            .collect()
    }

    /// Renders the full XSPF document, one logical line per `\n`, tabs for
    /// indentation. Track blocks follow item order; the footer enumerates
    /// ids 0..count.
    pub fn generate(items: &[VideoItem]) -> String {
        let mut out = String::new();

        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<playlist xmlns=\"http://xspf.org/ns/0/\" xmlns:vlc=\"http://www.videolan.org/vlc/playlist/ns/0/\" version=\"1\">\n");
        out.push_str("\t<title>Playlist</title>\n");
        out.push_str("\t<trackList>\n");

        for item in items {
            out.push_str("\t\t<track>\n");
            out.push_str(&format!(
                "\t\t<location>file:///{}</location>\n",
                item.display_name
            ));
            out.push_str(&format!(
                "\t\t<duration>{}</duration>\n",
                item.duration_millis
            ));
            out.push_str("\t\t<extension application=\"http://www.videolan.org/vlc/playlist/0\">\n");
            out.push_str(&format!("\t\t\t<vlc:id>{}</vlc:id>\n", item.id));
            out.push_str("\t\t</extension>\n");
            out.push_str("\t\t</track>\n");
        }

        out.push_str("\t</trackList>\n");
        out.push_str("\t<extension application=\"http://www.videolan.org/vlc/playlist/0\">\n");

        for id in 0..items.len() {
            out.push_str(&format!("\t\t<vlc:item tid=\"{}\"/>\n", id));
        }

        out.push_str("\t</extension>\n");
        out.push_str("</playlist>\n");

        out
    }
}

/// Reserved-character escaping as the playlist consumer expects it. `#`
/// takes precedence over `&`: a name containing both only has its `#`
/// occurrences escaped.
fn escape_display_name(name: &str) -> String {
    if name.contains('#') {
        name.replace('#', "%23")
    } else if name.contains('&') {
        name.replace('&', "%26")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::path::Path;

    struct FixedProbe(f64);

    impl DurationProbe for FixedProbe {
        fn probe(&self, _path: &Path) -> Result<Option<f64>> {
            Ok(Some(self.0))
        }
    }

    fn items(names: &[&str]) -> Vec<VideoItem> {
        names
            .iter()
            .enumerate()
            .map(|(id, name)| VideoItem {
                id,
                display_name: escape_display_name(name),
                duration_millis: 0.0,
            })
            .collect()
    }

    #[test]
    fn escapes_hash_to_percent_23() {
        assert_eq!(escape_display_name("My#Song.mp4"), "My%23Song.mp4");
        assert_eq!(escape_display_name("a##b.mkv"), "a%23%23b.mkv");
    }

    #[test]
    fn escapes_ampersand_to_percent_26() {
        assert_eq!(escape_display_name("Tom & Jerry.mkv"), "Tom %26 Jerry.mkv");
    }

    #[test]
    fn hash_takes_precedence_when_both_are_present() {
        // Mutually exclusive by design: only the '#' occurrences change.
        assert_eq!(escape_display_name("a#b&c.mp4"), "a%23b&c.mp4");
    }

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(escape_display_name("plain.mp4"), "plain.mp4");
    }

    #[test]
    fn build_items_assigns_sequential_ids_in_order() {
        let files = vec![
            PathBuf::from("/videos/a.mp4"),
            PathBuf::from("/videos/sub/b.mkv"),
            PathBuf::from("/videos/c.mp4"),
        ];
        let built = PlaylistGenerator::build_items(&files, &FixedProbe(0.0));

        let ids: Vec<usize> = built.iter().map(|i| i.id).collect();
        let names: Vec<&str> = built.iter().map(|i| i.display_name.as_str()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(names, vec!["a.mp4", "b.mkv", "c.mp4"]);
    }

    #[test]
    fn generate_emits_one_track_and_one_footer_entry_per_item() {
        let document = PlaylistGenerator::generate(&items(&["a.mp4", "b.mkv", "c.mp4"]));

        assert_eq!(document.matches("<track>").count(), 3);
        for tid in 0..3 {
            assert!(document.contains(&format!("\t\t<vlc:item tid=\"{}\"/>\n", tid)));
            assert!(document.contains(&format!("\t\t\t<vlc:id>{}</vlc:id>\n", tid)));
        }
        assert!(!document.contains("<vlc:item tid=\"3\"/>"));
    }

    #[test]
    fn generate_produces_the_exact_document_layout() {
        let built = vec![VideoItem {
            id: 0,
            display_name: "clip.mp4".to_string(),
            duration_millis: 1500.5,
        }];
        let document = PlaylistGenerator::generate(&built);

        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<playlist xmlns=\"http://xspf.org/ns/0/\" xmlns:vlc=\"http://www.videolan.org/vlc/playlist/ns/0/\" version=\"1\">\n\
\t<title>Playlist</title>\n\
\t<trackList>\n\
\t\t<track>\n\
\t\t<location>file:///clip.mp4</location>\n\
\t\t<duration>1500.5</duration>\n\
\t\t<extension application=\"http://www.videolan.org/vlc/playlist/0\">\n\
\t\t\t<vlc:id>0</vlc:id>\n\
\t\t</extension>\n\
\t\t</track>\n\
\t</trackList>\n\
\t<extension application=\"http://www.videolan.org/vlc/playlist/0\">\n\
\t\t<vlc:item tid=\"0\"/>\n\
\t</extension>\n\
</playlist>\n";
        assert_eq!(document, expected);
    }

    #[test]
    fn integral_durations_render_without_a_fraction() {
        let built = PlaylistGenerator::build_items(
            &[PathBuf::from("a.mp4")],
            // Missing file, so the probe is bypassed and the duration is 0.
            &FixedProbe(99.0),
        );
        let document = PlaylistGenerator::generate(&built);
        assert!(document.contains("<duration>0</duration>"));
    }

    #[test]
    fn empty_item_list_still_renders_a_complete_shell() {
        let document = PlaylistGenerator::generate(&[]);
        assert!(document.contains("<trackList>"));
        assert!(!document.contains("<track>"));
        assert!(!document.contains("vlc:item"));
        assert!(document.ends_with("</playlist>\n"));
    }
}
