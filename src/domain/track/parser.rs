use super::error::TrackListError;
use super::model::TrackEntry;

/// Parse the raw track list into ordered entries.
///
/// Lines that are empty after trimming, or that start with `#`, never produce
/// an entry. Every remaining line must contain exactly one `|` separating the
/// track name from the spoken text; the name becomes `<name>.mp3` and the
/// text is kept verbatim.
///
/// # Errors
/// Returns [`TrackListError::MalformedLine`] for the first remaining line
/// with zero or more than one delimiter. The whole run fails before any
/// synthesis is attempted.
pub fn parse_track_list(input: &str) -> Result<Vec<TrackEntry>, TrackListError> {
    let mut entries = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.splitn(3, '|');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(text), None) => {
                entries.push(TrackEntry {
                    file_name: format!("{name}.mp3"),
                    text: text.to_string(),
                });
            }
            _ => {
                return Err(TrackListError::MalformedLine {
                    line: index + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(entries)
}
