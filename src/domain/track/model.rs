/// One parsed track: the output file name and the text to speak.
///
/// Entries keep the order of the input file; uniqueness of file names across
/// entries is the operator's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub file_name: String,
    pub text: String,
}
