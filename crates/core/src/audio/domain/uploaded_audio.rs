/// An audio payload handed to the pipeline: raw bytes plus the filename it
/// was uploaded under. The filename is only used to derive a container hint.
#[derive(Clone, Debug)]
pub struct UploadedAudio {
    filename: String,
    bytes: Vec<u8>,
}

impl UploadedAudio {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Lower-cased final dot-segment of the filename, if any.
    ///
    /// This is a hint for format probing, never validated against the actual
    /// content; a mismatch surfaces later as a decode error.
    pub fn extension_hint(&self) -> Option<String> {
        let (stem, ext) = self.filename.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_hint_lowercases() {
        let upload = UploadedAudio::new("Track.MP3", vec![1, 2, 3]);
        assert_eq!(upload.extension_hint().as_deref(), Some("mp3"));
    }

    #[test]
    fn test_extension_hint_uses_last_segment() {
        let upload = UploadedAudio::new("voice.note.wav", vec![]);
        assert_eq!(upload.extension_hint().as_deref(), Some("wav"));
    }

    #[test]
    fn test_extension_hint_missing() {
        assert_eq!(UploadedAudio::new("noext", vec![]).extension_hint(), None);
        assert_eq!(UploadedAudio::new(".hidden", vec![]).extension_hint(), None);
        assert_eq!(UploadedAudio::new("dot.", vec![]).extension_hint(), None);
    }

    #[test]
    fn test_size_reports_byte_count() {
        let upload = UploadedAudio::new("a.wav", vec![0u8; 512]);
        assert_eq!(upload.size(), 512);
    }
}
