/// Whether whisper.cpp was built with a GPU backend on this platform.
///
/// Metal is compiled in on macOS; everything else runs on CPU.
pub fn gpu_available() -> bool {
    cfg!(target_os = "macos")
}
