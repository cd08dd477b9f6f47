/// Fatal application error carried up to `main` as a process exit code.
///
/// Per-series fetch failures are not `AppError`s; they stay recoverable and
/// live in `data::FetchError`.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

/// Configuration problem (missing credential, bad arguments).
const EXIT_CONFIG: u8 = 2;
/// Runtime failure (terminal setup, draw errors).
const EXIT_RUNTIME: u8 = 4;

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(EXIT_RUNTIME, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
