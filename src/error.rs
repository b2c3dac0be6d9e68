use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),
    #[error("FormatError: {0}")]
    Format(#[from] FormatError),
    #[error("AllocError: {0}")]
    Alloc(#[from] AllocError),
    #[error("SettingsError: {0}")]
    Settings(#[from] SettingsError),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("string is not a boolean: '{value}'")]
    InvalidBool { value: String },
    #[error("invalid numeric literal '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("format string ends with a bare '%'")]
    TrailingPercent,
    #[error("unsupported conversion '%{conversion}'")]
    UnsupportedConversion { conversion: char },
    #[error("missing argument for conversion {index}")]
    MissingArgument { index: usize },
    #[error("argument {index} cannot be rendered with '%{conversion}'")]
    TypeMismatch { index: usize, conversion: char },
}

#[derive(Error, Debug)]
pub enum AllocError {
    #[error("allocation of {elements} elements overflows the address space")]
    CapacityOverflow { elements: usize },
    #[error("out of memory: {size_bytes} bytes aligned to {align}")]
    OutOfMemory { size_bytes: usize, align: usize },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("file I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("settings parse error at {path}: {message}")]
    ParseFailed { path: String, message: String },
    #[error("settings serialization failed: {message}")]
    SerializeFailed { message: String },
    #[error("settings key '{key}' is missing")]
    MissingKey { key: String },
    #[error("invalid value for settings key '{key}'")]
    InvalidValue {
        key: String,
        #[source]
        source: ParseError,
    },
}
