use thiserror::Error;

/// Reasons a datagram cannot be decoded or a response cannot be encoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Message too short: {0} bytes")]
    TooShort(usize),

    #[error("Label length byte {0:#04x} uses reserved bits")]
    CompressedLabel(u8),

    #[error("Message truncated at offset {0}")]
    Truncated(usize),

    #[error("Non-ASCII byte in label at offset {0}")]
    NonAsciiLabel(usize),

    #[error("Encoded name exceeds 255 bytes")]
    NameTooLong,

    #[error("Record data of {0} bytes does not fit the length field")]
    DataTooLong(usize),

    #[error("{0} answers do not fit in the header count")]
    TooManyAnswers(usize),

    #[error("Compression offset {0} does not fit in 14 bits")]
    PointerOutOfRange(usize),
}
