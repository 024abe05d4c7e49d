mod archive_writer;
mod image_transcoder;
mod length_extension;
mod name_list_parser;
mod page_splitter;

pub use archive_writer::{ArchiveWriter, ArchiveWriterError};
pub use image_transcoder::{EncodedImage, ImageTranscoder, ImageTranscoderError};
pub use length_extension::{ExtensionRequest, LengthExtensionClient, LengthExtensionError};
pub use name_list_parser::{NameListParseError, NameListParser};
pub use page_splitter::{PageSplitter, PageSplitterError, SplitOutcome};
