mod zip_archive_writer;

pub use zip_archive_writer::ZipArchiveWriter;
