mod csv_name_parser;

pub use csv_name_parser::CsvNameListParser;
