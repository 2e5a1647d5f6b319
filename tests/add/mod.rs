mod add_directory_is_unsupported;
mod add_from_nested_directory;
mod add_missing_file;
